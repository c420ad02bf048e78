//! Shared scene doubles for the playback tests.

use brawler_rs::prelude::*;

/// Everything an object reported to the scene, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
	Spawn {
		owner: ObjectId,
		kind: i32,
		position: Vec2i,
		group: i32,
	},
	Destroy {
		owner: ObjectId,
		group: i32,
	},
	Finish {
		owner: ObjectId,
	},
}

/// Recording [`SceneHooks`] double.
#[derive(Debug, Default)]
pub struct SceneLog {
	pub events: Vec<SceneEvent>,
	pub handle_finish: bool,
}

impl SceneHooks for SceneLog {
	fn spawn(&mut self, owner: ObjectId, kind: i32, position: Vec2i, group: i32) {
		self.events.push(SceneEvent::Spawn {
			owner,
			kind,
			position,
			group,
		});
	}

	fn destroy(&mut self, owner: ObjectId, group: i32) {
		self.events.push(SceneEvent::Destroy { owner, group });
	}

	fn finish(&mut self, owner: ObjectId) -> bool {
		self.events.push(SceneEvent::Finish { owner });
		self.handle_finish
	}
}

/// Everything an object played, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioEvent {
	Sound { id: i32, volume: f32 },
	Music { track: MusicTrack },
	MusicStopped,
}

/// Recording [`AudioSink`] double.
#[derive(Debug, Default)]
pub struct AudioLog {
	pub events: Vec<AudioEvent>,
	playing: bool,
}

impl AudioSink for AudioLog {
	fn play_sound(&mut self, id: i32, volume: f32, _panning: f32, _pitch: f32) {
		self.events.push(AudioEvent::Sound { id, volume });
	}

	fn play_music(&mut self, track: MusicTrack, _volume: f32) {
		self.events.push(AudioEvent::Music { track });
		self.playing = true;
	}

	fn stop_music(&mut self) {
		self.events.push(AudioEvent::MusicStopped);
		self.playing = false;
	}

	fn music_is_playing(&self) -> bool {
		self.playing
	}
}

/// Scene-side receivers for one object.
#[derive(Debug, Default)]
pub struct EventLog {
	pub scene: SceneLog,
	pub audio: AudioLog,
}

impl EventLog {
	pub fn spawns(&self) -> Vec<&SceneEvent> {
		self.scene
			.events
			.iter()
			.filter(|e| matches!(e, SceneEvent::Spawn { .. }))
			.collect()
	}
}

/// Builds a fighter-shaped object with an identity sound table.
pub fn fighter(id: ObjectId, x: f32) -> Object {
	let mut obj = Object::new(id, Vec2f::new(x, 190.0));
	obj.sound_translation = (1..=50).collect();
	obj
}

/// Runs one unlinked object `ticks` times against the log.
pub fn run(obj: &mut Object, log: &mut EventLog, settings: &AudioSettings, ticks: u32) {
	for _ in 0..ticks {
		obj.run_tick(None, &mut log.scene, &mut log.audio, settings);
	}
}
