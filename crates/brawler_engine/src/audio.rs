//! Audio subsystem interface.
//!
//! The interpreter never blocks on audio: sound and music tags are
//! fire-and-forget triggers handed to whatever [`AudioSink`] the caller
//! wires in. The engine only computes the parameters (volume, panning,
//! pitch) from the frame tags and the user's volume settings.

/// Default sound volume before tag and settings scaling.
pub const VOLUME_DEFAULT: f32 = 1.0;
/// Default stereo panning (centered).
pub const PANNING_DEFAULT: f32 = 0.0;
/// Default playback pitch.
pub const PITCH_DEFAULT: f32 = 1.0;
/// Lowest pitch a sound tag can request.
pub const PITCH_MIN: f32 = 0.5;
/// Highest pitch a sound tag can request.
pub const PITCH_MAX: f32 = 2.0;

/// Music tracks selectable by the `smo` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
	/// Victory / end-of-match theme
	End,
	/// Menu theme
	Menu,
	/// Arena theme 0
	Arena0,
	/// Arena theme 1
	Arena1,
	/// Arena theme 2
	Arena2,
	/// Arena theme 3
	Arena3,
	/// Arena theme 4
	Arena4,
}

impl MusicTrack {
	/// Maps an `smo` tag payload (1..=7) to a track. Payload 0 means "stop
	/// music" and unknown selectors are ignored by the interpreter.
	pub fn from_selector(selector: i32) -> Option<Self> {
		match selector {
			1 => Some(Self::End),
			2 => Some(Self::Menu),
			3 => Some(Self::Arena0),
			4 => Some(Self::Arena1),
			5 => Some(Self::Arena2),
			6 => Some(Self::Arena3),
			7 => Some(Self::Arena4),
			_ => None,
		}
	}
}

impl std::fmt::Display for MusicTrack {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::End => write!(f, "End"),
			Self::Menu => write!(f, "Menu"),
			Self::Arena0 => write!(f, "Arena0"),
			Self::Arena1 => write!(f, "Arena1"),
			Self::Arena2 => write!(f, "Arena2"),
			Self::Arena3 => write!(f, "Arena3"),
			Self::Arena4 => write!(f, "Arena4"),
		}
	}
}

/// Receiver for sound and music triggers fired by frame tags.
pub trait AudioSink {
	/// Plays a sound effect with the given parameters.
	fn play_sound(&mut self, id: i32, volume: f32, panning: f32, pitch: f32);

	/// Starts a music track at the given volume, replacing the current one.
	fn play_music(&mut self, track: MusicTrack, volume: f32);

	/// Stops the current music track.
	fn stop_music(&mut self);

	/// Returns true while music is playing.
	fn music_is_playing(&self) -> bool;
}

/// Audio sink that drops every trigger.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
	fn play_sound(&mut self, _id: i32, _volume: f32, _panning: f32, _pitch: f32) {}

	fn play_music(&mut self, _track: MusicTrack, _volume: f32) {}

	fn stop_music(&mut self) {}

	fn music_is_playing(&self) -> bool {
		false
	}
}
