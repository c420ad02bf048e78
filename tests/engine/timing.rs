//! Startup-delay distribution and cursor-jump scenarios.

use brawler_rs::prelude::*;
use test_log::test;

use crate::support::{EventLog, SceneEvent, fighter, run};

/// Four startup frames, then the projectile frame.
fn fireball() -> Animation {
	Animation::new(Track::from_frames(vec![
		Frame::new(0, 2),
		Frame::new(1, 2),
		Frame::new(2, 2),
		Frame::new(3, 2),
		Frame::new(4, 3)
			.with_tag(TagKind::Spawn, 6)
			.with_tag(TagKind::SpawnX, 16),
	]))
}

fn first_spawn_tick(obj: &mut Object, max_ticks: u32) -> Option<u32> {
	let mut log = EventLog::default();
	let settings = AudioSettings::default();
	for tick in 1..=max_ticks {
		obj.run_tick(None, &mut log.scene, &mut log.audio, &settings);
		if !log.spawns().is_empty() {
			return Some(tick);
		}
	}
	None
}

#[test]
fn test_startup_delay_shifts_the_spawn_tick() {
	let mut obj = fighter(1, 80.0);
	obj.load_animation(fireball());
	assert_eq!(first_spawn_tick(&mut obj, 30), Some(9));

	let mut obj = fighter(1, 80.0);
	obj.load_animation(fireball());
	obj.set_delay(10).unwrap();
	assert_eq!(first_spawn_tick(&mut obj, 30), Some(19));
}

#[test]
fn test_startup_delay_keeps_the_spawn_itself_intact() {
	let mut obj = fighter(1, 80.0);
	obj.load_animation(fireball());
	obj.set_delay(7).unwrap();

	let mut log = EventLog::default();
	run(&mut obj, &mut log, &AudioSettings::default(), 20);
	assert_eq!(
		log.spawns(),
		vec![&SceneEvent::Spawn {
			owner: 1,
			kind: 6,
			position: Vec2i::new(96, 0),
			group: 0,
		}]
	);
}

#[test]
fn test_goto_frame_resumes_mid_animation() {
	let mut obj = fighter(1, 80.0);
	obj.load_animation(fireball());
	obj.goto_frame(3).unwrap();

	// Frame 3 plays out its two ticks, then the spawn frame begins.
	assert_eq!(first_spawn_tick(&mut obj, 10), Some(3));
}

#[test]
fn test_goto_frame_rejects_out_of_range() {
	let mut obj = fighter(1, 80.0);
	obj.load_animation(fireball());
	assert!(matches!(
		obj.goto_frame(9),
		Err(TrackError::FrameOutOfRange { index: 9, count: 5 })
	));
}

#[test]
fn test_jump_to_tick_lands_on_the_covering_frame() {
	let mut obj = fighter(1, 80.0);
	obj.load_animation(fireball());
	obj.jump_to_tick(6);

	let mut log = EventLog::default();
	run(&mut obj, &mut log, &AudioSettings::default(), 1);
	assert_eq!(obj.current_frame_index(), Some(2));
	assert_eq!(obj.current_sprite_letter(), Some('C'));
}

#[test]
fn test_sprite_letters_follow_the_track() {
	let mut obj = fighter(1, 80.0);
	obj.load_animation(Animation::new(Track::from_frames(vec![
		Frame::new(0, 1),
		Frame::new(3, 1),
		Frame::new(25, 1),
	])));
	let mut log = EventLog::default();
	let settings = AudioSettings::default();

	let mut letters = Vec::new();
	for _ in 0..3 {
		obj.run_tick(None, &mut log.scene, &mut log.audio, &settings);
		letters.push(obj.current_sprite_letter());
	}

	assert_eq!(letters, vec![Some('A'), Some('D'), Some('Z')]);
	// Index 25 is past the drawable range, so nothing is selected.
	assert_eq!(obj.current_sprite, None);
}
