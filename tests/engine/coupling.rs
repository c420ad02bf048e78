//! Linked two-object exchanges.
//!
//! The scene ticks both fighters every simulation tick, handing each the
//! other as its linked enemy.

use brawler_rs::prelude::*;
use test_log::test;

use crate::support::{EventLog, fighter};

fn idle() -> Animation {
	Animation::new(Track::from_frames(vec![
		Frame::new(0, 4),
		Frame::new(1, 4),
	]))
}

/// Ticks `a` then `b`, each seeing the other as the enemy.
fn run_pair(a: &mut Object, b: &mut Object, logs: &mut (EventLog, EventLog), ticks: u32) {
	let settings = AudioSettings::default();
	for _ in 0..ticks {
		a.run_tick(Some(&mut *b), &mut logs.0.scene, &mut logs.0.audio, &settings);
		b.run_tick(Some(&mut *a), &mut logs.1.scene, &mut logs.1.audio, &settings);
	}
}

#[test]
fn test_throw_pulls_the_victim_forward() {
	let mut attacker = fighter(1, 60.0);
	attacker.load_animation(Animation::new(Track::from_frames(vec![
		Frame::new(0, 2).with_marker(TagKind::Bm),
		Frame::new(1, 4),
	])));
	let mut victim = fighter(2, 240.0);
	victim.load_animation(idle());
	let mut logs = <(EventLog, EventLog)>::default();

	run_pair(&mut attacker, &mut victim, &mut logs, 1);

	// The grab snaps the attacker onto the victim and burns the victim's
	// first frame within the same tick: the victim's own tick then lands
	// directly on frame 1.
	assert_eq!(attacker.position, victim.position);
	assert_eq!(victim.current_frame_index(), Some(1));
	assert_eq!(victim.player.ticks(), 6);
}

#[test]
fn test_enemy_hover_suspends_the_victim() {
	let mut attacker = fighter(1, 60.0);
	attacker.load_animation(Animation::new(Track::from_frames(vec![
		Frame::new(0, 3).with_marker(TagKind::EnemyHover),
		Frame::new(1, 3),
	])));
	let mut victim = fighter(2, 240.0);
	victim.load_animation(idle());
	let mut logs = <(EventLog, EventLog)>::default();

	// The victim ticks first here: its own frame entry resets its sprite
	// state, so the suspension lands after it and sticks.
	run_pair(&mut victim, &mut attacker, &mut logs, 1);
	assert!(victim.sprite_state.disable_gravity);
	assert!(!attacker.sprite_state.disable_gravity);
}

#[test]
fn test_enemy_relative_hold_follows_a_moving_enemy() {
	let mut grappler = fighter(1, 60.0);
	grappler.load_animation(Animation::new(Track::from_frames(vec![
		Frame::new(0, 5)
			.with_marker(TagKind::EnemyRelative)
			.with_tag(TagKind::XMinus, 12),
		Frame::new(1, 5),
	])));
	let mut runner = fighter(2, 200.0);
	// The runner slides away for the whole exchange.
	runner.load_animation(Animation::new(Track::from_frames(vec![
		Frame::new(0, 8).with_tag(TagKind::XPlus, 3),
	])));
	let mut logs = <(EventLog, EventLog)>::default();

	run_pair(&mut grappler, &mut runner, &mut logs, 4);

	// Grappler ticks first, so it sees the runner's position from the
	// previous tick, offset by the mirrored hold distance.
	assert_eq!(runner.position.x, 200.0 + 3.0 * 3.0);
	assert_eq!(grappler.position.x, (200.0 + 2.0 * 3.0) - 12.0);
	assert_eq!(grappler.position.y, runner.position.y);
}

#[test]
fn test_snap_behind_respects_facing() {
	let mut attacker = fighter(1, 60.0);
	attacker.set_direction(Direction::Left);
	attacker.load_animation(Animation::new(Track::from_frames(vec![
		Frame::new(0, 1)
			.with_marker(TagKind::SnapBehind)
			.with_marker(TagKind::ReverseDirection),
	])));
	let mut victim = fighter(2, 240.0);
	victim.load_animation(idle());
	let mut logs = <(EventLog, EventLog)>::default();

	run_pair(&mut attacker, &mut victim, &mut logs, 1);
	assert_eq!(attacker.position.x, 240.0 - 15.0);
	assert_eq!(attacker.direction(), Direction::Right);
}

#[test]
fn test_unlinked_objects_ignore_enemy_tags() {
	// A scene prop running an animation full of enemy-relative tags must
	// not move or crash when no enemy is linked.
	let mut prop = Object::new(9, Vec2f::new(10.0, 20.0));
	prop.load_animation(Animation::new(Track::from_frames(vec![
		Frame::new(0, 2)
			.with_marker(TagKind::Bm)
			.with_marker(TagKind::SnapBehind)
			.with_marker(TagKind::EnemyHover),
		Frame::new(1, 2),
	])));
	let mut log = EventLog::default();
	let settings = AudioSettings::default();

	for _ in 0..4 {
		prop.run_tick(None, &mut log.scene, &mut log.audio, &settings);
	}
	assert_eq!(prop.position, Vec2f::new(10.0, 20.0));
}
