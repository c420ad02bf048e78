//! Benchmark helper utilities for brawler-rs
//!
//! This module provides utilities for generating synthetic animation tracks
//! and common benchmark helpers for the brawler-rs project.
//!
//! The generated tracks mimic real fighter move data: a few startup frames,
//! a tag-heavy active section (sounds, spawns, hit windows, placement), and
//! a quiet recovery tail. Frame durations are short so that the interpreter
//! dispatches tags on most ticks, which is the hot path worth measuring.

use brawler_types::anim::{Frame, TagKind, Track};

/// Generates a tag-heavy attack track with the given number of frames.
///
/// Every third frame carries a full active-frame tag load; the rest are
/// plain one-tick frames so frame entries dominate the workload.
pub fn generate_attack_track(frames: usize) -> Track {
	let mut out = Vec::with_capacity(frames);
	for i in 0..frames {
		let sprite = (i % 20) as u8;
		let frame = if i % 3 == 0 {
			Frame::new(sprite, 1)
				.with_tag(TagKind::Sound, (i % 30) as i32)
				.with_tag(TagKind::SoundPitch, 120)
				.with_tag(TagKind::HitWindow, 2)
				.with_tag(TagKind::XPlus, 2)
		} else {
			Frame::new(sprite, 1)
		};
		out.push(frame);
	}
	Track::from_frames(out)
}

/// Generates a quiet idle loop with longer frame durations.
///
/// Most ticks fall inside a frame here, so this measures the
/// advance-without-dispatch path.
pub fn generate_idle_track(frames: usize, duration: u32) -> Track {
	Track::from_frames(
		(0..frames)
			.map(|i| Frame::new((i % 4) as u8, duration))
			.collect(),
	)
}

/// Generates a projectile-style track: startup frames, then a spawn frame.
pub fn generate_projectile_track(startup_frames: usize) -> Track {
	let mut out: Vec<Frame> = (0..startup_frames)
		.map(|i| Frame::new((i % 8) as u8, 2))
		.collect();
	out.push(
		Frame::new(9, 3)
			.with_tag(TagKind::Spawn, 1)
			.with_tag(TagKind::SpawnX, 24),
	);
	Track::from_frames(out)
}

/// Common track sizes for synthetic benchmark data
pub mod sizes {
	/// Single move: a typical special attack (~16 frames)
	pub const MOVE: usize = 16;
	/// Long scripted sequence: a victory pose or cutscene (~64 frames)
	pub const SEQUENCE: usize = 64;
	/// Stress size: far beyond anything in real content (~512 frames)
	pub const STRESS: usize = 512;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_attack_track() {
		let track = generate_attack_track(sizes::MOVE);
		assert_eq!(track.frame_count(), 16);
		assert_eq!(track.total_ticks(), 16);
		assert!(track.peek(0).unwrap().tags.is_set(TagKind::Sound));
		assert!(!track.peek(1).unwrap().tags.is_set(TagKind::Sound));
	}

	#[test]
	fn test_generate_idle_track() {
		let track = generate_idle_track(4, 10);
		assert_eq!(track.total_ticks(), 40);
	}

	#[test]
	fn test_generate_projectile_track() {
		let track = generate_projectile_track(6);
		assert_eq!(track.frame_count(), 7);
		assert!(track.peek(6).unwrap().tags.is_set(TagKind::Spawn));
	}
}
