//! Scripted linear displacements.
//!
//! Slides run independently of tag decoding: a movement tag arms one of
//! these at frame entry and the interpreter applies it at the top of every
//! tick until the timer runs out. At most one slide of each kind is active
//! per object; a new slide command overwrites the previous one.

use brawler_types::geom::{Vec2f, Vec2i};

/// Self-driven slide: a fixed velocity applied for `timer` ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlideState {
	/// Ticks remaining
	pub timer: u32,
	/// Displacement added to the position each tick
	pub velocity: Vec2f,
}

impl SlideState {
	/// Cancels the slide.
	pub fn clear(&mut self) {
		*self = Self::default();
	}
}

/// Enemy-tracking slide: the object's position is recomputed as
/// `enemy.position + offset` every tick, so it follows a moving enemy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnemySlideState {
	/// Ticks remaining
	pub timer: u32,
	/// Ticks elapsed since the slide started
	pub duration: u32,
	/// Offset from the enemy's position
	pub offset: Vec2i,
}

impl EnemySlideState {
	/// Cancels the slide.
	pub fn clear(&mut self) {
		*self = Self::default();
	}
}
