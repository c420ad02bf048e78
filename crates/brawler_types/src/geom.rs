//! Small geometry primitives shared by the animation engine.
//!
//! Positions and velocities are floating point because slide velocities are
//! fractional (a displacement spread over N ticks); spawn coordinates and
//! enemy-relative offsets stay integral like the original script values.

use serde::{Deserialize, Serialize};

/// 2D vector with `f32` components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2f {
	/// Horizontal component
	pub x: f32,
	/// Vertical component
	pub y: f32,
}

impl Vec2f {
	/// Creates a new vector from components.
	pub fn new(x: f32, y: f32) -> Self {
		Self {
			x,
			y,
		}
	}

	/// The zero vector.
	pub fn zero() -> Self {
		Self::new(0.0, 0.0)
	}
}

impl std::ops::Add for Vec2f {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl std::ops::AddAssign for Vec2f {
	fn add_assign(&mut self, rhs: Self) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

/// 2D vector with `i32` components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vec2i {
	/// Horizontal component
	pub x: i32,
	/// Vertical component
	pub y: i32,
}

impl Vec2i {
	/// Creates a new vector from components.
	pub fn new(x: i32, y: i32) -> Self {
		Self {
			x,
			y,
		}
	}

	/// The zero vector.
	pub fn zero() -> Self {
		Self::new(0, 0)
	}
}

impl From<Vec2i> for Vec2f {
	fn from(v: Vec2i) -> Self {
		Self::new(v.x as f32, v.y as f32)
	}
}

/// Signed distance from `a` to `b`.
pub fn dist(a: f32, b: f32) -> f32 {
	b - a
}
