//! Scene callbacks fired by the interpreter.
//!
//! Spawn and destroy requests, plus the end-of-animation handoff, cross the
//! boundary between one object's interpreter and the scene that owns all
//! objects. The scene passes a [`SceneHooks`] implementation into every
//! tick; all calls are synchronous and complete within the tick.

use brawler_types::geom::Vec2i;

use crate::object::ObjectId;

/// Scene-side receiver for interpreter events.
///
/// Every method has a no-op default, mirroring the permissive tag handling:
/// an unhandled event simply does nothing.
pub trait SceneHooks {
	/// A frame requested a projectile spawn.
	fn spawn(&mut self, owner: ObjectId, kind: i32, position: Vec2i, group: i32) {
		let _ = (owner, kind, position, group);
	}

	/// A frame requested destruction of a projectile group.
	fn destroy(&mut self, owner: ObjectId, group: i32) {
		let _ = (owner, group);
	}

	/// The object's animation reached its end without `repeat` set.
	///
	/// Return true to take over (the object enters a terminal
	/// post-animation state and the scene decides what happens next);
	/// return false to let the interpreter mark the animation finished.
	fn finish(&mut self, owner: ObjectId) -> bool {
		let _ = owner;
		false
	}
}

/// Hooks implementation that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHooks;

impl SceneHooks for NullHooks {}
