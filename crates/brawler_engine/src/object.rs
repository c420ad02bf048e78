//! Simulated game objects.
//!
//! Every moving thing in a match (fighter, projectile, scene prop) is an
//! [`Object`]: position and velocity, facing direction, render state, slide
//! state, and an embedded animation interpreter. Objects own their animation
//! track exclusively; two objects never alias the same track because frame
//! durations are mutable.

use brawler_types::{anim::Animation, geom::Vec2f};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{
	player::Player,
	slide::{EnemySlideState, SlideState},
	sprite::SpriteState,
};

/// Identifier the scene uses to address objects in hook callbacks.
pub type ObjectId = u32;

/// Sprite indices at or above this are treated as "hide the sprite".
pub const SPRITE_INDEX_LIMIT: u8 = 25;

/// Facing direction of an object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
	/// Facing right (+x)
	#[default]
	Right,
	/// Facing left (-x)
	Left,
}

impl Direction {
	/// Returns +1 for right, -1 for left; used to mirror X offsets.
	pub fn factor(self) -> i32 {
		match self {
			Self::Right => 1,
			Self::Left => -1,
		}
	}

	/// Returns the opposite direction.
	pub fn flipped(self) -> Self {
		match self {
			Self::Right => Self::Left,
			Self::Left => Self::Right,
		}
	}
}

/// One simulated object and all of its per-tick state.
#[derive(Debug)]
pub struct Object {
	/// Scene-assigned identifier, reported through hook callbacks.
	pub id: ObjectId,
	/// Current position.
	pub position: Vec2f,
	/// Position at animation start; absolute placement tags are relative
	/// to this.
	pub start: Vec2f,
	/// Persistent velocity, integrated by the caller's physics step.
	pub velocity: Vec2f,
	/// Vertical scale factor set by the `y` tag.
	pub y_percent: f32,
	/// Circular-motion mode, armed per frame by the `as` tag.
	pub orbit: bool,
	/// Remaining ticks of the hit window.
	pub hit_frames: i32,
	/// True while the object's attack can register a hit this tick.
	pub can_hit: bool,
	/// True when this object is the first player's fighter; drives the
	/// `bpf` palette window choice.
	pub first_player: bool,
	/// Script sound index to engine sample id translation table.
	pub sound_translation: Vec<u8>,
	/// Per-frame render state.
	pub sprite_state: SpriteState,
	/// Self-driven slide.
	pub slide_state: SlideState,
	/// Enemy-tracking slide.
	pub enemy_slide_state: EnemySlideState,
	/// Sprite selected by the current frame; `None` hides the object.
	pub current_sprite: Option<u8>,
	/// Animation interpreter state.
	pub player: Player,
	direction: Direction,
	rng: SmallRng,
	pub(crate) animation: Option<Animation>,
}

impl Object {
	/// Creates an object at a start position.
	///
	/// The random stream is seeded from the object id; call [`seed_rng`]
	/// with a match-level seed before networked play so both peers draw
	/// identical spawn coordinates.
	///
	/// [`seed_rng`]: Self::seed_rng
	pub fn new(id: ObjectId, start: Vec2f) -> Self {
		Self {
			id,
			position: start,
			start,
			velocity: Vec2f::zero(),
			y_percent: 1.0,
			orbit: false,
			hit_frames: 0,
			can_hit: false,
			first_player: false,
			sound_translation: Vec::new(),
			sprite_state: SpriteState::new(),
			slide_state: SlideState::default(),
			enemy_slide_state: EnemySlideState::default(),
			current_sprite: None,
			player: Player::new(),
			direction: Direction::Right,
			rng: SmallRng::seed_from_u64(u64::from(id)),
			animation: None,
		}
	}

	/// Reseeds the object's random stream. Both peers of a networked match
	/// must seed identically for lockstep determinism.
	pub fn seed_rng(&mut self, seed: u64) {
		self.rng = SmallRng::seed_from_u64(seed);
	}

	/// Bounded random draw in `0..span`; degenerate spans clamp to 1.
	pub(crate) fn random_below(&mut self, span: i32) -> i32 {
		self.rng.random_range(0..span.max(1))
	}

	/// Returns the facing direction.
	pub fn direction(&self) -> Direction {
		self.direction
	}

	/// Sets the facing direction.
	pub fn set_direction(&mut self, direction: Direction) {
		self.direction = direction;
	}

	/// Loads a new animation, resetting interpreter and motion state:
	/// tick 1, no previous frame, slides cancelled, hit window closed.
	pub fn load_animation(&mut self, animation: Animation) {
		self.animation = Some(animation);
		self.player.reload();
		self.slide_state.clear();
		self.enemy_slide_state.clear();
		self.hit_frames = 0;
		self.can_hit = false;
	}

	/// Returns the loaded animation, if any.
	pub fn animation(&self) -> Option<&Animation> {
		self.animation.as_ref()
	}

	/// True when an animation is loaded.
	pub fn has_animation(&self) -> bool {
		self.animation.is_some()
	}

	/// Translates a script sound index through the object's table.
	/// Returns `None` for unmapped entries.
	pub(crate) fn translate_sound(&self, script_index: i32) -> Option<i32> {
		let raw = usize::try_from(script_index).ok()?;
		let mapped = i32::from(*self.sound_translation.get(raw)?) - 1;
		(mapped >= 0).then_some(mapped)
	}

	/// Selects the sprite shown for the current frame.
	pub(crate) fn select_sprite(&mut self, index: u8) {
		self.current_sprite = Some(index);
	}

	/// Hides the sprite.
	pub(crate) fn hide_sprite(&mut self) {
		self.current_sprite = None;
	}
}
