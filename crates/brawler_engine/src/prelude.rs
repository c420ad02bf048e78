//! Prelude module for `brawler_engine`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```
//! use brawler_engine::prelude::*;
//! use brawler_types::geom::Vec2f;
//!
//! let object = Object::new(1, Vec2f::zero());
//! assert!(!object.has_animation());
//! ```

// Audio interface
#[doc(inline)]
pub use crate::audio::{AudioSink, MusicTrack, NullAudio};

// Scene hooks
#[doc(inline)]
pub use crate::hooks::{NullHooks, SceneHooks};

// Object types
#[doc(inline)]
pub use crate::object::{Direction, Object, ObjectId, SPRITE_INDEX_LIMIT};

// Interpreter
#[doc(inline)]
pub use crate::player::{ARENA_CENTER_X, ARENA_WIDTH, Player};

// Settings
#[doc(inline)]
pub use crate::settings::AudioSettings;

// Motion and render state
#[doc(inline)]
pub use crate::slide::{EnemySlideState, SlideState};
#[doc(inline)]
pub use crate::sprite::{BlendMode, Flip, SpriteState};
