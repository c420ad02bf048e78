//! This module is separated into its own crate to enable simple dynamic linking for `brawler`, and should not be used directly.

/// `use brawler::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use brawler_engine;
pub use brawler_types;

// Re-export commonly used types at crate root
pub use brawler_engine::{
	audio::{AudioSink, MusicTrack, NullAudio},
	hooks::{NullHooks, SceneHooks},
	object::{Direction, Object, ObjectId},
	player::Player,
	settings::AudioSettings,
};
pub use brawler_types::anim::{Animation, Frame, TagKind, Tags, Track, TrackError};
