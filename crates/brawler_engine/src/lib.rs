//! Combat animation engine for the `brawler-rs` project.
//!
//! The heart of the crate is the tag interpreter in [`player`]: once per
//! simulation tick it advances an object's animation track, detects frame
//! boundaries, and turns the entered frame's tags into gameplay effects:
//! movement, hits, projectile spawns, audio triggers and palette changes.
//! Everything is synchronous and deterministic; audio and projectile
//! effects are handed to caller-provided [`audio::AudioSink`] and
//! [`hooks::SceneHooks`] implementations.
//!
//! # Examples
//!
//! ```
//! use brawler_engine::prelude::*;
//! use brawler_types::prelude::*;
//!
//! let mut fighter = Object::new(1, Vec2f::new(60.0, 190.0));
//! let track = Track::from_frames(vec![
//!     Frame::new(0, 5),
//!     Frame::new(1, 3).with_tag(TagKind::HitWindow, 3),
//! ]);
//! fighter.load_animation(Animation::new(track));
//!
//! let settings = AudioSettings::default();
//! for _ in 0..6 {
//!     fighter.run_tick(None, &mut NullHooks, &mut NullAudio, &settings);
//! }
//! assert!(fighter.can_hit);
//! ```

pub mod audio;
pub mod hooks;
pub mod object;
pub mod player;
pub mod settings;
pub mod slide;
pub mod sprite;

/// `use brawler_engine::prelude::*;` to import commonly used items.
pub mod prelude;
