//! Animation data model for the `brawler-rs` project.
//!
//! This module provides the pre-parsed animation representation the combat
//! engine runs on: frames with sprite indices and tick durations, decoded
//! tag sets, and the tick-indexed [`Track`] cursor the interpreter drives.
//! The textual animation-descriptor parser lives upstream; engine code only
//! ever sees these types.

mod error;

pub mod animation;
pub mod frame;
pub mod tag;
pub mod track;

// Re-export unified error type
pub use error::TrackError;

// Re-export main animation types
pub use animation::Animation;
pub use frame::Frame;
pub use tag::{TagKind, TagValue, Tags};
pub use track::{FrameEvent, Track};
