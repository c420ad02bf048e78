//! This crate provides core data types for the `brawler-rs` project.
//!
//! # Contents
//!
//! - **anim**: animation tracks, frames and decoded frame tags, the data
//!   the combat tag interpreter runs on
//! - **geom**: small 2D vector types shared across the engine
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use brawler_types::prelude::*;
//!
//! let mut track = Track::new();
//! track.push(Frame::new(0, 5));
//! track.push(Frame::new(1, 1).with_tag(TagKind::Spawn, 7));
//!
//! assert_eq!(track.total_ticks(), 6);
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use brawler_types::anim::{Frame, Track};
//!
//! let track = Track::from_frames(vec![Frame::new(0, 5)]);
//! assert_eq!(track.frame_count(), 1);
//! ```

pub mod anim;
pub mod geom;

/// `use brawler_types::prelude::*;` to import commonly used items.
pub mod prelude;
