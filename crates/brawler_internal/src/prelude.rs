//! Prelude module for `brawler_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use brawler_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let mut fighter = Object::new(1, Vec2f::zero());
//! fighter.load_animation(Animation::new(Track::from_frames(vec![Frame::new(0, 5)])));
//! assert!(fighter.has_animation());
//! ```

// Re-export everything from the member preludes
#[doc(inline)]
pub use brawler_engine::prelude::*;
#[doc(inline)]
pub use brawler_types::prelude::*;

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use brawler_engine;
#[doc(inline)]
pub use brawler_types;
