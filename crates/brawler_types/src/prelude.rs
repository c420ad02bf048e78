//! Prelude module for `brawler_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```
//! use brawler_types::prelude::*;
//!
//! let frame = Frame::new(0, 10).with_marker(TagKind::Hover);
//! let track = Track::from_frames(vec![frame]);
//! assert_eq!(track.frame_count(), 1);
//! ```

// Animation types
#[doc(inline)]
pub use crate::anim::{
	// Payload handed to an object
	Animation,

	// Track types
	Frame,
	FrameEvent,

	// Tag types
	TagKind,
	TagValue,
	Tags,

	Track,
	TrackError,
};

// Geometry types
#[doc(inline)]
pub use crate::geom::{Vec2f, Vec2i, dist};

// Re-export the anim module for advanced usage
#[doc(inline)]
pub use crate::anim;
