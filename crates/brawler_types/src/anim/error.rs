//! Error types for animation track manipulation.

use thiserror::Error;

/// Errors that can occur when building or manipulating animation tracks
#[derive(Debug, Error)]
pub enum TrackError {
	/// Frame index out of range
	#[error("Frame index {index} out of range (track has {count} frames)")]
	FrameOutOfRange {
		/// Frame index that was requested
		index: usize,
		/// Number of frames in the track
		count: usize,
	},
}
