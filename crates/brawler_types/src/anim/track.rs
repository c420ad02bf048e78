//! Animation track: an ordered frame sequence with a tick cursor.
//!
//! A track is the per-object, pre-parsed form of an animation: frames with
//! sprite indices, tick durations and decoded tag sets. It owns a cursor
//! (current tick, current frame) that the interpreter drives once per
//! simulation tick. Tracks are exclusively owned by one simulated object and
//! never shared, because the startup-delay distributor rewrites frame
//! durations in place.

use super::{error::TrackError, frame::Frame};

/// Result of seeking the track cursor to a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameEvent {
	/// The frame under the cursor after the seek.
	pub frame: Frame,
	/// True when the tick lies past the end of the (possibly bounded)
	/// animation; the cursor stays on the final frame.
	pub animation_end: bool,
}

/// Ordered sequence of frames plus a cursor.
///
/// # Examples
///
/// ```
/// use brawler_types::anim::{Frame, Track};
///
/// let mut track = Track::from_frames(vec![Frame::new(0, 2), Frame::new(1, 3)]);
/// assert_eq!(track.frame_count(), 2);
/// assert_eq!(track.total_ticks(), 5);
///
/// let event = track.advance(2).unwrap();
/// assert_eq!(event.frame.index, 1);
/// assert!(!event.animation_end);
///
/// let event = track.advance(5).unwrap();
/// assert!(event.animation_end);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
	frames: Vec<Frame>,
	cursor_tick: u32,
	cursor_frame: usize,
}

impl Track {
	/// Creates an empty track.
	pub fn new() -> Self {
		Self {
			frames: Vec::new(),
			cursor_tick: 0,
			cursor_frame: 0,
		}
	}

	/// Creates a track from frames, re-indexing them in order.
	pub fn from_frames(frames: Vec<Frame>) -> Self {
		let mut track = Self::new();
		for frame in frames {
			track.push(frame);
		}
		track
	}

	/// Appends a frame, assigning its index.
	pub fn push(&mut self, mut frame: Frame) {
		frame.index = self.frames.len();
		self.frames.push(frame);
	}

	/// Returns the number of frames.
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Returns true when the track has no frames.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Sum of all frame durations in ticks.
	pub fn total_ticks(&self) -> u32 {
		self.frames.iter().map(|f| f.duration).sum()
	}

	/// Random-access frame lookup.
	pub fn peek(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Returns the frame under the cursor.
	pub fn current_frame(&self) -> Option<&Frame> {
		self.frames.get(self.cursor_frame)
	}

	/// Returns the cursor's frame index.
	pub fn current_frame_index(&self) -> usize {
		self.cursor_frame
	}

	/// Returns the cursor's tick.
	pub fn current_tick(&self) -> u32 {
		self.cursor_tick
	}

	/// Seeks the cursor to the frame covering 0-based `tick`.
	///
	/// Returns `None` on an empty track. When `tick` lies past the end of
	/// the animation the cursor stays on the final frame and the event is
	/// flagged `animation_end`.
	pub fn advance(&mut self, tick: u32) -> Option<FrameEvent> {
		let last = self.frames.len().checked_sub(1)?;
		self.seek(tick, last)
	}

	/// Like [`advance`], but treats the animation as ending after
	/// `end_frame`.
	///
	/// [`advance`]: Self::advance
	pub fn advance_bounded(&mut self, tick: u32, end_frame: usize) -> Option<FrameEvent> {
		let last = self.frames.len().checked_sub(1)?;
		self.seek(tick, end_frame.min(last))
	}

	fn seek(&mut self, tick: u32, last: usize) -> Option<FrameEvent> {
		let mut start = 0u32;
		for frame in &self.frames[..=last] {
			let end = start + frame.duration;
			if tick < end {
				self.cursor_tick = tick;
				self.cursor_frame = frame.index;
				return Some(FrameEvent {
					frame: *frame,
					animation_end: false,
				});
			}
			start = end;
		}

		// Past the end; hold the final frame and report the boundary.
		self.cursor_tick = tick;
		self.cursor_frame = last;
		Some(FrameEvent {
			frame: self.frames[last],
			animation_end: true,
		})
	}

	/// Seeks the cursor to a tick without reporting an event.
	pub fn goto_tick(&mut self, tick: u32) {
		let _ = self.advance(tick);
	}

	/// Seeks the cursor to the start of a frame and returns its entry tick.
	pub fn goto_frame(&mut self, index: usize) -> Result<u32, TrackError> {
		if index >= self.frames.len() {
			return Err(TrackError::FrameOutOfRange {
				index,
				count: self.frames.len(),
			});
		}
		let tick = self.frames[..index].iter().map(|f| f.duration).sum();
		self.cursor_tick = tick;
		self.cursor_frame = index;
		Ok(tick)
	}

	/// Rewrites one frame's duration.
	///
	/// Reserved for the startup-delay distributor; must run before the
	/// track's cursor is in use.
	pub fn set_frame_duration(&mut self, index: usize, duration: u32) -> Result<(), TrackError> {
		match self.frames.get_mut(index) {
			Some(frame) => {
				frame.duration = duration;
				Ok(())
			}
			None => Err(TrackError::FrameOutOfRange {
				index,
				count: self.frames.len(),
			}),
		}
	}

	/// Rewinds the cursor to frame 0, tick 0.
	pub fn reset(&mut self) {
		self.cursor_tick = 0;
		self.cursor_frame = 0;
	}
}

impl Default for Track {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Display for Track {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Track({} frames, {} ticks)",
			self.frames.len(),
			self.total_ticks()
		)
	}
}
