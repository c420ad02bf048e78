//! Animation frame type.

use super::tag::{TagKind, Tags};

/// Sprite letter of the first frame; sprite indices are letter offsets.
const SPRITE_LETTER_BASE: u8 = b'A';

/// One step of an animation track.
///
/// A frame selects a sprite, holds it for `duration` ticks, and carries the
/// decoded tag set that the interpreter dispatches on the tick the frame is
/// entered. Durations are immutable after load except through
/// [`Track::set_frame_duration`], which the startup-delay distributor uses.
///
/// [`Track::set_frame_duration`]: super::track::Track::set_frame_duration
///
/// # Examples
///
/// ```
/// use brawler_types::anim::{Frame, TagKind};
///
/// let frame = Frame::new(0, 5).with_tag(TagKind::HitWindow, 3);
/// assert_eq!(frame.sprite_letter(), 'A');
/// assert_eq!(frame.tags().get(TagKind::HitWindow), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
	/// Position of the frame within its track; assigned by the track.
	pub index: usize,
	/// Sprite index, 0-based ('A' = 0).
	pub sprite: u8,
	/// Display time in ticks.
	pub duration: u32,
	/// Decoded tag set.
	pub tags: Tags,
}

impl Frame {
	/// Creates a frame with no tags. The index is assigned when the frame
	/// joins a track.
	pub fn new(sprite: u8, duration: u32) -> Self {
		Self {
			index: 0,
			sprite,
			duration,
			tags: Tags::new(),
		}
	}

	/// Builder-style tag attach with payload.
	pub fn with_tag(mut self, kind: TagKind, value: i32) -> Self {
		self.tags.set(kind, value);
		self
	}

	/// Builder-style tag attach without payload.
	pub fn with_marker(mut self, kind: TagKind) -> Self {
		self.tags.mark(kind);
		self
	}

	/// Returns the decoded tag set.
	pub fn tags(&self) -> &Tags {
		&self.tags
	}

	/// Returns the frame's sprite letter ('A' for sprite 0).
	pub fn sprite_letter(&self) -> char {
		(SPRITE_LETTER_BASE + self.sprite) as char
	}
}

impl std::fmt::Display for Frame {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Frame({}{}, {} ticks)",
			self.sprite_letter(),
			self.index,
			self.duration
		)
	}
}
