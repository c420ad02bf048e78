//! User-facing audio settings.

use serde::{Deserialize, Serialize};

/// Highest value of the volume sliders.
pub const VOLUME_SCALE_MAX: u8 = 10;

/// Music and sound volume sliders on a 0..=10 scale.
///
/// Tag-triggered sounds scale their volume by `sound_volume / 10`; music
/// selected by the `smo` tag plays at `music_volume / 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSettings {
	/// Music volume slider, 0..=10
	pub music_volume: u8,
	/// Sound effect volume slider, 0..=10
	pub sound_volume: u8,
}

impl AudioSettings {
	/// Music volume as a 0.0..=1.0 scalar.
	pub fn music_scalar(&self) -> f32 {
		f32::from(self.music_volume.min(VOLUME_SCALE_MAX)) / f32::from(VOLUME_SCALE_MAX)
	}

	/// Sound volume as a 0.0..=1.0 scalar.
	pub fn sound_scalar(&self) -> f32 {
		f32::from(self.sound_volume.min(VOLUME_SCALE_MAX)) / f32::from(VOLUME_SCALE_MAX)
	}
}

impl Default for AudioSettings {
	fn default() -> Self {
		Self {
			music_volume: VOLUME_SCALE_MAX,
			sound_volume: VOLUME_SCALE_MAX,
		}
	}
}
