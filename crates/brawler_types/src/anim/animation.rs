//! Loaded animation payload.

use super::track::Track;

/// A track plus the metadata the engine needs alongside it.
///
/// `hit_coord_sprites` lists the sprite indices that carry hit coordinates;
/// the startup-delay distributor uses them to find the first committal frame
/// of an attack.
#[derive(Debug, Clone, Default)]
pub struct Animation {
	/// The frame sequence.
	pub track: Track,
	/// Sprite indices registered as carrying hit coordinates.
	pub hit_coord_sprites: Vec<u8>,
}

impl Animation {
	/// Wraps a track with no hit-coordinate sprites.
	pub fn new(track: Track) -> Self {
		Self {
			track,
			hit_coord_sprites: Vec::new(),
		}
	}

	/// Wraps a track with its hit-coordinate sprite indices.
	pub fn with_hit_coord_sprites(track: Track, hit_coord_sprites: Vec<u8>) -> Self {
		Self {
			track,
			hit_coord_sprites,
		}
	}
}
