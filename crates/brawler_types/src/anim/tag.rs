//! Frame tag model.
//!
//! Animation frames carry short script tags (one to three characters,
//! optionally followed by an integer payload) that encode gameplay effects:
//! movement, projectile spawns, sounds, palette tricks and so on. The
//! interpreter decodes them once per frame into a fixed-size [`Tags`] store
//! instead of doing repeated string-keyed lookups, so per-tick dispatch is a
//! plain indexed read.

/// Every script tag the interpreter understands.
///
/// Variants are named after their effect where the effect is known; the
/// opaque render-method family keeps its script-code name because the bits
/// it toggles were never given official meanings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum TagKind {
	/// `d`: restart this frame's duration from the given tick.
	DurationOverride,
	/// `h`: disable gravity on self for this frame.
	Hover,
	/// `ua`: disable gravity on the linked enemy.
	EnemyHover,
	/// `m`: spawn a projectile of the given kind.
	Spawn,
	/// `mx`: absolute spawn X, relative to start position, facing-mirrored.
	SpawnX,
	/// `my`: absolute spawn Y, relative to start position.
	SpawnY,
	/// `mrx`: randomized spawn X base.
	SpawnRandomX,
	/// `mry`: randomized spawn Y base.
	SpawnRandomY,
	/// `mm`: bound for randomized spawn coordinates.
	SpawnSpan,
	/// `mg`: projectile group id for spawn/despawn pairing.
	SpawnGroup,
	/// `md`: destroy projectiles of the given group.
	Despawn,
	/// `smo`: stop music (payload 0) or select a music track (1..=7).
	MusicSelect,
	/// `smf`: stop music.
	MusicOff,
	/// `s`: play a sound effect (payload is a translation-table index).
	Sound,
	/// `sf`: sound pitch modifier.
	SoundPitch,
	/// `l`: sound volume, 0..=100.
	SoundVolume,
	/// `sb`: sound panning, -100..=100.
	SoundPan,
	/// `b1`: render-method bit.
	B1,
	/// `b2`: render-method bit.
	B2,
	/// `bb`: render-method bit plus blend finish and vertical screen shake.
	Bb,
	/// `be`: render-method bit.
	Be,
	/// `bf`: render-method bit plus blend finish.
	Bf,
	/// `bh`: render-method bit.
	Bh,
	/// `bl`: render-method bit plus blend finish and horizontal screen shake.
	Bl,
	/// `bm`: render-method bit plus blend finish; also snaps to the enemy
	/// and drives the enemy's interpreter one frame forward.
	Bm,
	/// `bj`: render-method bit plus blend finish.
	Bj,
	/// `bs`: blend start intensity.
	Bs,
	/// `bu`: render-method bit; with upward velocity, starts a landing
	/// slide toward the arena center.
	Bu,
	/// `bw`: render-method bit.
	Bw,
	/// `bx`: render-method bit.
	Bx,
	/// `bpd`: palette reference index.
	PaletteRef,
	/// `bpn`: palette entry count.
	PaletteCount,
	/// `bps`: palette start index.
	PaletteStart,
	/// `bpf`: fighter palette window, picked by player slot.
	PaletteFighter,
	/// `bpp`: palette begin and end, scaled by 4.
	PaletteRange,
	/// `bpb`: palette begin, scaled by 4.
	PaletteBegin,
	/// `bz`: enable palette tint.
	Tint,
	/// `bc`: legacy heuristic: clear blend start on long frames.
	Bc,
	/// `bd`: legacy heuristic: clear blend finish on long frames.
	Bd,
	/// `v`: apply direction tags as a velocity impulse.
	Velocity,
	/// `x+`: positive X displacement component.
	XPlus,
	/// `x-`: negative X displacement component.
	XMinus,
	/// `y+`: positive Y displacement component.
	YPlus,
	/// `y-`: negative Y displacement component.
	YMinus,
	/// `y`: vertical scale percentage.
	ScaleY,
	/// `e`: apply direction tags as an enemy-relative placement.
	EnemyRelative,
	/// `x=`: absolute X placement with look-ahead slide.
	XAbsolute,
	/// `y=`: absolute Y placement with look-ahead slide.
	YAbsolute,
	/// `as`: circular motion for the duration of this frame.
	Orbit,
	/// `q`: open the hit window for the given number of ticks.
	HitWindow,
	/// `at`: snap behind the enemy.
	SnapBehind,
	/// `ar`: reverse facing direction.
	ReverseDirection,
	/// `br`: additive blending for this frame's sprite.
	AdditiveBlend,
	/// `r`: flip the sprite horizontally.
	FlipHorizontal,
	/// `f`: flip the sprite vertically.
	FlipVertical,
}

impl TagKind {
	/// Number of distinct tag kinds.
	pub const COUNT: usize = 55;

	/// All tag kinds, in dispatch-precedence order.
	pub const ALL: [TagKind; Self::COUNT] = [
		Self::DurationOverride,
		Self::Hover,
		Self::EnemyHover,
		Self::Spawn,
		Self::SpawnX,
		Self::SpawnY,
		Self::SpawnRandomX,
		Self::SpawnRandomY,
		Self::SpawnSpan,
		Self::SpawnGroup,
		Self::Despawn,
		Self::MusicSelect,
		Self::MusicOff,
		Self::Sound,
		Self::SoundPitch,
		Self::SoundVolume,
		Self::SoundPan,
		Self::B1,
		Self::B2,
		Self::Bb,
		Self::Be,
		Self::Bf,
		Self::Bh,
		Self::Bl,
		Self::Bm,
		Self::Bj,
		Self::Bs,
		Self::Bu,
		Self::Bw,
		Self::Bx,
		Self::PaletteRef,
		Self::PaletteCount,
		Self::PaletteStart,
		Self::PaletteFighter,
		Self::PaletteRange,
		Self::PaletteBegin,
		Self::Tint,
		Self::Bc,
		Self::Bd,
		Self::Velocity,
		Self::XPlus,
		Self::XMinus,
		Self::YPlus,
		Self::YMinus,
		Self::ScaleY,
		Self::EnemyRelative,
		Self::XAbsolute,
		Self::YAbsolute,
		Self::Orbit,
		Self::HitWindow,
		Self::SnapBehind,
		Self::ReverseDirection,
		Self::AdditiveBlend,
		Self::FlipHorizontal,
		Self::FlipVertical,
	];

	/// Returns the script code for this tag.
	pub fn code(self) -> &'static str {
		match self {
			Self::DurationOverride => "d",
			Self::Hover => "h",
			Self::EnemyHover => "ua",
			Self::Spawn => "m",
			Self::SpawnX => "mx",
			Self::SpawnY => "my",
			Self::SpawnRandomX => "mrx",
			Self::SpawnRandomY => "mry",
			Self::SpawnSpan => "mm",
			Self::SpawnGroup => "mg",
			Self::Despawn => "md",
			Self::MusicSelect => "smo",
			Self::MusicOff => "smf",
			Self::Sound => "s",
			Self::SoundPitch => "sf",
			Self::SoundVolume => "l",
			Self::SoundPan => "sb",
			Self::B1 => "b1",
			Self::B2 => "b2",
			Self::Bb => "bb",
			Self::Be => "be",
			Self::Bf => "bf",
			Self::Bh => "bh",
			Self::Bl => "bl",
			Self::Bm => "bm",
			Self::Bj => "bj",
			Self::Bs => "bs",
			Self::Bu => "bu",
			Self::Bw => "bw",
			Self::Bx => "bx",
			Self::PaletteRef => "bpd",
			Self::PaletteCount => "bpn",
			Self::PaletteStart => "bps",
			Self::PaletteFighter => "bpf",
			Self::PaletteRange => "bpp",
			Self::PaletteBegin => "bpb",
			Self::Tint => "bz",
			Self::Bc => "bc",
			Self::Bd => "bd",
			Self::Velocity => "v",
			Self::XPlus => "x+",
			Self::XMinus => "x-",
			Self::YPlus => "y+",
			Self::YMinus => "y-",
			Self::ScaleY => "y",
			Self::EnemyRelative => "e",
			Self::XAbsolute => "x=",
			Self::YAbsolute => "y=",
			Self::Orbit => "as",
			Self::HitWindow => "q",
			Self::SnapBehind => "at",
			Self::ReverseDirection => "ar",
			Self::AdditiveBlend => "br",
			Self::FlipHorizontal => "r",
			Self::FlipVertical => "f",
		}
	}

	/// Looks a tag kind up by its script code.
	pub fn from_code(code: &str) -> Option<Self> {
		Self::ALL.iter().copied().find(|kind| kind.code() == code)
	}
}

impl std::fmt::Display for TagKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.code())
	}
}

/// Presence flag plus optional integer payload for a single tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagValue {
	/// True when the tag appears on the frame.
	pub set: bool,
	/// Payload; zero when the tag carries no value.
	pub value: i32,
}

/// Decoded tag set of one frame.
///
/// A fixed-size store indexed by [`TagKind`]; presence queries and payload
/// reads are O(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tags {
	values: [TagValue; TagKind::COUNT],
}

impl Tags {
	/// Creates an empty tag set.
	pub fn new() -> Self {
		Self {
			values: [TagValue::default(); TagKind::COUNT],
		}
	}

	/// Marks a tag present with a payload.
	pub fn set(&mut self, kind: TagKind, value: i32) {
		self.values[kind as usize] = TagValue {
			set: true,
			value,
		};
	}

	/// Marks a tag present without a payload.
	pub fn mark(&mut self, kind: TagKind) {
		self.set(kind, 0);
	}

	/// Returns true when the tag appears on the frame.
	pub fn is_set(&self, kind: TagKind) -> bool {
		self.values[kind as usize].set
	}

	/// Returns the tag payload, or zero when absent.
	pub fn get(&self, kind: TagKind) -> i32 {
		self.values[kind as usize].value
	}

	/// Returns the payload when the tag is present.
	pub fn value_of(&self, kind: TagKind) -> Option<i32> {
		let v = self.values[kind as usize];
		v.set.then_some(v.value)
	}

	/// Iterates over the tags present on the frame.
	pub fn iter_set(&self) -> impl Iterator<Item = (TagKind, i32)> + '_ {
		TagKind::ALL
			.iter()
			.copied()
			.filter(|kind| self.is_set(*kind))
			.map(|kind| (kind, self.get(kind)))
	}
}

impl Default for Tags {
	fn default() -> Self {
		Self::new()
	}
}
