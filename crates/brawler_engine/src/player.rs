//! The animation/combat tag interpreter.
//!
//! This is the actual combat-rules engine: every character action (attacks,
//! movement, projectiles, victory poses) is an animation track whose frames
//! carry behavioral tags, and this module walks that track one tick at a
//! time and turns the tags into gameplay effects. Determinism is a hard
//! requirement for network-synchronized matches; nothing in here reads the
//! clock or the platform, and all randomness flows through the object's
//! seeded stream.
//!
//! The tick entry point is [`Object::run_tick`]; the scene calls it exactly
//! once per simulation tick per active object, in a stable per-object
//! order. All tag effects fire on the tick a new frame is entered, in a
//! fixed precedence order: later tags may override state derived by earlier
//! ones, and existing animation content was authored against that order.

use brawler_types::{
	anim::{Frame, TagKind, Tags, Track, TrackError},
	geom::{Vec2f, Vec2i, dist},
};
use log::debug;

use crate::{
	audio::{
		AudioSink, MusicTrack, PANNING_DEFAULT, PITCH_DEFAULT, PITCH_MAX, PITCH_MIN, VOLUME_DEFAULT,
	},
	hooks::SceneHooks,
	object::{Direction, Object, SPRITE_INDEX_LIMIT},
	settings::AudioSettings,
	sprite::{BlendMode, Flip},
};

/// Playfield width in world units; bounds randomized spawn coordinates.
pub const ARENA_WIDTH: i32 = 320;
/// Horizontal arena center; target of the upward-landing correction.
pub const ARENA_CENTER_X: f32 = 160.0;
/// X offset of the `at` snap, mirrored by facing direction.
const SNAP_BEHIND_OFFSET: i32 = 15;
/// Delay-distribution boundary when no spawn or hit frame exists.
const DELAY_BOUNDARY_DEFAULT: usize = 99;

const MISSING_TRACK: &str = "object advanced without a loaded animation track";

/// Per-object interpreter state.
///
/// Owns the tick counter and the finish/repeat/reset bookkeeping; the
/// track cursor is kept consistent with `ticks` after every jump.
#[derive(Debug, Clone)]
pub struct Player {
	ticks: i32,
	previous_frame: Option<usize>,
	entered_frame: bool,
	finished: bool,
	repeat: bool,
	end_frame: Option<usize>,
	reverse: bool,
	ignore_duration_override: bool,
}

impl Player {
	/// Creates interpreter state positioned at tick 1 of frame 0.
	pub fn new() -> Self {
		Self {
			ticks: 1,
			previous_frame: None,
			entered_frame: false,
			finished: false,
			repeat: false,
			end_frame: None,
			reverse: false,
			ignore_duration_override: false,
		}
	}

	/// Current tick counter. Starts at 1 and runs forward, or backward in
	/// reverse mode.
	pub fn ticks(&self) -> i32 {
		self.ticks
	}

	/// True only on the tick a new frame began.
	pub fn entered_frame(&self) -> bool {
		self.entered_frame
	}

	/// True once the animation has ended without repeat or finish handoff.
	pub fn finished(&self) -> bool {
		self.finished
	}

	/// Returns the repeat setting.
	pub fn repeat(&self) -> bool {
		self.repeat
	}

	/// Loops the animation back to frame 0 instead of finishing.
	pub fn set_repeat(&mut self, repeat: bool) {
		self.repeat = repeat;
	}

	/// Returns the early-stop boundary, if any.
	pub fn end_frame(&self) -> Option<usize> {
		self.end_frame
	}

	/// Bounds playback to end after the given frame; `None` plays the full
	/// track.
	pub fn set_end_frame(&mut self, end_frame: Option<usize>) {
		self.end_frame = end_frame;
	}

	/// True when the tick counter runs backward.
	pub fn reverse(&self) -> bool {
		self.reverse
	}

	/// Runs the tick counter backward.
	pub fn set_reverse(&mut self, reverse: bool) {
		self.reverse = reverse;
	}

	/// Makes this object ignore `d` duration-override tags.
	pub fn set_ignore_duration_override(&mut self, ignore: bool) {
		self.ignore_duration_override = ignore;
	}

	/// Rewinds to tick 1 with no previous frame, clearing `finished`.
	pub(crate) fn rewind(&mut self) {
		self.ticks = 1;
		self.finished = false;
		self.previous_frame = None;
	}

	/// Full reset on animation (re)load.
	pub(crate) fn reload(&mut self) {
		self.rewind();
		self.entered_frame = false;
		self.reverse = false;
	}
}

impl Default for Player {
	fn default() -> Self {
		Self::new()
	}
}

/// Finds the first frame at or after `from` carrying `kind`.
///
/// Returns the summed duration of the frames skipped over and the index of
/// the match; `None` when no later frame carries the tag.
pub fn next_frame_with_tag(track: &Track, from: usize, kind: TagKind) -> Option<(u32, usize)> {
	let mut gap = 0u32;
	for index in from..track.frame_count() {
		let frame = track.peek(index)?;
		if frame.tags.is_set(kind) {
			return Some((gap, index));
		}
		gap += frame.duration;
	}
	None
}

/// Finds the first frame at or after `from` showing `sprite`.
pub fn next_frame_with_sprite(track: &Track, from: usize, sprite: u8) -> Option<(u32, usize)> {
	let mut gap = 0u32;
	for index in from..track.frame_count() {
		let frame = track.peek(index)?;
		if frame.sprite == sprite {
			return Some((gap, index));
		}
		gap += frame.duration;
	}
	None
}

/// Resolves the `x+`/`x-`/`y+`/`y-` direction tags into a displacement,
/// mirroring the X component by facing direction.
fn directional_offsets(tags: &Tags, direction: Direction) -> (i32, i32) {
	let y = if let Some(v) = tags.value_of(TagKind::YMinus) {
		-v
	} else if let Some(v) = tags.value_of(TagKind::YPlus) {
		v
	} else {
		0
	};
	let x = if let Some(v) = tags.value_of(TagKind::XMinus) {
		-v * direction.factor()
	} else if let Some(v) = tags.value_of(TagKind::XPlus) {
		v * direction.factor()
	} else {
		0
	};
	(x, y)
}

impl Object {
	fn track_mut(&mut self) -> &mut Track {
		&mut self.animation.as_mut().expect(MISSING_TRACK).track
	}

	/// Advances the interpreter by one simulation tick.
	///
	/// Call exactly once per tick per active object; `enemy` is the linked
	/// opponent for relative effects (`ua`, `bm`, `e`, `at`) and may be
	/// `None` for unlinked objects such as scene props. The `bm` tag drives
	/// the enemy's interpreter one frame forward within the same tick; that
	/// call never recurses further.
	///
	/// # Panics
	///
	/// Panics when no animation is loaded; advancing an unloaded object is
	/// a contract violation, not a recoverable error.
	pub fn run_tick(
		&mut self,
		mut enemy: Option<&mut Object>,
		hooks: &mut dyn SceneHooks,
		audio: &mut dyn AudioSink,
		settings: &AudioSettings,
	) {
		if self.player.finished {
			return;
		}
		self.player.entered_frame = false;

		// Pending slides run before tag decoding, independently of it.
		if self.slide_state.timer > 0 {
			self.position += self.slide_state.velocity;
			self.slide_state.timer -= 1;
		}
		if self.enemy_slide_state.timer > 0 {
			self.enemy_slide_state.duration += 1;
			if let Some(enemy) = enemy.as_deref() {
				self.position = enemy.position + Vec2f::from(self.enemy_slide_state.offset);
			}
			self.enemy_slide_state.timer -= 1;
		}

		let animation = self.animation.as_mut().expect(MISSING_TRACK);
		let event = match u32::try_from(self.player.ticks - 1) {
			Ok(query) => match self.player.end_frame {
				Some(end) => animation.track.advance_bounded(query, end),
				None => animation.track.advance(query),
			},
			Err(_) => None,
		};

		if let Some(event) = event {
			let mut frame = event.frame;

			if event.animation_end {
				if self.player.repeat {
					self.reset();
					let track = self.track_mut();
					match track.advance(0) {
						Some(restarted) => frame = restarted.frame,
						None => return,
					}
				} else if hooks.finish(self.id) {
					self.hide_sprite();
					return;
				} else {
					self.hide_sprite();
					self.player.finished = true;
					return;
				}
			}

			if self.player.previous_frame != Some(frame.index) {
				self.sprite_state.clear();
				self.player.entered_frame = true;
				self.dispatch_frame(&frame, enemy.as_deref_mut(), hooks, audio, settings);
			}
			self.player.previous_frame = Some(frame.index);
		}

		if self.player.reverse {
			self.player.ticks -= 1;
		} else {
			self.player.ticks += 1;
		}

		// Hit window countdown gates can_hit tick by tick.
		if self.hit_frames > 0 {
			self.can_hit = true;
			self.hit_frames -= 1;
		} else {
			self.can_hit = false;
		}

		self.sprite_state.timer += 1;
	}

	/// Dispatches every tag effect of a freshly entered frame, in the fixed
	/// precedence order existing content was authored against.
	fn dispatch_frame(
		&mut self,
		frame: &Frame,
		mut enemy: Option<&mut Object>,
		hooks: &mut dyn SceneHooks,
		audio: &mut dyn AudioSink,
		settings: &AudioSettings,
	) {
		let tags = frame.tags;

		// Tick management
		if let Some(d) = tags.value_of(TagKind::DurationOverride) {
			if !self.player.ignore_duration_override {
				self.player.ticks = d + 1;
				let tick = self.player.ticks.max(0) as u32;
				self.track_mut().goto_tick(tick);
			}
		}

		// Gravity toggles
		self.sprite_state.disable_gravity = tags.is_set(TagKind::Hover);
		if tags.is_set(TagKind::EnemyHover) {
			if let Some(enemy) = enemy.as_deref_mut() {
				enemy.sprite_state.disable_gravity = true;
			}
		}

		// Projectile management
		if let Some(kind) = tags.value_of(TagKind::Spawn) {
			let direction = self.direction().factor();

			let x = if let Some(mrx) = tags.value_of(TagKind::SpawnRandomX) {
				let bound = tags.value_of(TagKind::SpawnSpan).unwrap_or(mrx);
				let x = self.random_below(ARENA_WIDTH - 2 * bound) + mrx;
				debug!("randomized spawn x as {x}");
				x
			} else if let Some(mx) = tags.value_of(TagKind::SpawnX) {
				self.start.x as i32 + mx * direction
			} else {
				0
			};

			let y = if let Some(mry) = tags.value_of(TagKind::SpawnRandomY) {
				let bound = tags.value_of(TagKind::SpawnSpan).unwrap_or(mry);
				let y = self.random_below(ARENA_WIDTH - 2 * bound) + mry;
				debug!("randomized spawn y as {y}");
				y
			} else if let Some(my) = tags.value_of(TagKind::SpawnY) {
				self.start.y as i32 + my
			} else {
				0
			};

			let group = tags.value_of(TagKind::SpawnGroup).unwrap_or(0);
			hooks.spawn(self.id, kind, Vec2i::new(x, y), group);
		}
		if let Some(group) = tags.value_of(TagKind::Despawn) {
			hooks.destroy(self.id, group);
		}

		// Music playback. A zero selector stops the music and ends the
		// dispatch; the remaining tags of this frame are skipped.
		if let Some(selector) = tags.value_of(TagKind::MusicSelect) {
			if selector == 0 {
				audio.stop_music();
				return;
			}
			if let Some(track) = MusicTrack::from_selector(selector) {
				audio.play_music(track, settings.music_scalar());
			}
		}
		if tags.is_set(TagKind::MusicOff) {
			audio.stop_music();
		}

		// Sound playback
		if let Some(index) = tags.value_of(TagKind::Sound) {
			let mut pitch = PITCH_DEFAULT;
			let mut volume = VOLUME_DEFAULT * settings.sound_scalar();
			let mut panning = PANNING_DEFAULT;
			if let Some(sf) = tags.value_of(TagKind::SoundPitch) {
				let p = sf.clamp(-16, 239);
				pitch = (p as f32 / 239.0 * 3.0 + 1.0).clamp(PITCH_MIN, PITCH_MAX);
			}
			if let Some(l) = tags.value_of(TagKind::SoundVolume) {
				volume = l.clamp(0, 100) as f32 / 100.0 * settings.sound_scalar();
			}
			if let Some(sb) = tags.value_of(TagKind::SoundPan) {
				panning = sb.clamp(-100, 100) as f32 / 100.0;
			}
			if let Some(id) = self.translate_sound(index) {
				audio.play_sound(id, volume, panning, pitch);
			}
		}

		// Render-method bitfield. The masks are kept bit-for-bit as the
		// original engine computed them; content depends on the result.
		{
			let st = &mut self.sprite_state;
			if tags.is_set(TagKind::B1) {
				st.method_flags &= 0x2000;
			}
			if tags.is_set(TagKind::B2) {
				st.method_flags &= 0x4000;
			}
			if let Some(v) = tags.value_of(TagKind::Bb) {
				st.method_flags &= 0x0010;
				st.blend_finish = v as u8;
				st.screen_shake_vertical = v;
			}
			if tags.is_set(TagKind::Be) {
				st.method_flags &= 0x0800;
			}
			if let Some(v) = tags.value_of(TagKind::Bf) {
				st.method_flags &= 0x0001;
				st.blend_finish = v as u8;
			}
			if tags.is_set(TagKind::Bh) {
				st.method_flags &= 0x0040;
			}
			if let Some(v) = tags.value_of(TagKind::Bl) {
				st.method_flags &= 0x0008;
				st.blend_finish = v as u8;
				st.screen_shake_horizontal = v;
			}
			if let Some(v) = tags.value_of(TagKind::Bm) {
				st.method_flags &= 0x0100;
				st.blend_finish = v as u8;
			}
			if let Some(v) = tags.value_of(TagKind::Bj) {
				st.method_flags &= 0x0400;
				st.blend_finish = v as u8;
			}
			if let Some(v) = tags.value_of(TagKind::Bs) {
				st.blend_start = v as u8;
			}
			if tags.is_set(TagKind::Bu) {
				st.method_flags &= 0x8000;
			}
			if tags.is_set(TagKind::Bw) {
				st.method_flags &= 0x0080;
			}
			if tags.is_set(TagKind::Bx) {
				st.method_flags &= 0x0002;
			}

			// Palette tricks
			if let Some(v) = tags.value_of(TagKind::PaletteRef) {
				st.pal_ref_index = v as u8;
			}
			if let Some(v) = tags.value_of(TagKind::PaletteCount) {
				st.pal_entry_count = v as u8;
			}
			if let Some(v) = tags.value_of(TagKind::PaletteStart) {
				st.pal_start_index = v as u8;
			}
			if tags.is_set(TagKind::PaletteFighter) {
				// Fixed windows from the original content data.
				if self.first_player {
					st.pal_start_index = 1;
					st.pal_entry_count = 47;
				} else {
					st.pal_start_index = 48;
					st.pal_entry_count = 48;
				}
			}
			if let Some(v) = tags.value_of(TagKind::PaletteRange) {
				st.pal_end = (v * 4) as u8;
				st.pal_begin = (v * 4) as u8;
			}
			if let Some(v) = tags.value_of(TagKind::PaletteBegin) {
				st.pal_begin = (v * 4) as u8;
			}
			if tags.is_set(TagKind::Tint) {
				st.pal_tint = true;
			}

			// Best-guess behavior for two legacy tags that only appear in
			// one old credits reel, gated on a minimum duration.
			if tags.is_set(TagKind::Bc) && frame.duration >= 50 {
				st.blend_start = 0;
			} else if tags.is_set(TagKind::Bd) && frame.duration >= 30 {
				st.blend_finish = 0;
			}
		}

		// Opponent approach: snap to the enemy and push their interpreter
		// one frame forward within this same tick.
		if tags.is_set(TagKind::Bm) {
			if let Some(enemy) = enemy.as_deref_mut() {
				self.position = enemy.position;
				enemy.skip_first_frame();
			}
		}

		// Velocity impulse
		if tags.is_set(TagKind::Velocity) {
			let (x, y) = directional_offsets(&tags, self.direction());
			if x != 0 || y != 0 {
				debug!("velocity impulse ({x}, {y})");
				self.velocity.x += x as f32;
				self.velocity.y += y as f32;
			}
		}

		// Upward-landing correction: slide toward the arena center, timed
		// to the hang time implied by the upward velocity.
		if tags.is_set(TagKind::Bu) && self.velocity.y < 0.0 {
			let hang = self.velocity.y * -2.0;
			self.slide_state.velocity.x = dist(self.position.x, ARENA_CENTER_X) / hang;
			self.slide_state.timer = hang as u32;
		}

		// Vertical scaling
		if let Some(v) = tags.value_of(TagKind::ScaleY) {
			self.y_percent = v as f32 / 100.0;
		}

		// Enemy-relative placement for the remainder of this frame
		if tags.is_set(TagKind::EnemyRelative) {
			let (x, y) = directional_offsets(&tags, self.direction());
			if x != 0 || y != 0 {
				self.enemy_slide_state.timer = frame.duration;
				self.enemy_slide_state.duration = 0;
				self.enemy_slide_state.offset = Vec2i::new(x, y);
			}
		}

		// Plain relative placement, when the direction tags are not claimed
		// by a velocity or enemy-relative tag
		if !tags.is_set(TagKind::Velocity)
			&& !tags.is_set(TagKind::EnemyRelative)
			&& (tags.is_set(TagKind::XPlus)
				|| tags.is_set(TagKind::XMinus)
				|| tags.is_set(TagKind::YPlus)
				|| tags.is_set(TagKind::YMinus))
		{
			let (x, y) = directional_offsets(&tags, self.direction());
			debug!("sliding ({x}, {y}) over {} ticks", frame.duration);
			self.slide_state.timer = frame.duration;
			self.slide_state.velocity = Vec2f::new(x as f32, y as f32);
		}

		// Absolute placement: snap now, then look ahead for the next frame
		// carrying the same tag and slide so we arrive exactly as it begins.
		if tags.is_set(TagKind::XAbsolute) || tags.is_set(TagKind::YAbsolute) {
			self.slide_state.velocity = Vec2f::zero();
		}
		if let Some(x) = tags.value_of(TagKind::XAbsolute) {
			let direction = self.direction().factor();
			self.position.x = self.start.x + (x * direction) as f32;
			let track = &self.animation.as_ref().expect(MISSING_TRACK).track;
			if let Some((gap, index)) = next_frame_with_tag(track, frame.index + 1, TagKind::XAbsolute)
			{
				let next = track.peek(index).map_or(0, |f| f.tags.get(TagKind::XAbsolute));
				let target = self.start.x + (next * direction) as f32;
				if target != self.position.x {
					let total = frame.duration + gap;
					self.slide_state.velocity.x = dist(self.position.x, target) / total as f32;
					self.slide_state.timer = total;
				}
			}
		}
		if let Some(y) = tags.value_of(TagKind::YAbsolute) {
			self.position.y = self.start.y + y as f32;
			let track = &self.animation.as_ref().expect(MISSING_TRACK).track;
			if let Some((gap, index)) = next_frame_with_tag(track, frame.index + 1, TagKind::YAbsolute)
			{
				let next = track.peek(index).map_or(0, |f| f.tags.get(TagKind::YAbsolute));
				let target = self.start.y + next as f32;
				if target != self.position.y {
					let total = frame.duration + gap;
					self.slide_state.velocity.y = dist(self.position.y, target) / total as f32;
					self.slide_state.timer = total;
				}
			}
		}

		// Circular motion holds for this frame only
		self.orbit = tags.is_set(TagKind::Orbit);

		// Hit window
		if let Some(q) = tags.value_of(TagKind::HitWindow) {
			self.hit_frames = q;
		}

		// Positional snap behind the enemy
		if tags.is_set(TagKind::SnapBehind) {
			if let Some(enemy) = enemy.as_deref() {
				self.position.x =
					enemy.position.x + (SNAP_BEHIND_OFFSET * self.direction().factor()) as f32;
			}
		}

		// Direction reverse
		if tags.is_set(TagKind::ReverseDirection) {
			self.set_direction(self.direction().flipped());
		}

		// Sprite selection
		if frame.sprite < SPRITE_INDEX_LIMIT {
			self.select_sprite(frame.sprite);
			self.sprite_state.duration = frame.duration;
			self.sprite_state.blend_mode = if tags.is_set(TagKind::AdditiveBlend) {
				BlendMode::Additive
			} else {
				BlendMode::Alpha
			};
			if tags.is_set(TagKind::FlipHorizontal) {
				self.sprite_state.flip ^= Flip::HORIZONTAL;
			}
			if tags.is_set(TagKind::FlipVertical) {
				self.sprite_state.flip ^= Flip::VERTICAL;
			}
		} else {
			self.hide_sprite();
		}
	}

	/// Rewinds the animation to frame 0, tick 1.
	pub fn reset(&mut self) {
		self.player.rewind();
		if let Some(animation) = self.animation.as_mut() {
			animation.track.reset();
		}
	}

	/// Jumps the interpreter and the track cursor to an arbitrary tick.
	pub fn jump_to_tick(&mut self, tick: i32) {
		self.track_mut().goto_tick(tick.max(0) as u32);
		self.player.ticks = tick;
	}

	/// Positions the interpreter at the entry tick of a frame.
	///
	/// # Errors
	///
	/// Returns an error when the frame index is out of range.
	pub fn goto_frame(&mut self, index: usize) -> Result<(), TrackError> {
		let tick = self.track_mut().goto_frame(index)?;
		self.player.ticks = tick as i32 + 1;
		Ok(())
	}

	/// Skips past the first frame by moving the tick counter to its end.
	///
	/// Used by the opponent-approach tag to drive the linked enemy forward;
	/// it repositions the counter without dispatching any tags, so the
	/// same-tick call cannot recurse.
	pub fn skip_first_frame(&mut self) {
		if let Some(animation) = self.animation.as_mut() {
			if let Some(event) = animation.track.advance(0) {
				self.player.ticks = event.frame.duration as i32 + 1;
			}
		}
	}

	/// Total length of the loaded animation in ticks.
	pub fn total_animation_ticks(&self) -> u32 {
		self.animation.as_ref().map_or(0, |a| a.track.total_ticks())
	}

	/// Index of the frame under the track cursor.
	pub fn current_frame_index(&self) -> Option<usize> {
		self.animation.as_ref().map(|a| a.track.current_frame_index())
	}

	/// Sprite letter of the frame under the track cursor.
	pub fn current_sprite_letter(&self) -> Option<char> {
		self.animation
			.as_ref()
			.and_then(|a| a.track.current_frame())
			.map(Frame::sprite_letter)
	}

	/// True when the current frame carries the given tag.
	pub fn frame_tag_set(&self, kind: TagKind) -> bool {
		self.animation
			.as_ref()
			.and_then(|a| a.track.current_frame())
			.is_some_and(|f| f.tags.is_set(kind))
	}

	/// Payload of the given tag on the current frame, if present.
	pub fn frame_tag_value(&self, kind: TagKind) -> Option<i32> {
		self.animation
			.as_ref()
			.and_then(|a| a.track.current_frame())
			.and_then(|f| f.tags.value_of(kind))
	}

	/// Stretches the animation's startup frames to insert `delay` extra
	/// ticks before its committal point.
	///
	/// The committal point is the first frame that spawns a projectile or
	/// shows a hit-coordinate sprite, whichever comes first; every frame
	/// before it gains `delay / n` ticks, and the first `delay % n` frames
	/// one more. The spawn/hit frame thereby begins exactly `delay` ticks
	/// later while the startup stays proportionally padded. Must run before
	/// the animation is played (it rewrites stored durations, not the live
	/// cursor).
	///
	/// # Errors
	///
	/// Returns an error when a duration rewrite fails; the track is not
	/// modified past the failing frame.
	///
	/// # Panics
	///
	/// Panics when no animation is loaded.
	pub fn set_delay(&mut self, delay: u32) -> Result<(), TrackError> {
		let animation = self.animation.as_mut().expect(MISSING_TRACK);

		let mut boundary = DELAY_BOUNDARY_DEFAULT;
		if let Some((_, index)) = next_frame_with_tag(&animation.track, 0, TagKind::Spawn) {
			boundary = index;
		}
		for &sprite in &animation.hit_coord_sprites {
			if let Some((_, index)) = next_frame_with_sprite(&animation.track, 0, sprite) {
				boundary = boundary.min(index);
			}
		}
		let boundary = boundary.min(animation.track.frame_count());
		if boundary == 0 {
			return Ok(());
		}

		debug!("animation has {boundary} startup frames");

		let per_frame = delay / boundary as u32;
		let mut rem = delay % boundary as u32;
		for index in 0..boundary {
			let old = animation.track.peek(index).map_or(0, |f| f.duration);
			let mut duration = old + per_frame;
			if rem > 0 {
				duration += 1;
				rem -= 1;
			}
			animation.track.set_frame_duration(index, duration)?;
			debug!("changed duration of frame {index} from {old} to {duration}");
		}
		Ok(())
	}
}
