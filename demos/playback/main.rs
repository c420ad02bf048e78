//! Animation playback utility.
//!
//! Provides two subcommands:
//! - `run`: play a JSON-scripted animation on a single object and log every
//!   scene and audio event it fires, tick by tick.
//! - `spar`: run a small built-in two-fighter exchange (a grab that pulls the
//!   opponent in, then a projectile) and log both fighters' positions.

use std::{collections::BTreeMap, fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use brawler_rs::prelude::*;
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Deserialize;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Run(opts) => run_script(opts),
		Command::Spar(opts) => run_spar(opts),
	}
}

#[derive(Parser)]
#[command(name = "playback")]
#[command(author = "brawler-rs project")]
#[command(version)]
#[command(about = "Play animation scripts through the tag interpreter", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Play a JSON animation script on one object
	Run(RunArgs),
	/// Run the built-in two-fighter exchange
	Spar(SparArgs),
}

#[derive(Args)]
struct RunArgs {
	/// Path to a JSON animation script
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Stop after this many ticks even if the animation repeats
	#[arg(short, long, value_name = "COUNT", default_value_t = 200)]
	ticks: u32,

	/// Extra startup delay to distribute before the committal frame
	#[arg(short, long, value_name = "TICKS", default_value_t = 0)]
	delay: u32,
}

#[derive(Args)]
struct SparArgs {
	/// Number of simulation ticks to run
	#[arg(short, long, value_name = "COUNT", default_value_t = 40)]
	ticks: u32,
}

/// On-disk animation script.
///
/// Tags are written by their script codes, e.g.
/// `{"sprite": 2, "duration": 3, "tags": {"m": 1, "mx": 24, "q": 2}}`.
#[derive(Deserialize)]
struct Script {
	#[serde(default)]
	repeat: bool,
	#[serde(default)]
	seed: Option<u64>,
	frames: Vec<ScriptFrame>,
}

#[derive(Deserialize)]
struct ScriptFrame {
	sprite: u8,
	duration: u32,
	#[serde(default)]
	tags: BTreeMap<String, i32>,
}

impl Script {
	fn into_animation(self) -> Result<(Animation, bool, Option<u64>)> {
		let mut frames = Vec::with_capacity(self.frames.len());
		for (index, sf) in self.frames.into_iter().enumerate() {
			let mut frame = Frame::new(sf.sprite, sf.duration);
			for (code, value) in &sf.tags {
				let Some(kind) = TagKind::from_code(code) else {
					bail!("frame {index}: unknown tag code {code:?}");
				};
				frame = frame.with_tag(kind, *value);
			}
			frames.push(frame);
		}
		if frames.is_empty() {
			bail!("script has no frames");
		}
		Ok((
			Animation::new(Track::from_frames(frames)),
			self.repeat,
			self.seed,
		))
	}
}

/// Hooks that log every scene event.
#[derive(Default)]
struct LogHooks {
	tick: u32,
}

impl SceneHooks for LogHooks {
	fn spawn(&mut self, owner: ObjectId, kind: i32, position: Vec2i, group: i32) {
		info!(
			"[{:>4}] object {owner} spawns kind {kind} at ({}, {}) group {group}",
			self.tick, position.x, position.y
		);
	}

	fn destroy(&mut self, owner: ObjectId, group: i32) {
		info!("[{:>4}] object {owner} destroys group {group}", self.tick);
	}

	fn finish(&mut self, owner: ObjectId) -> bool {
		info!("[{:>4}] object {owner} finished its animation", self.tick);
		false
	}
}

/// Audio sink that logs every trigger.
#[derive(Default)]
struct LogAudio {
	tick: u32,
	playing: bool,
}

impl AudioSink for LogAudio {
	fn play_sound(&mut self, id: i32, volume: f32, panning: f32, pitch: f32) {
		info!(
			"[{:>4}] sound {id} volume {volume:.2} panning {panning:.2} pitch {pitch:.2}",
			self.tick
		);
	}

	fn play_music(&mut self, track: MusicTrack, volume: f32) {
		info!("[{:>4}] music {track} volume {volume:.2}", self.tick);
		self.playing = true;
	}

	fn stop_music(&mut self) {
		info!("[{:>4}] music stopped", self.tick);
		self.playing = false;
	}

	fn music_is_playing(&self) -> bool {
		self.playing
	}
}

fn run_script(opts: RunArgs) -> Result<()> {
	let text = fs::read_to_string(&opts.file)
		.with_context(|| format!("cannot read script {}", opts.file.display()))?;
	let script: Script = serde_json::from_str(&text)
		.with_context(|| format!("cannot parse script {}", opts.file.display()))?;
	let (animation, repeat, seed) = script.into_animation()?;

	let mut obj = Object::new(1, Vec2f::new(160.0, 190.0));
	if let Some(seed) = seed {
		obj.seed_rng(seed);
	}
	obj.load_animation(animation);
	obj.player.set_repeat(repeat);
	if opts.delay > 0 {
		obj.set_delay(opts.delay)?;
		info!(
			"distributed {} delay ticks; animation is now {} ticks long",
			opts.delay,
			obj.total_animation_ticks()
		);
	}

	let mut hooks = LogHooks::default();
	let mut audio = LogAudio::default();
	let settings = AudioSettings::default();
	for tick in 1..=opts.ticks {
		hooks.tick = tick;
		audio.tick = tick;
		obj.run_tick(None, &mut hooks, &mut audio, &settings);
		if obj.player.entered_frame() {
			info!(
				"[{:>4}] frame {} sprite {:?} at ({:.1}, {:.1})",
				tick,
				obj.current_frame_index().unwrap_or(0),
				obj.current_sprite_letter(),
				obj.position.x,
				obj.position.y
			);
		}
		if obj.player.finished() {
			info!("[{:>4}] done", tick);
			break;
		}
	}
	Ok(())
}

fn run_spar(opts: SparArgs) -> Result<()> {
	let mut attacker = Object::new(1, Vec2f::new(60.0, 190.0));
	attacker.first_player = true;
	attacker.load_animation(Animation::new(Track::from_frames(vec![
		Frame::new(0, 6),
		Frame::new(1, 2).with_marker(TagKind::Bm),
		Frame::new(2, 4)
			.with_tag(TagKind::Spawn, 3)
			.with_tag(TagKind::SpawnX, 20)
			.with_tag(TagKind::HitWindow, 3),
		Frame::new(3, 8),
	])));

	let mut defender = Object::new(2, Vec2f::new(260.0, 190.0));
	defender.set_direction(Direction::Left);
	defender.load_animation(Animation::new(Track::from_frames(vec![
		Frame::new(0, 5),
		Frame::new(1, 5),
	])));
	defender.player.set_repeat(true);

	let mut hooks = LogHooks::default();
	let mut audio = LogAudio::default();
	let settings = AudioSettings::default();
	for tick in 1..=opts.ticks {
		hooks.tick = tick;
		audio.tick = tick;
		attacker.run_tick(Some(&mut defender), &mut hooks, &mut audio, &settings);
		defender.run_tick(Some(&mut attacker), &mut hooks, &mut audio, &settings);
		info!(
			"[{:>4}] attacker ({:.1}, {:.1}) {} | defender ({:.1}, {:.1}) {}",
			tick,
			attacker.position.x,
			attacker.position.y,
			if attacker.can_hit { "HIT" } else { "   " },
			defender.position.x,
			defender.position.y,
			if defender.player.finished() { "down" } else { "up" }
		);
	}
	Ok(())
}
