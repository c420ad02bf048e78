//! Benchmark suite for the animation tag interpreter
//!
//! This benchmark measures the per-tick cost of [`Object::run_tick`] on
//! workloads shaped like real gameplay: quiet idle loops, tag-heavy attack
//! strings, and startup-delay distribution.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use std::hint::black_box;

use brawler_benches::{generate_attack_track, generate_idle_track, generate_projectile_track, sizes};
use brawler_engine::{
	audio::NullAudio,
	hooks::NullHooks,
	object::Object,
	settings::AudioSettings,
};
use brawler_types::{anim::Animation, geom::Vec2f};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn repeating_object(animation: Animation) -> Object {
	let mut obj = Object::new(1, Vec2f::new(160.0, 190.0));
	obj.load_animation(animation);
	obj.player.set_repeat(true);
	obj
}

/// Benchmark a full repeat loop over tracks of increasing size
fn bench_tick_loop(c: &mut Criterion) {
	let mut group = c.benchmark_group("tick_loop");

	for frames in [sizes::MOVE, sizes::SEQUENCE, sizes::STRESS] {
		let ticks = 1000u64;
		group.throughput(Throughput::Elements(ticks));
		group.bench_with_input(BenchmarkId::new("attack", frames), &frames, |b, &frames| {
			let animation = Animation::new(generate_attack_track(frames));
			b.iter(|| {
				let mut obj = repeating_object(animation.clone());
				let mut hooks = NullHooks;
				let mut audio = NullAudio;
				let settings = AudioSettings::default();
				for _ in 0..ticks {
					obj.run_tick(None, &mut hooks, &mut audio, &settings);
				}
				black_box(obj.position)
			});
		});
	}

	group.finish();
}

/// Compare the dispatch-heavy path against the advance-only path
fn bench_dispatch_vs_advance(c: &mut Criterion) {
	let mut group = c.benchmark_group("dispatch_vs_advance");
	let ticks = 1000u64;
	group.throughput(Throughput::Elements(ticks));

	group.bench_function("dispatch_every_tick", |b| {
		let animation = Animation::new(generate_attack_track(sizes::SEQUENCE));
		b.iter(|| {
			let mut obj = repeating_object(animation.clone());
			let mut hooks = NullHooks;
			let mut audio = NullAudio;
			let settings = AudioSettings::default();
			for _ in 0..ticks {
				obj.run_tick(None, &mut hooks, &mut audio, &settings);
			}
			black_box(obj.player.ticks())
		});
	});

	group.bench_function("advance_only", |b| {
		let animation = Animation::new(generate_idle_track(8, 125));
		b.iter(|| {
			let mut obj = repeating_object(animation.clone());
			let mut hooks = NullHooks;
			let mut audio = NullAudio;
			let settings = AudioSettings::default();
			for _ in 0..ticks {
				obj.run_tick(None, &mut hooks, &mut audio, &settings);
			}
			black_box(obj.player.ticks())
		});
	});

	group.finish();
}

/// Benchmark startup-delay distribution over the projectile shape
fn bench_set_delay(c: &mut Criterion) {
	let mut group = c.benchmark_group("set_delay");

	for startup in [4usize, 16, 64] {
		group.bench_with_input(
			BenchmarkId::new("distribute", startup),
			&startup,
			|b, &startup| {
				let animation = Animation::new(generate_projectile_track(startup));
				b.iter(|| {
					let mut obj = Object::new(1, Vec2f::zero());
					obj.load_animation(animation.clone());
					obj.set_delay(black_box(30)).unwrap();
					black_box(obj.total_animation_ticks())
				});
			},
		);
	}

	group.finish();
}

criterion_group!(
	benches,
	bench_tick_loop,
	bench_dispatch_vs_advance,
	bench_set_delay
);
criterion_main!(benches);
