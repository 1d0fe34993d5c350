//! Benchmarks for a single sine voice.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sinepoly::{io::AudioOutput, synth::Voice};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f64 = 48_000.0;

pub fn bench_voice(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/voice");

    for &size in BLOCK_SIZES {
        let mut output = AudioOutput::new(2, size);

        // Sustaining note (the common case)
        let mut voice = Voice::default();
        voice.start(69, 1.0, SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("sustain", size), &size, |b, &size| {
            b.iter(|| {
                voice.render(black_box(&mut output), 0, size);
            })
        });

        // Release tail; retriggered each iteration so the fade never finishes
        // before the block does
        let mut voice = Voice::default();
        group.bench_with_input(BenchmarkId::new("release", size), &size, |b, &size| {
            b.iter(|| {
                voice.start(69, 1.0, SAMPLE_RATE);
                voice.release(true);
                voice.render(black_box(&mut output), 0, size);
            })
        });

        // Idle voice fast path
        let mut voice = Voice::default();
        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, &size| {
            b.iter(|| {
                voice.render(black_box(&mut output), 0, size);
            })
        });
    }

    group.finish();
}
