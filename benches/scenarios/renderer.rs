//! Benchmarks for complete renderer blocks.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sinepoly::{
    io::{AudioOutput, InterleavedBuffer},
    sequencing::{EventTimeline, NoteEvent},
    BlockRenderer, EngineConfig,
};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f64 = 48_000.0;

/// Four-note chord retriggered every 64 samples: every block dispatches
/// events and every voice is busy.
fn dense_timeline(length: u64) -> EventTimeline {
    let chord = [60, 64, 67, 71];
    (0..length)
        .step_by(64)
        .flat_map(|t| {
            chord.iter().flat_map(move |&pitch| {
                [NoteEvent::note_on(t, pitch, 0.8), NoteEvent::note_off(t + 48, pitch)]
            })
        })
        .collect()
}

pub fn bench_renderer(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/renderer");

    for &size in BLOCK_SIZES {
        // === HELD CHORD ===
        // Four voices sustaining, no events after the first block
        let mut held = BlockRenderer::new(EngineConfig::default());
        held.prepare(
            SAMPLE_RATE,
            [60, 64, 67, 71]
                .into_iter()
                .map(|pitch| NoteEvent::note_on(0, pitch, 0.8))
                .collect(),
        )
        .unwrap();
        let mut output = AudioOutput::new(2, size);

        group.bench_with_input(BenchmarkId::new("held_chord", size), &size, |b, &size| {
            b.iter(|| {
                held.process_block(black_box(&mut output), size);
            })
        });

        // === DENSE EVENTS ===
        // Restart when the timeline runs out so every iteration does work
        let length = 48_000 * 10;
        let mut dense = BlockRenderer::new(EngineConfig::default());
        dense.prepare(SAMPLE_RATE, dense_timeline(length)).unwrap();

        group.bench_with_input(BenchmarkId::new("dense_events", size), &size, |b, &size| {
            b.iter(|| {
                if dense.clock().position() >= length {
                    dense.restart();
                }
                dense.process_block(black_box(&mut output), size);
            })
        });

        // === INTERLEAVED HOST BUFFER ===
        let mut interleaved = vec![0.0f32; size * 2];
        group.bench_with_input(BenchmarkId::new("interleaved", size), &size, |b, &size| {
            b.iter(|| {
                let mut buffer = InterleavedBuffer::new(&mut interleaved, 2);
                held.process_block(black_box(&mut buffer), size);
            })
        });
    }

    group.finish();
}
