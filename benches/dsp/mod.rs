//! Benchmarks for low-level voice rendering.

mod voice;

pub use voice::bench_voice;
