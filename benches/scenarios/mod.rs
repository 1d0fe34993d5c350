//! Real-world scenario benchmarks.
//!
//! These run the block renderer the way a host callback does, with a
//! populated timeline and a full voice pool.

mod renderer;

pub use renderer::bench_renderer;
