//! sinepoly - play the demo timeline on the default output device
//!
//! Run with: cargo run --features host

mod demo;

use std::{thread, time::Duration};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

use sinepoly::{
    io::{converter::timeline_from_midi, InterleavedBuffer},
    synth::ControlMessage,
    BlockRenderer, EngineConfig, MAX_BLOCK_SIZE,
};

/// Passes of the figure per part
const REPEATS: usize = 16;

/// How long to let release tails ring after the last event
const TAIL_TIME: Duration = Duration::from_millis(250);

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    env_logger::init();

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0 as f64;
    let channels = config.channels() as usize;

    let timeline = timeline_from_midi(&demo::piano_phase(REPEATS), sample_rate, None);
    let duration = timeline.end_position() as f64 / sample_rate;

    println!("=== sinepoly ===");
    println!("Sample rate: {} Hz", sample_rate);
    println!("Channels: {}", channels);
    println!("Events: {} ({:.1}s)", timeline.len(), duration);
    println!();

    let (mut tx, rx) = RingBuffer::<ControlMessage>::new(16);
    let mut renderer = BlockRenderer::new(EngineConfig::default()).with_control(rx);
    renderer.prepare(sample_rate, timeline)?;

    // The renderer moves into the callback; the main thread only talks to it
    // through the ring buffer from here on
    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let chunk =
                        &mut data[frames_written * channels..(frames_written + frames) * channels];

                    let mut buffer = InterleavedBuffer::new(chunk, channels);
                    renderer.process_block(&mut buffer, frames);

                    frames_written += frames;
                }
            },
            |err| log::error!("audio stream error: {}", err),
            None,
        )
        .wrap_err("failed to build output stream")?;

    stream.play().wrap_err("failed to start output stream")?;
    println!("Playing...");

    thread::sleep(Duration::from_secs_f64(duration));

    if tx
        .push(ControlMessage::AllNotesOff { allow_tail: true })
        .is_err()
    {
        log::warn!("control queue full, skipping all-notes-off");
    }
    thread::sleep(TAIL_TIME);

    println!("Done.");
    Ok(())
}
