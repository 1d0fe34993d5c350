use sinepoly::{
    io::AudioOutput,
    sequencing::{EventTimeline, NoteEvent},
    BlockRenderer, DispatchPolicy, EngineConfig,
};

const SAMPLE_RATE: f64 = 44_100.0;
const BLOCK: usize = 512;

/// Render `blocks` blocks and return channel 0 flattened, plus the number of
/// sounding voices after each block.
fn render_session(renderer: &mut BlockRenderer, blocks: usize) -> (Vec<f32>, Vec<usize>) {
    let mut output = AudioOutput::new(2, BLOCK);
    let mut samples = Vec::with_capacity(blocks * BLOCK);
    let mut active = Vec::with_capacity(blocks);

    for _ in 0..blocks {
        renderer.process_block(&mut output, BLOCK);
        assert_eq!(output.channel(0), output.channel(1));
        samples.extend_from_slice(output.channel(0));
        active.push(renderer.pool().active_voice_count());
    }

    (samples, active)
}

fn two_note_timeline() -> EventTimeline {
    EventTimeline::new(vec![
        NoteEvent::note_on(44_100, 60, 1.0),
        NoteEvent::note_off(132_300, 60),
        NoteEvent::note_on(44_100, 72, 1.0),
        NoteEvent::note_off(66_100, 72),
    ])
}

fn block_of(sample: usize) -> usize {
    sample / BLOCK
}

#[test]
fn two_voice_schedule_with_tail_off() {
    let mut renderer = BlockRenderer::new(EngineConfig::default());
    renderer.prepare(SAMPLE_RATE, two_note_timeline()).unwrap();

    let (samples, active) = render_session(&mut renderer, 300);

    // Nothing before the first note-on; both notes start on sin(0)
    assert!(samples[..=44_100].iter().all(|&s| s == 0.0));
    assert!(samples[44_101] != 0.0);
    assert_eq!(active[block_of(44_100)], 2);

    // Pitch 72 fades for 528 samples after 66100, then only pitch 60 remains
    assert_eq!(active[block_of(66_100) - 1], 2);
    assert_eq!(active[block_of(66_100 + 527)], 1);

    // Pitch 60 fades out the same way after 132300
    assert!(samples[132_300 + 1..132_300 + 528].iter().any(|&s| s != 0.0));
    assert!(samples[132_300 + 528..].iter().all(|&s| s == 0.0));
    assert_eq!(active[block_of(132_300 + 527)], 0);

    assert_eq!(renderer.clock().position(), 300 * BLOCK as u64);
}

#[test]
fn two_voice_schedule_with_hard_stop() {
    let config = EngineConfig::default().with_tail_off(false);
    let mut renderer = BlockRenderer::new(config);
    renderer.prepare(SAMPLE_RATE, two_note_timeline()).unwrap();

    let (samples, active) = render_session(&mut renderer, 300);

    assert!(samples[..=44_100].iter().all(|&s| s == 0.0));
    assert!(samples[66_099] != 0.0);
    assert!(samples[132_299] != 0.0);
    assert!(samples[132_300..].iter().all(|&s| s == 0.0));
    assert_eq!(active[block_of(66_100)], 1);
    assert_eq!(active[block_of(132_300)], 0);
}

#[test]
fn release_tail_is_528_samples() {
    let timeline = EventTimeline::new(vec![
        NoteEvent::note_on(44_100, 72, 1.0),
        NoteEvent::note_off(66_100, 72),
    ]);
    let mut renderer = BlockRenderer::new(EngineConfig::default());
    renderer.prepare(SAMPLE_RATE, timeline).unwrap();

    let (samples, _) = render_session(&mut renderer, 140);

    let last_sound = samples.iter().rposition(|&s| s != 0.0).unwrap();
    assert_eq!(last_sound, 66_100 + 527);

    // The tail envelope only ever shrinks the sine's peak
    let peak = |range: std::ops::Range<usize>| {
        samples[range].iter().fold(0.0f32, |acc, &s| acc.max(s.abs()))
    };
    assert!(peak(66_100..66_300) > peak(66_300..66_500));
    assert!(peak(66_300..66_500) > peak(66_500..66_628));
}

#[test]
fn single_event_policy_drops_simultaneous_note() {
    // Both note-ons share a block; only the first one looked up is played
    let config = EngineConfig::default().with_dispatch(DispatchPolicy::SingleEventPerBlock);
    let mut renderer = BlockRenderer::new(config);
    renderer.prepare(SAMPLE_RATE, two_note_timeline()).unwrap();

    let (_, active) = render_session(&mut renderer, 100);
    assert_eq!(active[block_of(44_100)], 1);
    assert_eq!(active[block_of(44_100) + 1], 1);
    assert_eq!(renderer.pool().voices()[0].pitch(), Some(60));
}

#[test]
fn stolen_voice_starts_clean() {
    let config = EngineConfig::default().with_polyphony(1).with_tail_off(false);
    let timeline = EventTimeline::new(vec![
        NoteEvent::note_on(0, 60, 1.0),
        NoteEvent::note_on(1_000, 72, 1.0),
        NoteEvent::note_off(1_000, 60),
    ]);
    let mut renderer = BlockRenderer::new(config);
    renderer.prepare(SAMPLE_RATE, timeline).unwrap();

    let (samples, active) = render_session(&mut renderer, 4);

    // 72 stole the only voice, so the note-off for 60 finds nothing and 72
    // keeps sounding, starting from phase zero
    assert_eq!(samples[1_000], 0.0);
    assert!(samples[1_001] > 0.0);
    assert!(samples[1_500..2_048].iter().any(|&s| s != 0.0));
    assert_eq!(active[3], 1);
    assert_eq!(renderer.pool().voices()[0].pitch(), Some(72));
}

#[test]
fn restart_replays_identically() {
    let mut renderer = BlockRenderer::new(EngineConfig::default());
    renderer.prepare(SAMPLE_RATE, two_note_timeline()).unwrap();
    let (first, _) = render_session(&mut renderer, 100);

    renderer.restart();
    let (second, _) = render_session(&mut renderer, 100);

    assert_eq!(first, second);
}
