//! Plays each waveform in turn through the default audio output device.
//!
//! Run with `RUST_LOG=debug cargo run --example waveforms` to watch the
//! bank lifecycle logging alongside the tone.

use anyhow::{Result, anyhow};
use cpal::default_host;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::thread::sleep;
use std::time::Duration;
use strum::IntoEnumIterator;

use phasor::{OscillatorBank, ToneParams, Waveform};

const SECONDS_PER_WAVEFORM: u64 = 1;
const DEMO_FREQUENCY: f32 = 261.625;
const DEMO_VOLUME: f32 = 0.4;
const SCRATCH_BUFFER_CAPACITY: usize = 4096;

fn main() -> Result<()> {
    env_logger::init();

    let device = default_host()
        .default_output_device()
        .ok_or_else(|| anyhow!("No audio output device found"))?;
    let default_config = device.default_output_config()?;
    let sample_rate = default_config.sample_rate() as f32;
    let number_of_channels = default_config.channels() as usize;

    log::info!(
        "Playing the waveform tour on {} at {sample_rate} Hz",
        device.name().unwrap_or("Unknown".to_string())
    );

    let tour: Vec<Waveform> = Waveform::iter().collect();
    let demo_length = Duration::from_secs(SECONDS_PER_WAVEFORM * tour.len() as u64);
    let samples_per_step = (sample_rate as u64 * SECONDS_PER_WAVEFORM) as usize;

    let mut bank = OscillatorBank::with_capacity(1);
    let voice = bank.create();

    let mut scratch = vec![0.0_f32; SCRATCH_BUFFER_CAPACITY];
    let mut elapsed_samples = 0_usize;

    let stream = device.build_output_stream(
        &default_config.config(),
        move |buffer: &mut [f32], _: &cpal::OutputCallbackInfo| {
            let number_of_frames = buffer.len() / number_of_channels;
            if scratch.len() < number_of_frames {
                scratch.resize(number_of_frames, 0.0);
            }
            let mono = &mut scratch[..number_of_frames];

            let step = (elapsed_samples / samples_per_step) % tour.len();
            let params = ToneParams {
                frequency: DEMO_FREQUENCY,
                sample_rate,
                volume: DEMO_VOLUME,
                waveform: tour[step],
            };

            if let Err(error) = bank.generate(voice, &params, mono) {
                log::error!("Dropping audio callback: {error}");
                buffer.fill(0.0);
                return;
            }
            elapsed_samples += number_of_frames;

            for (frame, sample) in buffer.chunks_mut(number_of_channels).zip(mono.iter()) {
                frame.fill(*sample);
            }
        },
        |err| {
            log::error!("Error in audio output stream: {err}");
        },
        None,
    )?;

    stream.play()?;
    sleep(demo_length);

    Ok(())
}
