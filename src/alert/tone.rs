//! Synthesized two-tone alert sound.
//!
//! The tone is generated in memory, wrapped in a 16-bit PCM WAV container
//! and handed to Bevy audio. When the audio subsystem is not present the
//! request is dropped without surfacing anything to the user.

use std::f32::consts::TAU;

use bevy::prelude::*;

/// Output sample rate (Hz).
pub const SAMPLE_RATE: u32 = 44_100;

/// Total tone length (seconds).
pub const TONE_DURATION: f32 = 1.5;

/// Frequency schedule: (start time in seconds, frequency in Hz).
pub const FREQUENCY_STEPS: [(f32, f32); 3] = [(0.0, 800.0), (0.5, 600.0), (1.0, 800.0)];

/// Gain at the start of the tone.
pub const START_GAIN: f32 = 0.3;

/// Gain reached at the end of the exponential fade.
pub const END_GAIN: f32 = 0.01;

/// Request to play the alert tone once.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct PlayAlertTone;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ToneError {
    #[error("cannot encode an empty sample buffer")]
    Empty,
    #[error("sample rate must be non-zero")]
    ZeroSampleRate,
    #[error("sample rate {0} Hz overflows the WAV byte rate")]
    SampleRateTooHigh(u32),
    #[error("{samples} samples do not fit in a WAV data chunk")]
    TooLong { samples: usize },
}

/// Frequency active at time `t` (seconds).
pub fn frequency_at(t: f32) -> f32 {
    FREQUENCY_STEPS
        .iter()
        .rev()
        .find(|(start, _)| t >= *start)
        .map_or(FREQUENCY_STEPS[0].1, |(_, freq)| *freq)
}

/// Gain at time `t`: exponential ramp from [`START_GAIN`] to [`END_GAIN`].
pub fn gain_at(t: f32) -> f32 {
    let t = t.clamp(0.0, TONE_DURATION);
    START_GAIN * (END_GAIN / START_GAIN).powf(t / TONE_DURATION)
}

/// Render the tone as mono samples in [-1, 1].
///
/// Phase is accumulated across frequency changes so the switch is click-free.
pub fn synthesize(sample_rate: u32) -> Vec<f32> {
    let count = (TONE_DURATION * sample_rate as f32).round() as usize;
    let dt = 1.0 / sample_rate as f32;
    let mut phase = 0.0_f32;

    (0..count)
        .map(|i| {
            let t = i as f32 * dt;
            let sample = phase.sin() * gain_at(t);
            phase = (phase + TAU * frequency_at(t) * dt) % TAU;
            sample
        })
        .collect()
}

/// Wrap mono samples in a 16-bit PCM WAV container.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, ToneError> {
    if samples.is_empty() {
        return Err(ToneError::Empty);
    }
    if sample_rate == 0 {
        return Err(ToneError::ZeroSampleRate);
    }

    let byte_rate = sample_rate
        .checked_mul(2)
        .ok_or(ToneError::SampleRateTooHigh(sample_rate))?;

    let data_len = samples
        .len()
        .checked_mul(2)
        .and_then(|len| u32::try_from(len).ok())
        .filter(|len| *len <= u32::MAX - 36)
        .ok_or(ToneError::TooLong {
            samples: samples.len(),
        })?;

    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk: PCM, mono, 16-bit
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        out.extend_from_slice(&value.to_le_bytes());
    }

    Ok(out)
}

/// Play the tone for each frame that has at least one request.
///
/// The encoded clip is built on first use and cached.
pub fn play_alert_tone(
    mut commands: Commands,
    mut requests: MessageReader<PlayAlertTone>,
    sources: Option<ResMut<Assets<AudioSource>>>,
    mut clip: Local<Option<Handle<AudioSource>>>,
) {
    if requests.read().count() == 0 {
        return;
    }

    let Some(mut sources) = sources else {
        debug!("Audio output unavailable, skipping alert tone");
        return;
    };

    if clip.is_none() {
        match encode_wav(&synthesize(SAMPLE_RATE), SAMPLE_RATE) {
            Ok(bytes) => {
                *clip = Some(sources.add(AudioSource {
                    bytes: bytes.into(),
                }));
            }
            Err(err) => {
                warn!("Alert tone unavailable: {err}");
                return;
            }
        }
    }

    let Some(handle) = clip.as_ref() else {
        return;
    };

    commands.spawn((AudioPlayer::new(handle.clone()), PlaybackSettings::DESPAWN));
    debug!("Alert tone played");
}
