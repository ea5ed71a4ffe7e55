use super::config::SynthConfig;
use super::voice::VoiceParams;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::time::{SystemTime, UNIX_EPOCH};

/// Bytes of packet length per pitch step.
const BYTES_PER_STEP: f32 = 256.0;
/// Semitones per pitch step (a minor third).
const SEMITONES_PER_STEP: f32 = 3.0;
/// Longest packet that still raises the pitch; keeps the frequency finite.
const MAX_PITCHED_LEN: u32 = u16::MAX as u32;

/// Turns a packet length into voice parameters.
///
/// Longer packets sound higher, one minor third per 256 bytes, multiplied by a
/// random harmonic (1..=5) and nudged by a few radians of detune.
pub struct TriggerMapper {
    rng: SmallRng,
    config: SynthConfig,
}

impl TriggerMapper {
    /// Seeds the generator once from the wall clock.
    pub fn from_clock(config: SynthConfig) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        log::debug!("Trigger mapper seeded with {}", seed);
        Self::with_seed(config, seed)
    }

    pub fn with_seed(config: SynthConfig, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            config,
        }
    }

    /// Pitch multiplier for a packet of `len` bytes, before random jitter.
    /// Lengths above 65535 bytes map like 65535.
    pub fn interval_factor(len: u32) -> f32 {
        let len = len.min(MAX_PITCHED_LEN);
        2f32.powf(len as f32 / BYTES_PER_STEP * SEMITONES_PER_STEP / 12.0)
    }

    pub fn map(&mut self, len: u32) -> VoiceParams {
        let harmonic = self.rng.random_range(1..=5u32) as f32;
        let factor = Self::interval_factor(len) * harmonic;
        let detune = self.rng.random_range(0..5u32) as f32;
        let frequency = self.config.base_frequency * TAU * factor + detune * factor;

        let decay_ms = self.rng.random_range(self.config.decay_ms.clone());
        let attack_ms = self.rng.random_range(self.config.attack_ms.clone());

        VoiceParams {
            frequency,
            peak_amplitude: self.config.peak_amplitude(),
            attack_duration: attack_ms as f32 / 1000.0,
            decay_duration: decay_ms as f32 / 1000.0,
        }
    }
}
