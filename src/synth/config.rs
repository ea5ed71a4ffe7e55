use std::ops::RangeInclusive;

/// Voice budget and trigger mapping parameters.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    pub max_voices: usize,
    pub base_frequency: f32, // Hz, before the packet-size interval is applied
    pub attack_ms: RangeInclusive<u32>,
    pub decay_ms: RangeInclusive<u32>,
    pub retire_threshold: f32, // Envelope gain below which a voice is retired
}

impl SynthConfig {
    /// Amplitude of a single voice; all voices sounding together stay at 0.5.
    pub fn peak_amplitude(&self) -> f32 {
        0.5 / self.max_voices.max(1) as f32
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            max_voices: 16,
            base_frequency: 55.0,
            attack_ms: 1..=20,
            decay_ms: 100..=199,
            retire_threshold: 0.001,
        }
    }
}
