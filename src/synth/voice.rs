/// Everything needed to start a voice, as produced by the trigger mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceParams {
    pub frequency: f32,       // Angular frequency, radians per second
    pub peak_amplitude: f32,  // Gain at the end of the attack ramp
    pub attack_duration: f32, // Seconds
    pub decay_duration: f32,  // Seconds, decay time constant
}

/// Envelope stage of a voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceStage {
    Idle,
    Attacking,
    Decaying,
}

/// A single enveloped sine oscillator occupying one pool slot.
///
/// Fields other than `active` carry no meaning while the voice is inactive.
#[derive(Debug, Clone, Default)]
pub struct Voice {
    pub active: bool,
    pub phase: f32,
    pub frequency: f32,
    pub envelope_gain: f32,
    pub attack_level: f32, // 0.0..=1.0, fraction of the attack ramp completed
    pub attack_duration: f32,
    pub decay_duration: f32,
    pub peak_amplitude: f32,
}

impl Voice {
    /// Creates a new, inactive voice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `params` into the voice and marks it active.
    /// `active` is written last so a half-initialised voice is never rendered.
    pub fn activate(&mut self, params: &VoiceParams) {
        self.phase = 0.0;
        self.frequency = params.frequency;
        self.peak_amplitude = params.peak_amplitude;
        self.envelope_gain = params.peak_amplitude;
        self.attack_level = 0.0;
        self.attack_duration = params.attack_duration;
        self.decay_duration = params.decay_duration;
        self.active = true;
    }

    pub fn stage(&self) -> VoiceStage {
        if !self.active {
            VoiceStage::Idle
        } else if self.attack_level < 1.0 {
            VoiceStage::Attacking
        } else {
            VoiceStage::Decaying
        }
    }

    /// Current audible amplitude.
    pub fn amplitude(&self) -> f32 {
        self.envelope_gain * self.attack_level
    }

    /// Whether the voice has decayed enough to be retired.
    pub fn is_silent(&self, retire_threshold: f32) -> bool {
        self.envelope_gain < retire_threshold
    }

    /// Mixes this voice into `output`, hard clipping after every addition.
    ///
    /// Stops at the sample where the envelope gain falls below `retire_threshold`.
    /// Returns the number of samples rendered.
    pub fn render(&mut self, output: &mut [f32], sample_rate: f32, retire_threshold: f32) -> usize {
        if !self.active || sample_rate <= 0.0 || self.is_silent(retire_threshold) {
            return 0;
        }

        let attack_step = 1.0 / (sample_rate * self.attack_duration);
        let decay_factor = 1.0 - 1.0 / (sample_rate * self.decay_duration);
        let phase_step = self.frequency / sample_rate;

        for (i, out) in output.iter_mut().enumerate() {
            let sample = self.phase.sin() * self.envelope_gain * self.attack_level;
            if sample.is_finite() {
                *out = (*out + sample).clamp(-1.0, 1.0);
            }

            if self.attack_level < 1.0 {
                self.attack_level = (self.attack_level + attack_step).min(1.0);
            } else {
                self.envelope_gain *= decay_factor;
            }
            self.phase += phase_step;

            if self.is_silent(retire_threshold) {
                return i + 1;
            }
        }
        output.len()
    }
}
