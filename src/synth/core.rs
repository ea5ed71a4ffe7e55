use super::config::SynthConfig;
use super::SharedPool;
use crate::audio::AudioRenderer;

/// Per-buffer render pass over the shared voice pool.
///
/// Runs on the audio thread. Holds the pool lock for the whole pass and
/// never allocates.
pub struct RenderEngine {
    pool: SharedPool,
    sample_rate: u32,
    retire_threshold: f32,
}

impl RenderEngine {
    pub fn new(pool: SharedPool, config: &SynthConfig) -> Self {
        Self {
            pool,
            sample_rate: 0,
            retire_threshold: config.retire_threshold,
        }
    }

    /// Fills `output` with the mix of every active voice, retiring the ones
    /// that have decayed. Outputs silence until a sample rate is known.
    pub fn process(&mut self, output: &mut [f32]) {
        output.fill(0.0);
        if self.sample_rate == 0 {
            return;
        }

        let sample_rate = self.sample_rate as f32;
        let retire_threshold = self.retire_threshold;
        let mut pool = self.pool.lock();
        pool.for_each_active(|_, voice| {
            voice.render(output, sample_rate, retire_threshold);
            !voice.is_silent(retire_threshold)
        });
    }
}

impl AudioRenderer for RenderEngine {
    fn set_sample_rate(&mut self, sample_rate: u32) {
        self.sample_rate = sample_rate;
    }

    fn render(&mut self, output: &mut [f32]) {
        self.process(output);
    }
}
