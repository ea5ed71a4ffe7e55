pub mod config;
pub mod core;
pub mod intake;
pub mod pool;
pub mod trigger;
pub mod voice;

pub use self::config::SynthConfig;
pub use self::core::RenderEngine;
pub use self::intake::EventIntake;
pub use self::pool::{VoiceHandle, VoicePool};
pub use self::trigger::TriggerMapper;
pub use self::voice::{Voice, VoiceParams, VoiceStage};

use parking_lot::Mutex;
use std::sync::Arc;

/// The voice pool as shared between the capture thread and the audio thread.
/// One lock guards both a full render pass and a single voice trigger.
pub type SharedPool = Arc<Mutex<VoicePool>>;

pub fn shared_pool(capacity: usize) -> SharedPool {
    Arc::new(Mutex::new(VoicePool::new(capacity)))
}
