#[cfg(feature = "native")]
mod cpal_backend;
#[cfg(feature = "native")]
pub use self::cpal_backend::CpalBackend;

use crate::error::HearnetError;

pub trait AudioBackend {
    fn start(&mut self) -> Result<(), HearnetError>;
    fn stop(&mut self) -> Result<(), HearnetError>;
}

/// Consumer side of the audio stream, driven by the backend.
pub trait AudioRenderer: Send + 'static {
    /// Called once before the first buffer, and again if the rate changes.
    fn set_sample_rate(&mut self, sample_rate: u32);
    /// Fills one mono buffer. Must not block beyond the buffer deadline.
    fn render(&mut self, output: &mut [f32]);
}
