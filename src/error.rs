use thiserror::Error;

/// Setup failures. Any of these ends the process with a non-zero status.
#[derive(Debug, Error)]
pub enum HearnetError {
    #[error("{0}")]
    Usage(String),
    #[error("No output device available")]
    NoOutputDevice,
    #[error("Audio stream was already started")]
    StreamAlreadyStarted,
    #[cfg(feature = "native")]
    #[error("Unsupported sample format: {0:?}")]
    UnsupportedSampleFormat(cpal::SampleFormat),
    #[cfg(feature = "native")]
    #[error("Cannot query output config: {0}")]
    DefaultStreamConfig(#[from] cpal::DefaultStreamConfigError),
    #[cfg(feature = "native")]
    #[error("Cannot build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[cfg(feature = "native")]
    #[error("Cannot start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),
    #[cfg(feature = "native")]
    #[error("Cannot pause output stream: {0}")]
    PauseStream(#[from] cpal::PauseStreamError),
    #[cfg(feature = "native")]
    #[error("Cannot open capture device: {0}")]
    CaptureOpen(#[source] pcap::Error),
    #[cfg(feature = "native")]
    #[error("Packet capture: {0}")]
    Capture(#[from] pcap::Error),
}

impl HearnetError {
    /// Whether the usage text should accompany this error.
    pub fn wants_usage(&self) -> bool {
        match self {
            HearnetError::Usage(_) => true,
            #[cfg(feature = "native")]
            HearnetError::CaptureOpen(_) => true,
            _ => false,
        }
    }
}
