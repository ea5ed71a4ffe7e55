use crate::audio::{AudioBackend, CpalBackend};
use crate::capture::PacketSource;
use crate::config::Config;
use crate::error::HearnetError;
use crate::synth::{shared_pool, EventIntake, RenderEngine};

/// Starts audio output, then plays packets from the configured interface
/// until capture fails. Audio keeps the pool lock only per buffer; the
/// capture loop keeps it only per packet.
pub fn start(config: Config) -> Result<(), HearnetError> {
    let pool = shared_pool(config.synth.max_voices);

    let renderer = RenderEngine::new(pool.clone(), &config.synth);
    let mut audio_backend = CpalBackend::new(config.client_name(), renderer);
    audio_backend.start()?;

    let mut source = PacketSource::open(&config.interface)?;
    let mut intake = EventIntake::new(pool, config.synth.clone());

    let result = source.run(&mut intake);
    log::info!(
        "Stopped capturing on {}, {} packets dropped for lack of voices",
        source.interface(),
        intake.dropped()
    );
    shutdown(&mut audio_backend, result)
}

/// Pauses audio. A pause failure is only logged so the error that ended
/// capture is the one reported.
fn shutdown(
    audio_backend: &mut impl AudioBackend,
    result: Result<(), HearnetError>,
) -> Result<(), HearnetError> {
    if let Err(e) = audio_backend.stop() {
        log::warn!("{}", e);
    }
    result
}
