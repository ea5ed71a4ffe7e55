use crate::capture::EventSink;
use crate::error::HearnetError;
use pcap::{Active, Capture};

/// Bytes captured per packet; only the header length is used.
const SNAPLEN: i32 = 8192;

/// Live capture on one network interface.
pub struct PacketSource {
    interface: String,
    capture: Capture<Active>,
}

impl PacketSource {
    /// Opens `interface` without promiscuous mode.
    pub fn open(interface: &str) -> Result<Self, HearnetError> {
        let capture = Capture::from_device(interface)
            .and_then(|capture| capture.promisc(false).snaplen(SNAPLEN).timeout(0).open())
            .map_err(HearnetError::CaptureOpen)?;
        log::info!("Capturing on {}", interface);
        Ok(Self {
            interface: interface.to_string(),
            capture,
        })
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Blocks for each packet and hands its length to `sink`. Only returns on
    /// a capture error.
    pub fn run(&mut self, sink: &mut impl EventSink) -> Result<(), HearnetError> {
        loop {
            match self.capture.next_packet() {
                Ok(packet) => sink.on_event(packet.header.len),
                Err(pcap::Error::TimeoutExpired) => continue,
                Err(e) => {
                    log::error!("Capture on {} failed: {}", self.interface, e);
                    return Err(e.into());
                }
            }
        }
    }
}
