#[cfg(feature = "native")]
mod pcap_source;
#[cfg(feature = "native")]
pub use self::pcap_source::PacketSource;

/// Receives one call per observed packet.
pub trait EventSink {
    /// `len` is the packet's length on the wire, in bytes.
    fn on_event(&mut self, len: u32);
}
