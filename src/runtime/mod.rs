#[cfg(feature = "native")]
pub mod native;
#[cfg(feature = "native")]
pub use native::start;
