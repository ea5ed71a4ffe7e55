pub mod audio;
pub mod capture;
pub mod config;
pub mod error;
pub mod runtime;
pub mod synth;

pub use config::Config;
pub use error::HearnetError;
