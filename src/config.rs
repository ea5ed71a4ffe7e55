use crate::error::HearnetError;
use crate::synth::SynthConfig;

pub const DEFAULT_INTERFACE: &str = "eth0";

pub const USAGE: &str = "\nusage: hearnet [interface]\nDefault interface is eth0.\n";

/// Runtime configuration taken from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub interface: String,
    pub synth: SynthConfig,
}

impl Config {
    /// Parses arguments, excluding the program name. The first positional
    /// argument names the capture interface; later ones are ignored.
    pub fn from_args<I>(args: I) -> Result<Self, HearnetError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let interface = match args.into_iter().next().map(Into::into) {
            Some(arg) if arg.starts_with('-') => {
                return Err(HearnetError::Usage(format!("Unknown option {}", arg)));
            }
            Some(arg) if arg.is_empty() => {
                return Err(HearnetError::Usage("Empty interface name".to_string()));
            }
            Some(arg) => arg,
            None => DEFAULT_INTERFACE.to_string(),
        };
        Ok(Self {
            interface,
            synth: SynthConfig::default(),
        })
    }

    /// Name used for the audio output, e.g. "hearnet eth0".
    pub fn client_name(&self) -> String {
        format!("hearnet {}", self.interface)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interface: DEFAULT_INTERFACE.to_string(),
            synth: SynthConfig::default(),
        }
    }
}
