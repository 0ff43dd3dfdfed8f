// Runtime configuration: defaults, KDL config file, command line overrides
//
// Precedence is command line > config file > defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use kdl::{KdlDocument, KdlNode, KdlValue};

use crate::errors::{ConfigError, GrayCodeError};
use crate::gray::BitWidth;

/// Bit count used when nothing else is configured
pub const DEFAULT_N_BITS: BitWidth = BitWidth(4);
/// Delay between animation frames
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(800);

/// Resolved settings for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub n_bits: BitWidth,
    pub frame_interval: Duration,
    /// Paint cells with background colors (only honored on a terminal)
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n_bits: DEFAULT_N_BITS,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            color: true,
        }
    }
}

/// Values given on the command line; None leaves the lower layer in place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub n_bits: Option<i64>,
    pub frame_interval: Option<Duration>,
    pub no_color: bool,
}

impl Config {
    /// Load a config file, falling back to defaults for absent nodes
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        log::info!("Loading config from {}", path.display());
        Self::from_kdl(&text)
    }

    /// Parse config from KDL text
    pub fn from_kdl(text: &str) -> Result<Self, ConfigError> {
        let document: KdlDocument = text.parse()?;
        let mut config = Config::default();

        for node in document.nodes() {
            match node.name().value() {
                "n_bits" => {
                    let arg = first_argument(node);
                    if let Some(bits) = arg.and_then(KdlValue::as_f64) {
                        return Err(GrayCodeError::InvalidArgument(format!(
                            "n_bits must be an integer, got {}",
                            bits
                        ))
                        .into());
                    }
                    let value = arg
                        .and_then(KdlValue::as_i64)
                        .ok_or_else(|| invalid_value(node, "an integer"))?;
                    config.n_bits = BitWidth::try_from(value)?;
                }
                "frame_interval" => {
                    let value = first_argument(node)
                        .and_then(KdlValue::as_string)
                        .ok_or_else(|| invalid_value(node, "a duration string"))?;
                    config.frame_interval = humantime::parse_duration(value).map_err(|source| {
                        ConfigError::InvalidDuration {
                            value: value.to_string(),
                            source,
                        }
                    })?;
                }
                "color" => {
                    config.color = first_argument(node)
                        .and_then(KdlValue::as_bool)
                        .ok_or_else(|| invalid_value(node, "true or false"))?;
                }
                other => return Err(ConfigError::UnknownNode(other.to_string())),
            }
        }

        Ok(config)
    }

    /// Layer command line values over this config
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(n_bits) = overrides.n_bits {
            self.n_bits = BitWidth::try_from(n_bits)?;
        }
        if let Some(interval) = overrides.frame_interval {
            self.frame_interval = interval;
        }
        if overrides.no_color {
            self.color = false;
        }
        Ok(self)
    }
}

fn first_argument(node: &KdlNode) -> Option<&KdlValue> {
    node.entries()
        .iter()
        .find(|entry| entry.name().is_none())
        .map(|entry| entry.value())
}

fn invalid_value(node: &KdlNode, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        node: node.name().value().to_string(),
        expected,
    }
}
