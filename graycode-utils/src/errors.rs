// Error types for Gray code generation and configuration loading

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while validating generator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrayCodeError {
    /// A parameter was outside its domain (negative or oversized bit count)
    InvalidArgument(String),
}

impl fmt::Display for GrayCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for GrayCodeError {}

impl Diagnostic for GrayCodeError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Self::InvalidArgument(_) => Some(Box::new("graycode::invalid_argument")),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Self::InvalidArgument(_) => Some(Box::new(format!(
                "n_bits must be between 0 and {}",
                crate::gray::MAX_BITS
            ))),
        }
    }
}

/// Result type for generator operations
pub type GrayCodeResult<T> = Result<T, GrayCodeError>;

/// Errors that can occur while loading a KDL configuration file
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config file {}", path.display())]
    #[diagnostic(code(graycode::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Kdl(#[from] kdl::KdlError),

    #[error("Unknown config node '{0}'")]
    #[diagnostic(
        code(graycode::config::unknown_node),
        help("supported nodes are n_bits, frame_interval and color")
    )]
    UnknownNode(String),

    #[error("Config node '{node}' expects {expected}")]
    #[diagnostic(code(graycode::config::invalid_value))]
    InvalidValue {
        node: String,
        expected: &'static str,
    },

    #[error("Config node 'frame_interval' has an unreadable duration '{value}'")]
    #[diagnostic(
        code(graycode::config::invalid_duration),
        help("use a humantime duration such as \"800ms\" or \"1s\"")
    )]
    InvalidDuration {
        value: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidArgument(#[from] GrayCodeError),
}
