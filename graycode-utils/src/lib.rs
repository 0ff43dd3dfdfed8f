pub mod config;
pub mod errors;
pub mod gray;
pub mod step;

pub use config::{Config, ConfigOverrides};
pub use errors::{ConfigError, GrayCodeError, GrayCodeResult};
pub use gray::{
    bit_label, changed_bit_index, gray_code, hamming_distance, BitMatrix, BitWidth,
    GrayCodeSequence, MAX_BITS,
};
pub use step::{StepKind, StepStatus};
