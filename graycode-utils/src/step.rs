// Per-step status reported alongside each animation frame

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened on a step: the walk started, or a single bit flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// First code of the sequence, nothing flipped yet
    Start,
    /// One bit differs from the previous code
    Flip,
}

impl StepKind {
    /// ANSI color code for the status line
    pub fn color_code(&self) -> &'static str {
        match self {
            StepKind::Start => "\x1b[34m", // Blue
            StepKind::Flip => "\x1b[31m",  // Red, same hue as the flipped cell
        }
    }
}

/// Status of one step of the walk: index, code, and the flipped bit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepStatus {
    pub index: usize,
    pub code: String,
    /// Column (from the left) that flipped, None on the starting code
    pub flipped: Option<usize>,
}

impl StepStatus {
    pub fn new(index: usize, code: String, flipped: Option<usize>) -> Self {
        Self {
            index,
            code,
            flipped,
        }
    }

    pub fn kind(&self) -> StepKind {
        match self.flipped {
            Some(_) => StepKind::Flip,
            None => StepKind::Start,
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flipped {
            Some(bit) => write!(
                f,
                "Step {}: {} (bit {} flipped)",
                self.index, self.code, bit
            ),
            None => write!(f, "Step {}: {} (starting code)", self.index, self.code),
        }
    }
}
