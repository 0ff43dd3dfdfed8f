// AnimationEngine trait and core frame types
use std::time::Duration;

/// Represents a single frame of animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationFrame {
    /// Zero-based position of this frame in the animation
    pub index: usize,
    /// The rendered content for this frame
    pub content: String,
}

impl AnimationFrame {
    pub fn new(index: usize, content: String) -> Self {
        Self { index, content }
    }
}

/// Frame-based animation interface
pub trait AnimationEngine: Send + Sync {
    /// Generate the next frame of animation
    /// Returns None once a finite animation is complete
    fn next_frame(&mut self) -> Option<AnimationFrame>;

    /// Fixed delay between consecutive frames
    fn frame_duration(&self) -> Duration;

    /// Total number of frames, None for animations that never end
    fn frame_count(&self) -> Option<usize>;

    /// Reset animation to initial state
    fn reset(&mut self);
}
