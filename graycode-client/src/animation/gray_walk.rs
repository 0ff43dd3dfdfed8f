// Gray code walk: one frame per code, highlighting the bit that flipped
// Finite and forward only; next_frame() returns None after the last code.

use std::time::Duration;

use graycode_utils::GrayCodeSequence;

use super::engine::{AnimationEngine, AnimationFrame};
use crate::grid;
use crate::paint::RenderStyle;

pub struct GrayCodeAnimation {
    sequence: GrayCodeSequence,
    style: RenderStyle,
    /// Index of the next frame to produce
    cursor: usize,
    interval: Duration,
}

impl GrayCodeAnimation {
    pub fn new(sequence: GrayCodeSequence, interval: Duration) -> Self {
        Self {
            sequence,
            style: RenderStyle::Plain,
            cursor: 0,
            interval,
        }
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }
}

impl AnimationEngine for GrayCodeAnimation {
    fn next_frame(&mut self) -> Option<AnimationFrame> {
        if self.cursor >= self.sequence.code_count() {
            return None;
        }
        let index = self.cursor;
        let view = grid::render(index, &self.sequence);
        let content = self.style.paint(&view);
        log::trace!("Rendered frame {}: {}", index, view.status);

        self.cursor += 1;

        Some(AnimationFrame::new(index, content))
    }

    fn frame_duration(&self) -> Duration {
        self.interval
    }

    fn frame_count(&self) -> Option<usize> {
        Some(self.sequence.code_count())
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}
