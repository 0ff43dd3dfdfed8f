// Fixed-interval frame driver
//
// Frames are presented on a deadline schedule (start + k * interval), so slow
// writes do not accumulate drift. There is no input handling and no looping:
// playback ends when the engine runs out of frames.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::animation::{AnimationEngine, AnimationFrame};

const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[H";

/// Destination for rendered frames
pub trait FrameSink {
    /// Called once before the first frame
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    fn present(&mut self, frame: &AnimationFrame) -> Result<()>;

    /// Called once after the last frame, also when presenting failed
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes frames to a terminal or any other writer.
///
/// Interactive sinks redraw in place; non-interactive ones append frames
/// separated by a blank line so the output stays readable in a pipe.
/// Cursor visibility is left alone, an interrupted run leaves the terminal
/// as it found it.
pub struct TerminalSink<W: Write> {
    out: W,
    interactive: bool,
    presented: usize,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, interactive: bool) -> Self {
        Self {
            out,
            interactive,
            presented: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn present(&mut self, frame: &AnimationFrame) -> Result<()> {
        if self.interactive {
            write!(self.out, "{}", CLEAR_AND_HOME)
                .with_context(|| format!("failed to clear screen for frame {}", frame.index))?;
        } else if self.presented > 0 {
            writeln!(self.out).context("failed to separate frames")?;
        }
        writeln!(self.out, "{}", frame.content)
            .with_context(|| format!("failed to write frame {}", frame.index))?;
        self.out.flush().context("failed to flush output")?;
        self.presented += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush().context("failed to flush output")
    }
}

/// Drives an animation engine into a sink at the engine's frame rate
pub struct Player<S: FrameSink> {
    sink: S,
}

impl<S: FrameSink> Player<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Play every remaining frame once. Returns the number of frames shown.
    pub fn play(&mut self, engine: &mut dyn AnimationEngine) -> Result<usize> {
        let interval = engine.frame_duration();
        log::info!(
            "Playing {} frames every {:?}",
            engine
                .frame_count()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unbounded".to_string()),
            interval
        );

        self.sink.begin()?;
        let result = self.present_all(engine, interval);
        let finished = self.sink.finish();
        let presented = result?;
        finished?;

        log::info!("Animation complete after {} frames", presented);
        Ok(presented)
    }

    fn present_all(&mut self, engine: &mut dyn AnimationEngine, interval: Duration) -> Result<usize> {
        let mut deadline = Instant::now();
        let mut presented = 0;

        while let Some(frame) = engine.next_frame() {
            let now = Instant::now();
            if deadline > now {
                thread::sleep(deadline - now);
            }
            self.sink.present(&frame)?;
            log::debug!("Presented frame {}", frame.index);
            presented += 1;
            deadline += interval;
        }

        Ok(presented)
    }
}
