pub mod animation;
pub mod grid;
pub mod paint;
pub mod player;

pub use animation::{AnimationEngine, AnimationFrame, GrayCodeAnimation};
pub use grid::{render, CellState, GridView};
pub use paint::RenderStyle;
pub use player::{FrameSink, Player, TerminalSink};
