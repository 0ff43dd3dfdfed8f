// Animation Engine
// Frame-based animation system for the Gray code walk

pub mod engine;
pub mod gray_walk;

pub use engine::{AnimationEngine, AnimationFrame};
pub use gray_walk::GrayCodeAnimation;
