//! LED colors, the pixel buffer and the autonomous animation

pub mod animator;
pub mod buffer;
pub mod color;

pub use animator::Animator;
pub use buffer::PixelBuffer;
pub use color::Color;
