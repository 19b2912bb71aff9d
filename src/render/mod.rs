pub mod frame_buffer;
pub mod renderer;

pub use frame_buffer::{Cell, FrameBuffer};
pub use renderer::Renderer;
