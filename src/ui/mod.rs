//! Console output: rendering contract plus the default terminal renderer.

pub mod render;
pub mod terminal;

pub use render::RenderSink;
pub use terminal::Renderer;
