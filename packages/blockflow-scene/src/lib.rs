pub mod renderer;
pub mod scene;

pub use renderer::{FrameSnapshot, RecordingRenderer, Renderer};
pub use scene::{DisplayItem, Layer, Scene};
