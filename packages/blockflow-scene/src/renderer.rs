use crate::scene::{DisplayItem, Scene};

/// The drawing backend seam. Implementations rasterize the display list
/// however they like (GPU surface, 2D canvas, SVG export); the orchestrator
/// only resizes the surface and submits frames.
pub trait Renderer {
    fn resize(&mut self, width: f32, height: f32);
    fn render(&mut self, scene: &Scene);
}

/// Per-frame item counts captured by the recording backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub rects: usize,
    pub texts: usize,
    pub polylines: usize,
}

/// Headless backend that records resizes and frame shapes. Stands in for a
/// real surface in tests, the way a mock scheduler stands in for the real
/// one in the runtime tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub size: (f32, f32),
    pub resizes: Vec<(f32, f32)>,
    pub frames: Vec<FrameSnapshot>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&FrameSnapshot> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn resize(&mut self, width: f32, height: f32) {
        tracing::trace!(width, height, "recording renderer resized");
        self.size = (width, height);
        self.resizes.push((width, height));
    }

    fn render(&mut self, scene: &Scene) {
        let mut snapshot = FrameSnapshot::default();
        for layer in scene.layers() {
            for item in &layer.items {
                match item {
                    DisplayItem::Rect { .. } => snapshot.rects += 1,
                    DisplayItem::Text { .. } => snapshot.texts += 1,
                    DisplayItem::Polyline { .. } => snapshot.polylines += 1,
                }
            }
        }
        self.frames.push(snapshot);
    }
}
