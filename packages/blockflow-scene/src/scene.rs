use glam::Vec2;

/// A drawable primitive. The renderer behind the `Renderer` trait only ever
/// sees these; how they are rasterized is its business.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    Rect {
        min: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    Text {
        pos: Vec2,
        content: String,
        font_size: f32,
        color: [f32; 4],
    },
    Polyline {
        points: Vec<Vec2>,
        color: [f32; 4],
        width: f32,
    },
}

impl DisplayItem {
    /// Axis-aligned bounds, `None` for items with no extent (empty
    /// polylines). Text contributes its anchor point only; glyph metrics
    /// belong to the renderer.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        match self {
            DisplayItem::Rect { min, size, .. } => Some((*min, *min + *size)),
            DisplayItem::Text { pos, .. } => Some((*pos, *pos)),
            DisplayItem::Polyline { points, .. } => {
                let first = *points.first()?;
                let (min, max) = points.iter().fold((first, first), |(lo, hi), p| {
                    (lo.min(*p), hi.max(*p))
                });
                Some((min, max))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layer {
    pub items: Vec<DisplayItem>,
}

impl Layer {
    pub fn push(&mut self, item: DisplayItem) {
        self.items.push(item);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Retained display list in draw order: the block layer below, the line
/// layer above. The line layer is always dropped wholesale and rebuilt;
/// there is no partial reuse of old curves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub blocks: Layer,
    pub lines: Layer,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_lines(&mut self) {
        self.lines.clear();
    }

    pub fn layers(&self) -> [&Layer; 2] {
        [&self.blocks, &self.lines]
    }

    pub fn content_bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut bounds: Option<(Vec2, Vec2)> = None;
        for layer in self.layers() {
            for item in &layer.items {
                let Some((min, max)) = item.bounds() else {
                    continue;
                };
                bounds = Some(match bounds {
                    Some((lo, hi)) => (lo.min(min), hi.max(max)),
                    None => (min, max),
                });
            }
        }
        bounds
    }

    /// Vertical extent of everything drawn, 0 for an empty scene. Feeds the
    /// minimum-height computation after each layout pass.
    pub fn content_height(&self) -> f32 {
        self.content_bounds()
            .map_or(0.0, |(min, max)| max.y - min.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_height_spans_layers() {
        let mut scene = Scene::new();
        scene.blocks.push(DisplayItem::Rect {
            min: Vec2::new(0.0, -10.0),
            size: Vec2::new(50.0, 40.0),
            color: [1.0; 4],
        });
        scene.lines.push(DisplayItem::Polyline {
            points: vec![Vec2::new(10.0, 0.0), Vec2::new(20.0, 120.0)],
            color: [1.0; 4],
            width: 0.5,
        });

        // From rect top at -10 to polyline bottom at 120.
        assert_eq!(scene.content_height(), 130.0);
    }

    #[test]
    fn empty_scene_has_no_height() {
        let scene = Scene::new();
        assert_eq!(scene.content_height(), 0.0);
        assert!(scene.content_bounds().is_none());
    }

    #[test]
    fn clear_lines_drops_only_the_line_layer() {
        let mut scene = Scene::new();
        scene.blocks.push(DisplayItem::Rect {
            min: Vec2::ZERO,
            size: Vec2::new(10.0, 10.0),
            color: [1.0; 4],
        });
        scene.lines.push(DisplayItem::Polyline {
            points: vec![Vec2::ZERO, Vec2::new(5.0, 5.0)],
            color: [1.0; 4],
            width: 0.5,
        });

        scene.clear_lines();
        assert!(scene.lines.is_empty());
        assert!(!scene.blocks.is_empty());
    }

    #[test]
    fn empty_polyline_has_no_bounds() {
        let item = DisplayItem::Polyline {
            points: Vec::new(),
            color: [1.0; 4],
            width: 0.5,
        };
        assert!(item.bounds().is_none());
    }
}
