use crate::block::{Block, Color};
use crate::geom::sample_span;
use crate::rng::RandomSource;
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Tunable curve parameters. Any change calls for full line regeneration.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// Sample budget for a whole curve, split across its spans.
    pub segments: u32,
    /// Bounds for the sketch-jitter amplitude, drawn uniformly per sample.
    pub noise_power_min: f32,
    pub noise_power_max: f32,
    pub stroke_width: f32,
    /// Perturbs interior samples for a hand-drawn look; anchors stay exact.
    pub sketch: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            segments: 150,
            noise_power_min: 2.5,
            noise_power_max: 4.0,
            stroke_width: 0.5,
            sketch: false,
        }
    }
}

/// Dots of one category, flattened across all blocks in traversal order
/// (block order, then each block's own dot order). `color` is the color of
/// the most recently seen dot in the group.
#[derive(Debug, Clone, PartialEq)]
pub struct DotGroup {
    pub dot_type: String,
    pub points: Vec<Vec2>,
    pub color: Color,
}

/// One smooth polyline per dot-type group.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub dot_type: String,
    pub points: Vec<Vec2>,
    pub color: Color,
    pub width: f32,
}

/// Single-pass grouping by category. Group emission order is first-seen
/// category order; points keep first-seen order within their group.
pub fn group_dots(blocks: &[Block]) -> Vec<DotGroup> {
    let mut groups: Vec<DotGroup> = Vec::new();
    let mut slots: FxHashMap<String, usize> = FxHashMap::default();

    for block in blocks {
        for dot in block.dots() {
            let point = dot.global_point(block.position);
            match slots.get(dot.dot_type.as_str()) {
                Some(&slot) => {
                    let group = &mut groups[slot];
                    group.points.push(point);
                    group.color = dot.color;
                }
                None => {
                    slots.insert(dot.dot_type.clone(), groups.len());
                    groups.push(DotGroup {
                        dot_type: dot.dot_type.clone(),
                        points: vec![point],
                        color: dot.color,
                    });
                }
            }
        }
    }

    groups
}

/// Builds the full curve set from scratch. Groups with a single point
/// produce no curve (a path with only a move has nothing to stroke).
pub fn generate(blocks: &[Block], style: &LineStyle, rng: &mut dyn RandomSource) -> Vec<Curve> {
    let groups = group_dots(blocks);
    let mut curves = Vec::with_capacity(groups.len());

    for group in groups {
        if group.points.len() < 2 {
            continue;
        }
        curves.push(Curve {
            points: sample_curve(&group.points, style, rng),
            dot_type: group.dot_type,
            color: group.color,
            width: style.stroke_width,
        });
    }

    tracing::debug!(curves = curves.len(), "lines regenerated");
    curves
}

fn sample_curve(anchors: &[Vec2], style: &LineStyle, rng: &mut dyn RandomSource) -> Vec<Vec2> {
    let spans = anchors.len() - 1;
    let steps = (style.segments as usize / spans).max(1) as u32;

    let mut points = Vec::with_capacity(spans * steps as usize + 1);
    points.push(anchors[0]);
    for span in 0..spans {
        let first_sample = points.len();
        sample_span(anchors, span, steps, &mut points);
        if style.sketch {
            // Last sample of the span is the closing anchor; leave it exact.
            let interior = &mut points[first_sample..first_sample + steps as usize - 1];
            for point in interior {
                let amplitude = rng.uniform(style.noise_power_min, style.noise_power_max);
                *point += Vec2::new(
                    rng.uniform(-amplitude, amplitude),
                    rng.uniform(-amplitude, amplitude),
                );
            }
        }
    }

    points
}
