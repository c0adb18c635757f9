use glam::Vec2;

/// Rounds half-up, matching canvas-style `Math.round` semantics
/// (`round(-2.5)` is `-2`, not `-3`).
pub fn round(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Catmull-Rom interpolation between `p1` and `p2` with tangents from the
/// surrounding control points. Exact at `t = 0` (`p1`) and `t = 1` (`p2`).
pub fn catmull_rom(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    (p1 * 2.0
        + (p2 - p0) * t
        + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
        + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * t3)
        * 0.5
}

/// Samples the curve span between `anchors[i]` and `anchors[i + 1]` at
/// `steps` evenly spaced parameters in `(0, 1]`, appending to `out`. The
/// caller seeds `out` with the first anchor; every span ends exactly on its
/// closing anchor. End tangents use clamped neighbors.
pub fn sample_span(anchors: &[Vec2], i: usize, steps: u32, out: &mut Vec<Vec2>) {
    debug_assert!(i + 1 < anchors.len());
    let p0 = anchors[i.saturating_sub(1)];
    let p1 = anchors[i];
    let p2 = anchors[i + 1];
    let p3 = anchors[(i + 2).min(anchors.len() - 1)];

    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        out.push(catmull_rom(p0, p1, p2, p3, t));
    }
}
