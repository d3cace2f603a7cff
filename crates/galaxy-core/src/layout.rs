//! Deterministic spiral layout.
//!
//! Pure function of (item count, viewport size); identical inputs always
//! yield bit-identical output, which downstream regression tests rely on.

use crate::constants::{DEPTH_MIN, DEPTH_SPAN, LAYOUT_RADIUS_FACTOR};

/// Base 2D position with synthetic depth in [DEPTH_MIN, 1].
///
/// Depth only scales size/opacity downstream; render order always follows
/// record order, never depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

/// Place `count` items along an expanding spiral inside `width` x `height`.
///
/// Later items sit farther out (spiral factor grows with the index) and the
/// radius oscillates sinusoidally so rings do not collapse into a circle.
/// `count == 0` yields an empty vector.
pub fn compute_positions(count: usize, width: f32, height: f32) -> Vec<Position> {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let base_radius = width.min(height) * LAYOUT_RADIUS_FACTOR;
    let n = count.max(1) as f32;

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let fi = i as f32;
        let angle = (fi / n) * std::f32::consts::TAU;
        let spiral = 0.4 + 0.6 * (fi / n);
        let radius = base_radius * (0.3 + 0.7 * spiral) * (0.8 + 0.4 * (fi * 0.9).sin());
        let x = cx + angle.cos() * radius;
        let y = cy + angle.sin() * radius * (0.75 + 0.2 * (fi * 0.7).cos());
        let depth = DEPTH_MIN + DEPTH_SPAN * (fi * 0.6).sin().abs();
        out.push(Position { x, y, depth });
    }
    out
}
