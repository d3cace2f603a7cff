//! Simplified parallax projection.
//!
//! The asymmetric x/y weights (30 for yaw, 18 for pitch) and the depth
//! formula are deliberately not a real 3D rotation; they are cheap, stable
//! and preserved exactly for compatibility with the shipped visuals. No
//! z-sorting anywhere: render order always follows record order.

use crate::constants::{
    DEFAULT_PERCENT, DEPTH_SCALE_BASE, DEPTH_SCALE_SPAN, ORB_BASE_DIAMETER, ORB_MIN_DIAMETER,
    ORB_PERCENT_FACTOR, PARALLAX_X_PER_YAW, PARALLAX_Y_PER_PITCH,
};
use crate::interaction::Rotation;
use crate::layout::Position;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen_x: f32,
    pub screen_y: f32,
    pub visual_scale: f32,
}

/// Map a base position through rotation, zoom and depth to screen space.
pub fn project(
    base: Position,
    rotation: Rotation,
    scale: f32,
    width: f32,
    height: f32,
) -> Projected {
    let cx = width / 2.0;
    let cy = height / 2.0;
    Projected {
        screen_x: cx + (base.x - cx) + rotation.yaw * PARALLAX_X_PER_YAW,
        screen_y: cy + (base.y - cy) + rotation.pitch * PARALLAX_Y_PER_PITCH,
        visual_scale: scale * (DEPTH_SCALE_BASE + DEPTH_SCALE_SPAN * base.depth),
    }
}

/// Orb diameter in px for a proficiency percent (None falls back to the
/// default) at the given visual scale, floored so tiny orbs stay clickable.
pub fn orb_diameter(percent: Option<f32>, visual_scale: f32) -> f32 {
    let percent = percent.unwrap_or(DEFAULT_PERCENT);
    (ORB_BASE_DIAMETER + percent * ORB_PERCENT_FACTOR * visual_scale).max(ORB_MIN_DIAMETER)
}

/// Neighbor pairs for the connecting-line network: each item links to the
/// next one or two in record order, weaving the nebula web.
pub fn link_pairs(count: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for i in 0..count {
        for j in [i + 1, i + 2] {
            if j < count {
                out.push((i, j));
            }
        }
    }
    out
}

/// Line opacity fades with the depth gap between its endpoints.
pub fn link_opacity(depth_a: f32, depth_b: f32) -> f32 {
    0.5 - (depth_a - depth_b).abs() * 0.4
}
