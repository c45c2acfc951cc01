//! Draw ranges and placement constants for the star field (internal).
//!
//! All random draws are `u ∈ [0, 1)` mapped through the affine ranges below.

/// Rotation speed per tick is `u * ROTATION_SPEED_MAX` radians.
pub(crate) const ROTATION_SPEED_MAX: f64 = 0.1;
/// Velocity per axis is `u * VELOCITY_SPAN - VELOCITY_SPAN / 2`.
pub(crate) const VELOCITY_SPAN: f64 = 0.01;
/// Color channel `c = u * (k mod LEVELS)` for a fresh random integer `k`.
pub(crate) const RED_LEVELS: u32 = 255;
pub(crate) const GREEN_LEVELS: u32 = 25;
pub(crate) const BLUE_LEVELS: u32 = 255;
/// Scale is `u * SCALE_SPAN + SCALE_MIN`.
pub(crate) const SCALE_SPAN: f64 = 1.0 / 35.0;
pub(crate) const SCALE_MIN: f64 = 0.005;
/// On a placement collision the new star moves right by this many colliding-star scales.
pub(crate) const NUDGE_FACTOR: f64 = 4.0;

/// Eight-point star outline shared by every star, alternating inner and outer radii.
pub(crate) const BASE_OUTLINE: [[f64; 2]; 8] = [
    [-0.15, -0.15],
    [0.0, -0.5],
    [0.15, -0.15],
    [0.5, 0.0],
    [0.15, 0.15],
    [0.0, 0.5],
    [-0.15, 0.15],
    [-0.5, 0.0],
];
