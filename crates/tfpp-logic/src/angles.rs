//! Planar angle helpers shared by the locomotion gate and the view math.
//!
//! All angles are degrees. Wrapped angles live in the signed range
//! `(-180, 180]`.

use serde::{Deserialize, Serialize};

/// Squared length below which a planar vector counts as zero.
const DEGENERATE_LEN_SQ: f32 = 1.0e-8;

/// A closed angle range `[min, max]` in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    pub min: f32,
    pub max: f32,
}

impl AngleRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether `angle` falls inside the range, bounds included.
    pub fn contains(&self, angle: f32) -> bool {
        self.min <= angle && angle <= self.max
    }
}

/// Wrap an angle to the signed range `(-180, 180]`.
pub fn wrap_degrees(angle: f32) -> f32 {
    let r = angle.rem_euclid(360.0);
    if r > 180.0 {
        r - 360.0
    } else {
        r
    }
}

/// Wrap `angle` to `(-180, 180]`, then clamp it into `[min, max]`.
pub fn clamp_angle(angle: f32, min: f32, max: f32) -> f32 {
    wrap_degrees(angle).clamp(min, max)
}

/// Normalize a planar vector. Returns `None` for zero-length input.
pub fn normalize_planar(v: (f32, f32)) -> Option<(f32, f32)> {
    let len_sq = v.0 * v.0 + v.1 * v.1;
    if len_sq <= DEGENERATE_LEN_SQ {
        return None;
    }
    let len = len_sq.sqrt();
    Some((v.0 / len, v.1 / len))
}

/// Unsigned angle between two planar vectors, in `[0, 180]` degrees.
///
/// Returns `None` when either vector is zero length — there is no
/// direction to measure against.
pub fn angle_between_degrees(a: (f32, f32), b: (f32, f32)) -> Option<f32> {
    let an = normalize_planar(a)?;
    let bn = normalize_planar(b)?;
    let dot = (an.0 * bn.0 + an.1 * bn.1).clamp(-1.0, 1.0);
    Some(dot.acos().to_degrees())
}
