//! Decoupled view-rotation math.
//!
//! In a true first-person setup the camera looks independently of the body:
//! pitch is clamped into a configured range, yaw is the signed shortest
//! difference between the controller look yaw and the body yaw, and roll is
//! unused. The result is transient — recomputed every controlled tick, with
//! no smoothing across ticks.

use serde::{Deserialize, Serialize};

use crate::angles::{clamp_angle, wrap_degrees};

/// Adjusted view rotation in degrees. `roll` is always 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewRotation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// Pitch and yaw limits for the adjusted view.
///
/// The yaw limits are carried in the preset for completeness; the adjusted
/// yaw is the wrapped look-vs-body difference and is not clamped, so the
/// default full-revolution range imposes no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewLimits {
    pub pitch_min: f32,
    pub pitch_max: f32,
    pub yaw_min: f32,
    pub yaw_max: f32,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            pitch_min: -90.0,
            pitch_max: 90.0,
            yaw_min: -180.0,
            yaw_max: 180.0,
        }
    }
}

/// Clamp the controller look pitch into the configured range.
pub fn process_pitch(look_pitch: f32, limits: &ViewLimits) -> f32 {
    clamp_angle(look_pitch, limits.pitch_min, limits.pitch_max)
}

/// Signed shortest yaw difference look − body, in `(-180, 180]` degrees.
pub fn process_yaw(look_yaw: f32, body_yaw: f32) -> f32 {
    wrap_degrees(look_yaw - body_yaw)
}

/// Compute the adjusted view rotation for one tick.
pub fn calculate_view_rotation(
    look_pitch: f32,
    look_yaw: f32,
    body_yaw: f32,
    limits: &ViewLimits,
) -> ViewRotation {
    ViewRotation {
        pitch: process_pitch(look_pitch, limits),
        yaw: process_yaw(look_yaw, body_yaw),
        roll: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Pitch ---

    #[test]
    fn pitch_clamps_to_range() {
        let limits = ViewLimits::default();
        assert_eq!(process_pitch(120.0, &limits), 90.0);
        assert_eq!(process_pitch(-95.0, &limits), -90.0);
        assert_eq!(process_pitch(45.0, &limits), 45.0);
    }

    #[test]
    fn pitch_respects_narrow_range() {
        let limits = ViewLimits {
            pitch_min: -60.0,
            pitch_max: 30.0,
            ..ViewLimits::default()
        };
        assert_eq!(process_pitch(89.0, &limits), 30.0);
        assert_eq!(process_pitch(-89.0, &limits), -60.0);
    }

    // --- Yaw ---

    #[test]
    fn yaw_is_simple_difference_away_from_seam() {
        assert!((process_yaw(30.0, 10.0) - 20.0).abs() < 1e-4);
        assert!((process_yaw(10.0, 30.0) - (-20.0)).abs() < 1e-4);
    }

    #[test]
    fn yaw_wraps_across_seam() {
        // look 170, body -170: raw difference is 340, shortest is -20.
        assert!((process_yaw(170.0, -170.0) - (-20.0)).abs() < 1e-4);
        assert!((process_yaw(-170.0, 170.0) - 20.0).abs() < 1e-4);
    }

    // --- Full calculation ---

    #[test]
    fn roll_is_always_zero() {
        let v = calculate_view_rotation(12.0, 270.0, 5.0, &ViewLimits::default());
        assert_eq!(v.roll, 0.0);
        assert_eq!(v.pitch, 12.0);
        assert!((v.yaw - (-95.0)).abs() < 1e-4);
    }
}
