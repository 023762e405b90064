//! Discrete movement-direction classification.
//!
//! Approximates input-like direction intent from continuous velocity:
//! project the planar world velocity into the body's local frame, normalize
//! it, then snap each axis to {-1, 0, 1} with a dead zone. Useful for
//! direction-dependent animation selection and pace gating.

/// Dead zone on the normalized local component below which an axis reads 0.
pub const DIRECTION_DEAD_ZONE: f32 = 0.1;

/// Snap a normalized local-frame direction to `(forward, right)` with each
/// axis in {-1, 0, 1}.
///
/// A component within `DIRECTION_DEAD_ZONE` of zero reads 0, otherwise it
/// snaps to its sign.
pub fn quantize_direction(local: (f32, f32)) -> (i32, i32) {
    (quantize_axis(local.0), quantize_axis(local.1))
}

/// Classify planar world `velocity` relative to a body facing `body_yaw`
/// degrees.
///
/// Inverse-rotates the velocity into the body frame, normalizes, then
/// quantizes. Zero velocity maps to `(0, 0)`.
pub fn moving_direction(velocity: (f32, f32), body_yaw: f32) -> (i32, i32) {
    let yaw = body_yaw.to_radians();
    let (sin, cos) = yaw.sin_cos();
    let local = (
        velocity.0 * cos + velocity.1 * sin,
        -velocity.0 * sin + velocity.1 * cos,
    );

    match crate::angles::normalize_planar(local) {
        Some(n) => quantize_direction(n),
        None => (0, 0),
    }
}

fn quantize_axis(component: f32) -> i32 {
    if component.abs() <= DIRECTION_DEAD_ZONE {
        0
    } else if component > 0.0 {
        1
    } else {
        -1
    }
}
