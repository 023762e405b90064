//! Character components.

use serde::{Deserialize, Serialize};
use tfpp_logic::view::{ViewLimits, ViewRotation};

use super::common::Vec3;

/// Kinematic body state, fed by the host integrator every tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Body yaw, degrees.
    pub yaw: f32,
}

/// Controller look input.
///
/// Present only while an input source drives the character; removing the
/// component detaches the controller and freezes the cached view rotation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ControlInput {
    /// Raw look pitch, degrees.
    pub look_pitch: f32,
    /// Raw look yaw, degrees.
    pub look_yaw: f32,
}

/// Cached adjusted view rotation plus the character's view limits.
///
/// The cache is only refreshed on ticks where a `ControlInput` is attached;
/// otherwise the previous value persists until the next controlled tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewState {
    pub adjusted: ViewRotation,
    pub limits: ViewLimits,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            adjusted: ViewRotation::default(),
            limits: ViewLimits::default(),
        }
    }
}

/// Crouch posture, the stand-in for the host capsule/collision system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PostureState {
    /// Whether the surrounding geometry permits entering a crouched posture.
    pub can_crouch: bool,
    /// Whether the capsule is currently crouched.
    pub crouched: bool,
}

impl Default for PostureState {
    fn default() -> Self {
        Self {
            can_crouch: true,
            crouched: false,
        }
    }
}

impl PostureState {
    pub fn begin_crouch(&mut self) {
        self.crouched = true;
    }

    pub fn end_crouch(&mut self) {
        self.crouched = false;
    }
}
