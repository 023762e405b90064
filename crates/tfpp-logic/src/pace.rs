//! Pace and stance tier identifiers.
//!
//! Paces and stances are opaque `u8` tiers: what a tier *means* comes from
//! the configuration tables, not from the identifier itself. The constants
//! below name the tiers the default preset populates; hosts are free to
//! define more.

use serde::{Deserialize, Serialize};

/// A named movement-speed tier.
///
/// The default preset defines three: walk, jog, and sprint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Pace(pub u8);

impl Pace {
    pub const WALK: Pace = Pace(0);
    pub const JOG: Pace = Pace(1);
    pub const SPRINT: Pace = Pace(2);
}

/// A posture tier affecting the movement-speed multiplier.
///
/// Two tiers carry a distinguished role in the locomotion tables: the
/// standing stance and the crouching stance. The default preset defines
/// exactly those two.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Stance(pub u8);

impl Stance {
    pub const STANDING: Stance = Stance(0);
    pub const CROUCHING: Stance = Stance(1);
}
