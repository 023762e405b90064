//! Pace/stance locomotion state machine.
//!
//! The [`LocomotionComponent`] owns the current pace and stance, the tuning
//! tables, and the derived speed caps. Pace changes are validated against
//! the speed table; stance changes are accepted unconditionally (see
//! `DESIGN.md` on the asymmetry). Transitions broadcast to registered
//! observers synchronously, in registration order, on the caller's stack.
//!
//! The facing-vs-velocity angle gate is a standalone predicate:
//! [`LocomotionComponent::set_pace`] never consults it, while
//! [`LocomotionComponent::set_pace_checked`] is the wiring point for hosts
//! that want gated admission (e.g. sprint only within a forward cone).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::angles::{angle_between_degrees, AngleRange};
use crate::pace::{Pace, Stance};

/// Observer callback for pace transitions, called with `(old, new)`.
pub type PaceObserver = Box<dyn FnMut(Pace, Pace) + Send + Sync>;
/// Observer callback for stance transitions, called with `(old, new)`.
pub type StanceObserver = Box<dyn FnMut(Stance, Stance) + Send + Sync>;

/// Locomotion tuning tables and role markers.
///
/// Populated once (from a preset or by hand) and read-mostly afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocomotionConfig {
    /// Pace assigned on initialization.
    pub default_pace: Pace,
    /// Stance treated as the upright posture.
    pub standing_stance: Stance,
    /// Stance treated as the crouched posture. Its multiplier feeds the
    /// crouched speed cap regardless of the current stance.
    pub crouching_stance: Stance,
    /// Maximum movement speed per pace, units/second.
    pub pace_max_speed: BTreeMap<Pace, f32>,
    /// Speed multiplier per stance.
    pub stance_multiplier: BTreeMap<Stance, f32>,
    /// Allowed facing-vs-velocity angle per pace, degrees. A pace with no
    /// entry is unrestricted.
    pub pace_angle_restriction: BTreeMap<Pace, AngleRange>,
}

impl Default for LocomotionConfig {
    /// Default tuning: walk 200, jog 400, sprint 650 units/s; standing ×1.0,
    /// crouching ×0.5; no angle restrictions.
    fn default() -> Self {
        let mut pace_max_speed = BTreeMap::new();
        pace_max_speed.insert(Pace::WALK, 200.0);
        pace_max_speed.insert(Pace::JOG, 400.0);
        pace_max_speed.insert(Pace::SPRINT, 650.0);

        let mut stance_multiplier = BTreeMap::new();
        stance_multiplier.insert(Stance::STANDING, 1.0);
        stance_multiplier.insert(Stance::CROUCHING, 0.5);

        Self {
            default_pace: Pace::WALK,
            standing_stance: Stance::STANDING,
            crouching_stance: Stance::CROUCHING,
            pace_max_speed,
            stance_multiplier,
            pace_angle_restriction: BTreeMap::new(),
        }
    }
}

/// The locomotion state machine for one character.
pub struct LocomotionComponent {
    config: LocomotionConfig,
    current_pace: Pace,
    current_stance: Stance,
    max_speed: f32,
    max_speed_crouched: f32,
    pace_observers: Vec<PaceObserver>,
    stance_observers: Vec<StanceObserver>,
}

impl LocomotionComponent {
    pub fn new(config: LocomotionConfig) -> Self {
        let mut component = Self {
            current_pace: config.default_pace,
            current_stance: config.standing_stance,
            max_speed: 0.0,
            max_speed_crouched: 0.0,
            pace_observers: Vec::new(),
            stance_observers: Vec::new(),
            config,
        };
        component.recompute_speeds(component.current_pace);
        component
    }

    /// Reset to the configured defaults and announce the initial state.
    ///
    /// Called once on activation (entering play). The pace notification
    /// deliberately fires with old == new so observers get exactly one
    /// announcement; the stance notification reports the standing role as
    /// the prior value.
    pub fn initialize(&mut self) {
        self.current_pace = self.config.default_pace;
        self.recompute_speeds(self.current_pace);
        self.broadcast_pace(self.config.default_pace, self.current_pace);
        self.broadcast_stance(self.config.standing_stance, self.current_stance);
    }

    /// Request a pace change.
    ///
    /// Same-value requests and paces without a speed-table entry are silent
    /// no-ops. On an accepted change both derived speed caps are updated
    /// before observers run, so a callback never sees a half-applied state.
    pub fn set_pace(&mut self, new_pace: Pace) {
        if new_pace == self.current_pace || !self.config.pace_max_speed.contains_key(&new_pace) {
            return;
        }
        self.recompute_speeds(new_pace);
        let old_pace = self.current_pace;
        self.current_pace = new_pace;
        self.broadcast_pace(old_pace, new_pace);
    }

    /// Pace change gated by the facing-vs-velocity angle restriction.
    ///
    /// Returns whether the request passed the gate. A passing request may
    /// still be a no-op when the pace is already current or unregistered.
    pub fn set_pace_checked(
        &mut self,
        new_pace: Pace,
        facing: (f32, f32),
        velocity: (f32, f32),
    ) -> bool {
        if !self.is_pace_allowed_on_direction_angle(new_pace, facing, velocity) {
            return false;
        }
        self.set_pace(new_pace);
        true
    }

    /// Whether `pace` is admissible for the given planar facing and
    /// velocity.
    ///
    /// A pace with no registered restriction is always allowed. When either
    /// vector is zero length the angle is undefined and the check is
    /// skipped: a stationary character may change pace freely.
    pub fn is_pace_allowed_on_direction_angle(
        &self,
        pace: Pace,
        facing: (f32, f32),
        velocity: (f32, f32),
    ) -> bool {
        let Some(range) = self.config.pace_angle_restriction.get(&pace) else {
            return true;
        };
        match angle_between_degrees(facing, velocity) {
            Some(angle) => range.contains(angle),
            None => true,
        }
    }

    /// Request a stance change. Same-value requests are silent no-ops.
    ///
    /// Unlike `set_pace` there is no table lookup: any stance value is
    /// accepted. Preset validation is the layer that catches genuinely
    /// unknown stances.
    pub fn set_stance(&mut self, new_stance: Stance) {
        if new_stance == self.current_stance {
            return;
        }
        let old_stance = self.current_stance;
        self.current_stance = new_stance;
        self.broadcast_stance(old_stance, new_stance);
    }

    /// Register a pace-change observer.
    pub fn on_pace_changed(&mut self, observer: impl FnMut(Pace, Pace) + Send + Sync + 'static) {
        self.pace_observers.push(Box::new(observer));
    }

    /// Register a stance-change observer.
    pub fn on_stance_changed(
        &mut self,
        observer: impl FnMut(Stance, Stance) + Send + Sync + 'static,
    ) {
        self.stance_observers.push(Box::new(observer));
    }

    pub fn current_pace(&self) -> Pace {
        self.current_pace
    }

    pub fn current_stance(&self) -> Stance {
        self.current_stance
    }

    /// Effective maximum speed for the current pace.
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Effective maximum speed while crouched, derived from the crouching
    /// stance's multiplier independent of the current stance.
    pub fn max_speed_crouched(&self) -> f32 {
        self.max_speed_crouched
    }

    pub fn standing_stance(&self) -> Stance {
        self.config.standing_stance
    }

    pub fn crouching_stance(&self) -> Stance {
        self.config.crouching_stance
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    fn recompute_speeds(&mut self, pace: Pace) {
        let base = self.config.pace_max_speed.get(&pace).copied().unwrap_or(0.0);
        let crouch_multiplier = self
            .config
            .stance_multiplier
            .get(&self.config.crouching_stance)
            .copied()
            .unwrap_or(1.0);
        self.max_speed = base;
        self.max_speed_crouched = base * crouch_multiplier;
    }

    fn broadcast_pace(&mut self, old: Pace, new: Pace) {
        for observer in &mut self.pace_observers {
            observer(old, new);
        }
    }

    fn broadcast_stance(&mut self, old: Stance, new: Stance) {
        for observer in &mut self.stance_observers {
            observer(old, new);
        }
    }
}

impl std::fmt::Debug for LocomotionComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocomotionComponent")
            .field("current_pace", &self.current_pace)
            .field("current_stance", &self.current_stance)
            .field("max_speed", &self.max_speed)
            .field("max_speed_crouched", &self.max_speed_crouched)
            .field("pace_observers", &self.pace_observers.len())
            .field("stance_observers", &self.stance_observers.len())
            .finish_non_exhaustive()
    }
}
