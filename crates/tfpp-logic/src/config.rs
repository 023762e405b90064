//! Locomotion preset schema — named paces and stances loaded from JSON.
//!
//! The preset is the external configuration surface for the locomotion
//! tables: each tier is declared with an id and a display name, and the
//! loader validates the whole document before any table is built. Display
//! names exist for tooling and UI; runtime state only carries the ids.
//!
//! ```
//! use tfpp_logic::config::{build_config, validate_preset, LocomotionPreset};
//!
//! let json = r#"{
//!     "name": "minimal",
//!     "default_pace": 0,
//!     "standing_stance": 0,
//!     "crouching_stance": 1,
//!     "paces": [{ "id": 0, "name": "Walking", "max_speed": 200.0 }],
//!     "stances": [
//!         { "id": 0, "name": "Standing", "speed_multiplier": 1.0 },
//!         { "id": 1, "name": "Crouching", "speed_multiplier": 0.5 }
//!     ]
//! }"#;
//! let preset: LocomotionPreset = serde_json::from_str(json).unwrap();
//! assert!(validate_preset(&preset).is_empty());
//! let config = build_config(&preset);
//! ```

use serde::{Deserialize, Serialize};

use crate::angles::AngleRange;
use crate::locomotion::LocomotionConfig;
use crate::pace::{Pace, Stance};
use crate::view::ViewLimits;

/// A named pace tier in the preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaceSpec {
    pub id: u8,
    pub name: String,
    /// Maximum movement speed, units/second.
    pub max_speed: f32,
    /// Allowed facing-vs-velocity angle range, degrees. `None` means the
    /// pace is unrestricted.
    #[serde(default)]
    pub angle_restriction: Option<AngleRange>,
}

/// A named stance tier in the preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StanceSpec {
    pub id: u8,
    pub name: String,
    pub speed_multiplier: f32,
}

/// A complete locomotion preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocomotionPreset {
    pub name: String,
    pub default_pace: u8,
    pub standing_stance: u8,
    pub crouching_stance: u8,
    pub paces: Vec<PaceSpec>,
    pub stances: Vec<StanceSpec>,
    #[serde(default)]
    pub view: ViewLimits,
}

/// Preset validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// No pace entry matches the declared default pace.
    UnknownDefaultPace(u8),
    /// No stance entry matches a declared stance role (standing/crouching).
    UnknownStanceRole(u8),
    DuplicatePaceId(u8),
    DuplicateStanceId(u8),
    EmptyPaceName(u8),
    EmptyStanceName(u8),
    /// Pace max speed must be positive.
    NonPositiveSpeed(u8),
    /// Stance multiplier must be positive.
    NonPositiveMultiplier(u8),
    /// Angle restriction inverted or outside [0, 180].
    InvalidAngleRange(u8),
    /// Pitch limits inverted or outside [-180, 180].
    InvalidPitchRange,
    /// Yaw limits inverted or outside [-180, 180].
    InvalidYawRange,
    NoPaces,
    NoStances,
}

/// Validate a preset, returning all errors found.
pub fn validate_preset(preset: &LocomotionPreset) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if preset.paces.is_empty() {
        errors.push(ConfigError::NoPaces);
    }
    if preset.stances.is_empty() {
        errors.push(ConfigError::NoStances);
    }

    let mut seen_paces: Vec<u8> = Vec::new();
    for pace in &preset.paces {
        if seen_paces.contains(&pace.id) {
            errors.push(ConfigError::DuplicatePaceId(pace.id));
        }
        seen_paces.push(pace.id);

        if pace.name.trim().is_empty() {
            errors.push(ConfigError::EmptyPaceName(pace.id));
        }
        if pace.max_speed <= 0.0 {
            errors.push(ConfigError::NonPositiveSpeed(pace.id));
        }
        if let Some(range) = &pace.angle_restriction {
            if range.min > range.max || range.min < 0.0 || range.max > 180.0 {
                errors.push(ConfigError::InvalidAngleRange(pace.id));
            }
        }
    }

    let mut seen_stances: Vec<u8> = Vec::new();
    for stance in &preset.stances {
        if seen_stances.contains(&stance.id) {
            errors.push(ConfigError::DuplicateStanceId(stance.id));
        }
        seen_stances.push(stance.id);

        if stance.name.trim().is_empty() {
            errors.push(ConfigError::EmptyStanceName(stance.id));
        }
        if stance.speed_multiplier <= 0.0 {
            errors.push(ConfigError::NonPositiveMultiplier(stance.id));
        }
    }

    if !seen_paces.contains(&preset.default_pace) {
        errors.push(ConfigError::UnknownDefaultPace(preset.default_pace));
    }
    if !seen_stances.contains(&preset.standing_stance) {
        errors.push(ConfigError::UnknownStanceRole(preset.standing_stance));
    }
    if !seen_stances.contains(&preset.crouching_stance) {
        errors.push(ConfigError::UnknownStanceRole(preset.crouching_stance));
    }

    let view = &preset.view;
    if view.pitch_min > view.pitch_max || view.pitch_min < -180.0 || view.pitch_max > 180.0 {
        errors.push(ConfigError::InvalidPitchRange);
    }
    if view.yaw_min > view.yaw_max || view.yaw_min < -180.0 || view.yaw_max > 180.0 {
        errors.push(ConfigError::InvalidYawRange);
    }

    errors
}

/// Build the runtime tables from a preset.
///
/// Call [`validate_preset`] first; this does no checking of its own.
pub fn build_config(preset: &LocomotionPreset) -> LocomotionConfig {
    let mut config = LocomotionConfig {
        default_pace: Pace(preset.default_pace),
        standing_stance: Stance(preset.standing_stance),
        crouching_stance: Stance(preset.crouching_stance),
        pace_max_speed: Default::default(),
        stance_multiplier: Default::default(),
        pace_angle_restriction: Default::default(),
    };

    for pace in &preset.paces {
        config.pace_max_speed.insert(Pace(pace.id), pace.max_speed);
        if let Some(range) = pace.angle_restriction {
            config.pace_angle_restriction.insert(Pace(pace.id), range);
        }
    }
    for stance in &preset.stances {
        config
            .stance_multiplier
            .insert(Stance(stance.id), stance.speed_multiplier);
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset() -> LocomotionPreset {
        LocomotionPreset {
            name: "test".into(),
            default_pace: 0,
            standing_stance: 0,
            crouching_stance: 1,
            paces: vec![
                PaceSpec {
                    id: 0,
                    name: "Walking".into(),
                    max_speed: 200.0,
                    angle_restriction: None,
                },
                PaceSpec {
                    id: 2,
                    name: "Sprinting".into(),
                    max_speed: 650.0,
                    angle_restriction: Some(AngleRange::new(0.0, 75.0)),
                },
            ],
            stances: vec![
                StanceSpec {
                    id: 0,
                    name: "Standing".into(),
                    speed_multiplier: 1.0,
                },
                StanceSpec {
                    id: 1,
                    name: "Crouching".into(),
                    speed_multiplier: 0.5,
                },
            ],
            view: ViewLimits::default(),
        }
    }

    // --- Validation ---

    #[test]
    fn valid_preset_passes() {
        assert!(validate_preset(&preset()).is_empty());
    }

    #[test]
    fn unknown_default_pace_is_reported() {
        let mut p = preset();
        p.default_pace = 5;
        assert_eq!(validate_preset(&p), vec![ConfigError::UnknownDefaultPace(5)]);
    }

    #[test]
    fn unknown_stance_roles_are_reported() {
        let mut p = preset();
        p.crouching_stance = 9;
        assert_eq!(validate_preset(&p), vec![ConfigError::UnknownStanceRole(9)]);
    }

    #[test]
    fn inverted_angle_range_is_reported() {
        let mut p = preset();
        p.paces[1].angle_restriction = Some(AngleRange::new(90.0, 30.0));
        assert_eq!(validate_preset(&p), vec![ConfigError::InvalidAngleRange(2)]);
    }

    #[test]
    fn out_of_bounds_angle_range_is_reported() {
        let mut p = preset();
        p.paces[1].angle_restriction = Some(AngleRange::new(0.0, 270.0));
        assert_eq!(validate_preset(&p), vec![ConfigError::InvalidAngleRange(2)]);
    }

    #[test]
    fn all_errors_are_collected() {
        let mut p = preset();
        p.paces[0].max_speed = 0.0;
        p.stances[1].name = "  ".into();
        p.default_pace = 7;
        let errors = validate_preset(&p);
        assert!(errors.contains(&ConfigError::NonPositiveSpeed(0)));
        assert!(errors.contains(&ConfigError::EmptyStanceName(1)));
        assert!(errors.contains(&ConfigError::UnknownDefaultPace(7)));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut p = preset();
        p.paces[1].id = 0;
        p.default_pace = 0;
        assert_eq!(validate_preset(&p), vec![ConfigError::DuplicatePaceId(0)]);
    }

    #[test]
    fn inverted_pitch_range_is_reported() {
        let mut p = preset();
        p.view.pitch_min = 45.0;
        p.view.pitch_max = -45.0;
        assert_eq!(validate_preset(&p), vec![ConfigError::InvalidPitchRange]);
    }

    // --- Table building ---

    #[test]
    fn build_config_fills_tables() {
        let config = build_config(&preset());
        assert_eq!(config.default_pace, Pace(0));
        assert_eq!(config.pace_max_speed.get(&Pace(2)), Some(&650.0));
        assert_eq!(config.stance_multiplier.get(&Stance(1)), Some(&0.5));
        assert_eq!(
            config.pace_angle_restriction.get(&Pace(2)),
            Some(&AngleRange::new(0.0, 75.0))
        );
        // Unrestricted paces get no restriction entry.
        assert!(!config.pace_angle_restriction.contains_key(&Pace(0)));
    }
}
