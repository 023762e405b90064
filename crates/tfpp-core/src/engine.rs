//! Character simulation engine - main entry point for running the
//! simulation.

use hecs::{Entity, World};
use tfpp_logic::locomotion::{LocomotionComponent, LocomotionConfig};
use tfpp_logic::pace::{Pace, Stance};
use tfpp_logic::view::ViewLimits;

use crate::character::{set_character_pace, set_character_stance, spawn_character};
use crate::diagnostics::LogSettings;
use crate::systems::{kinematics_system, view_rotation_system};

/// Main simulation engine for TFPP characters.
///
/// All operations run on the caller's thread; the engine never spawns
/// tasks or queues work. Mutation entry points and ticks are expected to
/// be serialized by the host's frame loop.
pub struct CharacterEngine {
    /// ECS world containing all character entities.
    pub world: World,
    /// Simulation time in seconds since activation.
    pub sim_time: f64,
    log: LogSettings,
}

impl CharacterEngine {
    /// Create a new empty engine with the given logging policy.
    pub fn new(log: LogSettings) -> Self {
        Self {
            world: World::new(),
            sim_time: 0.0,
            log,
        }
    }

    /// Spawn a character with the given locomotion tuning and view limits.
    ///
    /// With development messages enabled, pace and stance transitions are
    /// traced through the `log` facade.
    pub fn spawn_character(&mut self, config: LocomotionConfig, limits: ViewLimits) -> Entity {
        let entity = spawn_character(&mut self.world, config, limits);
        if self.log.development_messages {
            if let Ok(mut movement) = self.world.get::<&mut LocomotionComponent>(entity) {
                movement.on_pace_changed(move |old, new| {
                    log::debug!("{:?}: pace {:?} -> {:?}", entity, old, new);
                });
                movement.on_stance_changed(move |old, new| {
                    log::debug!("{:?}: stance {:?} -> {:?}", entity, old, new);
                });
            }
        }
        entity
    }

    /// Enter play: initialize every locomotion component.
    ///
    /// Each component resets to its configured defaults and fires the
    /// initial pace/stance announcements exactly once.
    pub fn activate(&mut self) {
        for (_entity, movement) in self.world.query_mut::<&mut LocomotionComponent>() {
            movement.initialize();
        }
    }

    /// Advance the simulation by `delta_seconds`.
    pub fn update(&mut self, delta_seconds: f32) {
        self.sim_time += delta_seconds as f64;

        kinematics_system(&mut self.world, delta_seconds);
        view_rotation_system(&mut self.world);
    }

    /// Request a pace change for a character.
    pub fn set_pace(&mut self, entity: Entity, pace: Pace) {
        set_character_pace(&mut self.world, entity, pace);
    }

    /// Request a stance change for a character, including crouch posture
    /// handling.
    pub fn set_stance(&mut self, entity: Entity, stance: Stance) {
        set_character_stance(&mut self.world, entity, stance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::adjusted_view_rotation;
    use crate::components::{Body, ControlInput};
    use std::sync::{Arc, Mutex};

    fn engine_with_player() -> (CharacterEngine, Entity) {
        let mut engine = CharacterEngine::new(LogSettings::default());
        let player = engine.spawn_character(LocomotionConfig::default(), ViewLimits::default());
        (engine, player)
    }

    #[test]
    fn activation_announces_once_per_character() {
        let (mut engine, player) = engine_with_player();
        let events = Arc::new(Mutex::new(Vec::new()));
        {
            let mut movement = engine
                .world
                .get::<&mut LocomotionComponent>(player)
                .unwrap();
            let sink = events.clone();
            movement.on_pace_changed(move |old, new| sink.lock().unwrap().push((old, new)));
        }

        engine.activate();

        assert_eq!(
            events.lock().unwrap().as_slice(),
            &[(Pace::WALK, Pace::WALK)]
        );
    }

    #[test]
    fn uncontrolled_character_keeps_stale_view() {
        let (mut engine, player) = engine_with_player();
        engine.activate();
        engine.update(1.0 / 60.0);

        let before = adjusted_view_rotation(&engine.world, player).unwrap();
        engine.update(1.0 / 60.0);
        let after = adjusted_view_rotation(&engine.world, player).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn attaching_control_drives_the_view() {
        let (mut engine, player) = engine_with_player();
        engine.activate();
        engine
            .world
            .insert_one(
                player,
                ControlInput {
                    look_pitch: -95.0,
                    look_yaw: 40.0,
                },
            )
            .unwrap();
        engine.world.get::<&mut Body>(player).unwrap().yaw = 10.0;

        engine.update(1.0 / 60.0);

        let view = adjusted_view_rotation(&engine.world, player).unwrap();
        assert_eq!(view.pitch, -90.0);
        assert!((view.yaw - 30.0).abs() < 1e-4);
    }

    #[test]
    fn sim_time_accumulates() {
        let (mut engine, _player) = engine_with_player();
        engine.update(0.25);
        engine.update(0.25);
        assert!((engine.sim_time - 0.5).abs() < 1e-9);
    }

    #[test]
    fn engine_setters_reach_the_component() {
        let (mut engine, player) = engine_with_player();
        engine.activate();
        engine.set_pace(player, Pace::JOG);
        engine.set_stance(player, Stance::CROUCHING);

        let movement = engine.world.get::<&LocomotionComponent>(player).unwrap();
        assert_eq!(movement.current_pace(), Pace::JOG);
        assert_eq!(movement.current_stance(), Stance::CROUCHING);
        assert_eq!(movement.max_speed(), 400.0);
        assert_eq!(movement.max_speed_crouched(), 200.0);
    }
}
