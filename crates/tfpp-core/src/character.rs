//! Character-level operations: spawning, the stance/pace façade, and
//! query accessors.
//!
//! The stance setter wraps the locomotion component with crouch posture
//! side effects. Both crouch gating conditions are evaluated from the
//! pre-transition stance, then the component is mutated exactly once —
//! the delegation is what actually updates the stance.

use hecs::{Entity, World};
use tfpp_logic::direction::moving_direction;
use tfpp_logic::locomotion::{LocomotionComponent, LocomotionConfig};
use tfpp_logic::pace::{Pace, Stance};
use tfpp_logic::view::{ViewLimits, ViewRotation};

use crate::components::{Body, PostureState, ViewState};

/// Spawn a character entity with the standard component set.
///
/// The spawned character has no `ControlInput`; attach one to drive the
/// view rotation.
pub fn spawn_character(world: &mut World, config: LocomotionConfig, limits: ViewLimits) -> Entity {
    world.spawn((
        Body::default(),
        PostureState::default(),
        ViewState {
            adjusted: ViewRotation::default(),
            limits,
        },
        LocomotionComponent::new(config),
    ))
}

/// Set the character's pace, delegating to the locomotion component.
///
/// A character without a locomotion component is a wiring error: logged,
/// and the call becomes a no-op.
pub fn set_character_pace(world: &mut World, entity: Entity, pace: Pace) {
    let Ok(mut movement) = world.get::<&mut LocomotionComponent>(entity) else {
        log::error!("character {:?} has no locomotion component", entity);
        return;
    };
    movement.set_pace(pace);
}

/// Set the character's stance, handling crouch posture transitions.
pub fn set_character_stance(world: &mut World, entity: Entity, stance: Stance) {
    let Ok(mut movement) = world.get::<&mut LocomotionComponent>(entity) else {
        log::error!("character {:?} has no locomotion component", entity);
        return;
    };
    let Ok(mut posture) = world.get::<&mut PostureState>(entity) else {
        log::error!("character {:?} has no posture state", entity);
        return;
    };

    let crouch_stance = movement.crouching_stance();
    let stand_stance = movement.standing_stance();
    let before = movement.current_stance();

    if stance == crouch_stance && posture.can_crouch && before != crouch_stance {
        posture.begin_crouch();
    }
    if stance != before && before == crouch_stance && stance == stand_stance {
        posture.end_crouch();
    }

    movement.set_stance(stance);
}

/// Current pace, or `None` when the entity is not a character.
pub fn character_pace(world: &World, entity: Entity) -> Option<Pace> {
    world
        .get::<&LocomotionComponent>(entity)
        .ok()
        .map(|movement| movement.current_pace())
}

/// Current stance, or `None` when the entity is not a character.
pub fn character_stance(world: &World, entity: Entity) -> Option<Stance> {
    world
        .get::<&LocomotionComponent>(entity)
        .ok()
        .map(|movement| movement.current_stance())
}

/// Last computed adjusted view rotation.
pub fn adjusted_view_rotation(world: &World, entity: Entity) -> Option<ViewRotation> {
    world
        .get::<&ViewState>(entity)
        .ok()
        .map(|view| view.adjusted)
}

/// Quantized movement direction `(forward, right)` for a character, each
/// axis in {-1, 0, 1}. A missing body reads as stationary.
pub fn character_moving_direction(world: &World, entity: Entity) -> (i32, i32) {
    match world.get::<&Body>(entity) {
        Ok(body) => moving_direction(body.velocity.planar(), body.yaw),
        Err(_) => {
            log::error!("character {:?} has no body", entity);
            (0, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Vec3;

    fn spawn(world: &mut World) -> Entity {
        spawn_character(world, LocomotionConfig::default(), ViewLimits::default())
    }

    fn posture(world: &World, entity: Entity) -> PostureState {
        *world.get::<&PostureState>(entity).unwrap()
    }

    // --- Crouch gating ---

    #[test]
    fn crouch_stance_begins_crouch() {
        let mut world = World::new();
        let player = spawn(&mut world);

        set_character_stance(&mut world, player, Stance::CROUCHING);
        assert!(posture(&world, player).crouched);
        assert_eq!(character_stance(&world, player), Some(Stance::CROUCHING));
    }

    #[test]
    fn crouch_denied_still_changes_stance() {
        let mut world = World::new();
        let player = spawn(&mut world);
        world.get::<&mut PostureState>(player).unwrap().can_crouch = false;

        // The posture system refuses the capsule change, but the stance
        // request is still forwarded to the locomotion component.
        set_character_stance(&mut world, player, Stance::CROUCHING);
        assert!(!posture(&world, player).crouched);
        assert_eq!(character_stance(&world, player), Some(Stance::CROUCHING));
    }

    #[test]
    fn standing_up_ends_crouch() {
        let mut world = World::new();
        let player = spawn(&mut world);
        set_character_stance(&mut world, player, Stance::CROUCHING);

        set_character_stance(&mut world, player, Stance::STANDING);
        assert!(!posture(&world, player).crouched);
        assert_eq!(character_stance(&world, player), Some(Stance::STANDING));
    }

    #[test]
    fn leaving_crouch_for_non_standing_keeps_capsule() {
        let mut world = World::new();
        let player = spawn(&mut world);
        set_character_stance(&mut world, player, Stance::CROUCHING);

        // Some third stance: not the standing role, so no uncrouch command.
        set_character_stance(&mut world, player, Stance(2));
        assert!(posture(&world, player).crouched);
        assert_eq!(character_stance(&world, player), Some(Stance(2)));
    }

    #[test]
    fn repeated_crouch_request_is_idempotent() {
        let mut world = World::new();
        let player = spawn(&mut world);
        set_character_stance(&mut world, player, Stance::CROUCHING);
        set_character_stance(&mut world, player, Stance::CROUCHING);
        assert!(posture(&world, player).crouched);
    }

    // --- Wiring errors ---

    #[test]
    fn missing_locomotion_component_is_a_noop() {
        let mut world = World::new();
        let bare = world.spawn((Body::default(),));
        set_character_pace(&mut world, bare, Pace::JOG);
        set_character_stance(&mut world, bare, Stance::CROUCHING);
        assert_eq!(character_pace(&world, bare), None);
    }

    // --- Accessors ---

    #[test]
    fn moving_direction_uses_body_frame() {
        let mut world = World::new();
        let player = spawn(&mut world);
        {
            let mut body = world.get::<&mut Body>(player).unwrap();
            body.yaw = 90.0;
            body.velocity = Vec3::new(0.0, 5.0, 0.0);
        }
        assert_eq!(character_moving_direction(&world, player), (1, 0));
    }

    #[test]
    fn pace_setter_delegates() {
        let mut world = World::new();
        let player = spawn(&mut world);
        set_character_pace(&mut world, player, Pace::SPRINT);
        assert_eq!(character_pace(&world, player), Some(Pace::SPRINT));
    }
}
