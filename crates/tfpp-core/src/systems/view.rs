//! View rotation system - recompute the adjusted view for controlled
//! characters.

use hecs::World;
use tfpp_logic::view::calculate_view_rotation;

use crate::components::{Body, ControlInput, ViewState};

/// Recompute the cached view rotation for every entity with an attached
/// `ControlInput`.
///
/// Entities without a controller are skipped entirely: their cached value
/// stays stale until the next controlled tick.
pub fn view_rotation_system(world: &mut World) {
    for (_entity, (body, input, view)) in
        world.query_mut::<(&Body, &ControlInput, &mut ViewState)>()
    {
        view.adjusted =
            calculate_view_rotation(input.look_pitch, input.look_yaw, body.yaw, &view.limits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfpp_logic::view::ViewLimits;

    #[test]
    fn controlled_entity_gets_fresh_rotation() {
        let mut world = World::new();
        let entity = world.spawn((
            Body {
                yaw: -170.0,
                ..Body::default()
            },
            ControlInput {
                look_pitch: 120.0,
                look_yaw: 170.0,
            },
            ViewState::default(),
        ));

        view_rotation_system(&mut world);

        let view = world.get::<&ViewState>(entity).unwrap();
        assert_eq!(view.adjusted.pitch, 90.0);
        assert!((view.adjusted.yaw - (-20.0)).abs() < 1e-4);
        assert_eq!(view.adjusted.roll, 0.0);
    }

    #[test]
    fn uncontrolled_entity_keeps_cached_value() {
        let mut world = World::new();
        let entity = world.spawn((
            Body::default(),
            ViewState {
                adjusted: tfpp_logic::view::ViewRotation {
                    pitch: 12.0,
                    yaw: 34.0,
                    roll: 0.0,
                },
                limits: ViewLimits::default(),
            },
        ));

        view_rotation_system(&mut world);

        let view = world.get::<&ViewState>(entity).unwrap();
        assert_eq!(view.adjusted.pitch, 12.0);
        assert_eq!(view.adjusted.yaw, 34.0);
    }
}
