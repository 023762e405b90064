//! Kinematics system - advance body positions from velocity.

use hecs::World;

use crate::components::Body;

/// Integrate every body's position by one tick of its velocity.
pub fn kinematics_system(world: &mut World, delta_seconds: f32) {
    for (_entity, body) in world.query_mut::<&mut Body>() {
        body.position = body.position + body.velocity * delta_seconds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Vec3;

    #[test]
    fn position_advances_by_velocity() {
        let mut world = World::new();
        let entity = world.spawn((Body {
            position: Vec3::new(1.0, 0.0, 0.0),
            velocity: Vec3::new(2.0, -4.0, 0.0),
            yaw: 0.0,
        },));

        kinematics_system(&mut world, 0.5);

        let body = world.get::<&Body>(entity).unwrap();
        assert_eq!(body.position, Vec3::new(2.0, -2.0, 0.0));
    }
}
