//! Movement system.
//!
//! Integrates [`Position`](crate::components::position::Position) from
//! [`Velocity`](crate::components::velocity::Velocity) once per tick for
//! every entity in its working set.

use crate::ecs::component::{ComponentKind, Signature};
use crate::ecs::entity::EntityId;
use crate::ecs::system::System;
use crate::ecs::world::ComponentStore;

/// Applies `position += velocity * dt` to entities carrying both components.
pub struct MovementSystem;

impl System for MovementSystem {
    fn signature(&self) -> Signature {
        Signature::of(&[ComponentKind::Position, ComponentKind::Velocity])
    }

    fn update(&mut self, store: &mut ComponentStore, members: &[EntityId], dt: f32) {
        for &id in members {
            let Some(velocity) = store.velocity(id).copied() else {
                continue;
            };
            if let Some(position) = store.position_mut(id) {
                position.x += velocity.x * dt;
                position.y += velocity.y * dt;
                position.z += velocity.z * dt;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::position::Position;
    use crate::components::velocity::Velocity;
    use crate::ecs::world::World;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_velocity_integrates_into_position() {
        let mut world = World::new();
        world.add_system(Box::new(MovementSystem));
        let entity = world.create_entity();
        world.add_component(entity, Position::new(0.0, 0.0, 0.0));
        world.add_component(entity, Velocity::new(1.0, 0.0, 0.0));

        world.update(0.0); // dt 0 on the first tick
        world.update(1.0);

        let position = world.store().position(entity).unwrap();
        assert!(approx_eq(position.x, 1.0));
        assert!(approx_eq(position.y, 0.0));
        assert!(approx_eq(position.z, 0.0));
    }

    #[test]
    fn test_fractional_delta_scales_displacement() {
        let mut world = World::new();
        world.add_system(Box::new(MovementSystem));
        let entity = world.create_entity();
        world.add_component(entity, Position::new(2.0, 0.0, -1.0));
        world.add_component(entity, Velocity::new(10.0, -4.0, 2.0));

        world.update(0.0);
        world.update(0.25);

        let position = world.store().position(entity).unwrap();
        assert!(approx_eq(position.x, 4.5));
        assert!(approx_eq(position.y, -1.0));
        assert!(approx_eq(position.z, -0.5));
    }

    #[test]
    fn test_entity_without_velocity_is_untouched() {
        let mut world = World::new();
        world.add_system(Box::new(MovementSystem));
        let entity = world.create_entity();
        world.add_component(entity, Position::new(3.0, 3.0, 3.0));

        world.update(0.0);
        world.update(1.0);

        let position = world.store().position(entity).unwrap();
        assert!(approx_eq(position.x, 3.0));
    }
}
