//! Simulation facade.
//!
//! [`Simulation`] owns the ECS world, the physics engine, the character
//! controller and the camera rig, and advances them in a fixed order once
//! per tick. The host feeds it wall-clock timestamps and input snapshots
//! and reads back render updates; nothing inside renders or blocks.

use glam::Vec3;
use log::debug;
use rustc_hash::FxHashMap;

use crate::camera::CameraController;
use crate::character::CharacterController;
use crate::config::SimConfig;
use crate::ecs::{ComponentKind, EntityId, Signature, World};
use crate::input::InputSnapshot;
use crate::physics::PhysicsEngine;
use crate::systems::movement::MovementSystem;

/// Position of one renderable entity, keyed by its render handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderUpdate {
    pub handle: u64,
    pub position: Vec3,
}

/// Top-level simulation state.
///
/// Tick order is fixed: input steers the character target, the character
/// eases toward it, ECS systems run, physics integrates and resolves,
/// bound entity positions are synced from their bodies, and finally the
/// camera follows the character. Physics owns the position of any entity
/// bound to a body.
pub struct Simulation {
    world: World,
    physics: PhysicsEngine,
    character: CharacterController,
    camera: CameraController,
    movement_speed: f32,
    /// Entity to physics-body bindings; the body position wins each tick.
    bindings: FxHashMap<EntityId, String>,
    last_time: Option<f64>,
}

impl Simulation {
    pub fn new(config: &SimConfig) -> Self {
        let mut world = World::new();
        world.add_system(Box::new(MovementSystem));
        Self {
            world,
            physics: PhysicsEngine::new(config.physics.gravity),
            character: CharacterController::new(config.movement),
            camera: CameraController::new(config.camera, config.controls),
            movement_speed: config.movement.speed,
            bindings: FxHashMap::default(),
            last_time: None,
        }
    }

    /// Bind an entity's `Position` component to a physics body.
    ///
    /// After every physics step the body position is copied into the
    /// component, overwriting whatever ECS systems wrote there.
    pub fn bind_body(&mut self, entity: EntityId, body_id: impl Into<String>) {
        let body_id = body_id.into();
        debug!("bound {entity} to physics body '{body_id}'");
        self.bindings.insert(entity, body_id);
    }

    pub fn unbind_body(&mut self, entity: EntityId) {
        self.bindings.remove(&entity);
    }

    /// Advance the whole simulation to wall-clock time `now` (seconds).
    pub fn tick(&mut self, now: f64, input: InputSnapshot) {
        // Same clock rule as the ECS world: first tick is zero-length and
        // a backwards clock is treated as no elapsed time.
        let dt = match self.last_time {
            Some(last) => ((now - last).max(0.0)) as f32,
            None => 0.0,
        };
        self.last_time = Some(now);

        if !input.is_neutral() {
            let position = self.character.position();
            // Screen-space up is world -Z from the default camera framing.
            self.character.set_target_position(
                position.x + input.x * self.movement_speed,
                0.0,
                position.z - input.y * self.movement_speed,
            );
        }
        self.character.update();

        self.world.update(now);
        self.physics.update(dt);
        self.sync_bound_positions();

        self.camera.update(self.character.position());
    }

    /// Copy each bound body's position into its entity's `Position`.
    fn sync_bound_positions(&mut self) {
        for (&entity, body_id) in &self.bindings {
            let Some(body) = self.physics.body(body_id) else {
                continue;
            };
            let position = body.position;
            if let Some(component) = self.world.store_mut().position_mut(entity) {
                component.set(position.x, position.y, position.z);
            }
        }
    }

    /// Positions of every entity carrying both a render handle and a
    /// position, for the render layer to consume.
    pub fn render_updates(&self) -> Vec<RenderUpdate> {
        let signature = Signature::of(&[ComponentKind::Position, ComponentKind::Render]);
        self.world
            .entities_with(signature)
            .into_iter()
            .filter_map(|id| {
                let store = self.world.store();
                let handle = store.render_handle(id)?.handle;
                let position = store.position(id)?;
                Some(RenderUpdate {
                    handle,
                    position: position.vec3(),
                })
            })
            .collect()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn physics(&self) -> &PhysicsEngine {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut PhysicsEngine {
        &mut self.physics
    }

    pub fn character(&self) -> &CharacterController {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut CharacterController {
        &mut self.character
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraController {
        &mut self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::position::Position;
    use crate::components::renderhandle::RenderHandle;
    use crate::input::InputSource;
    use crate::physics::PhysicsBody;

    fn neutral() -> InputSnapshot {
        InputSnapshot::default()
    }

    fn forward() -> InputSnapshot {
        InputSnapshot {
            x: 0.0,
            y: 1.0,
            source: InputSource::Keyboard,
        }
    }

    #[test]
    fn test_forward_input_moves_character_minus_z() {
        let mut sim = Simulation::new(&SimConfig::new());
        sim.tick(0.0, forward());
        for i in 1..120 {
            sim.tick(i as f64 / 60.0, forward());
        }
        assert!(sim.character().position().z < 0.0);
        assert_eq!(sim.character().position().x, 0.0);
    }

    #[test]
    fn test_neutral_input_keeps_character_still() {
        let mut sim = Simulation::new(&SimConfig::new());
        for i in 0..10 {
            sim.tick(i as f64 / 60.0, neutral());
        }
        assert_eq!(sim.character().position(), Vec3::ZERO);
    }

    #[test]
    fn test_bound_entity_tracks_physics_body() {
        let mut sim = Simulation::new(&SimConfig::new());
        let entity = sim.world_mut().create_entity();
        sim.world_mut().add_component(entity, Position::default());
        sim.physics_mut()
            .add_body(
                PhysicsBody::new("ball", Vec3::new(0.0, 10.0, 0.0), 0.5)
                    .with_velocity(Vec3::new(1.0, 0.0, 0.0)),
            )
            .unwrap();
        sim.bind_body(entity, "ball");

        sim.tick(0.0, neutral());
        sim.tick(1.0, neutral());

        let body_position = sim.physics().body("ball").unwrap().position;
        let component = *sim.world().store().position(entity).unwrap();
        assert_eq!(component.vec3(), body_position);
        // Gravity pulled the body down, so the sync really happened.
        assert!(component.y < 10.0);
    }

    #[test]
    fn test_render_updates_cover_renderable_entities_only() {
        let mut sim = Simulation::new(&SimConfig::new());
        let renderable = sim.world_mut().create_entity();
        sim.world_mut()
            .add_component(renderable, Position::new(1.0, 2.0, 3.0));
        sim.world_mut()
            .add_component(renderable, RenderHandle::new(7));
        let bare = sim.world_mut().create_entity();
        sim.world_mut().add_component(bare, Position::default());

        let updates = sim.render_updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].handle, 7);
        assert_eq!(updates[0].position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_camera_trails_the_character() {
        let mut sim = Simulation::new(&SimConfig::new());
        for i in 0..600 {
            sim.tick(i as f64 / 60.0, forward());
        }
        let pose = sim.camera().pose();
        let character = sim.character().position();
        assert_eq!(pose.look_at, character + Vec3::new(0.0, 1.0, 0.0));
        // Behind and above in follow mode.
        assert!(pose.position.y > character.y);
        assert!(pose.position.z > character.z);
    }

    #[test]
    fn test_unbind_stops_position_sync() {
        let mut sim = Simulation::new(&SimConfig::new());
        let entity = sim.world_mut().create_entity();
        sim.world_mut().add_component(entity, Position::default());
        sim.physics_mut()
            .add_body(PhysicsBody::new("b", Vec3::new(0.0, 10.0, 0.0), 0.5))
            .unwrap();
        sim.bind_body(entity, "b");
        sim.unbind_body(entity);

        sim.tick(0.0, neutral());
        sim.tick(1.0, neutral());

        assert_eq!(
            sim.world().store().position(entity).unwrap().vec3(),
            Vec3::ZERO
        );
    }
}
