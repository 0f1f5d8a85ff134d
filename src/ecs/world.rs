//! Entity/component storage and the per-frame scheduler.
//!
//! [`ComponentStore`] owns every entity record; structural changes (spawn,
//! despawn, attach, detach) are only reachable through the [`World`], which
//! re-evaluates system membership on each change. Systems receive a
//! `&mut ComponentStore` during update and can mutate component data freely,
//! but cannot alter any entity's component set, so working sets stay valid
//! for the whole tick.

use log::debug;
use rustc_hash::FxHashMap;

use crate::components::collider::Collider;
use crate::components::health::Health;
use crate::components::inputaxis::InputAxis;
use crate::components::position::Position;
use crate::components::renderhandle::RenderHandle;
use crate::components::rotation::Rotation;
use crate::components::velocity::Velocity;
use crate::ecs::component::{Component, ComponentKind, Signature};
use crate::ecs::entity::EntityId;
use crate::ecs::system::System;

struct EntityRecord {
    signature: Signature,
    slots: [Option<Component>; ComponentKind::COUNT],
}

impl EntityRecord {
    fn new() -> Self {
        Self {
            signature: Signature::EMPTY,
            slots: std::array::from_fn(|_| None),
        }
    }
}

/// Storage for all entities and their components.
///
/// Handed to systems during [`World::update`]; exposes read and data-mutation
/// accessors only. Operations on unknown entities return `None` and mutating
/// a record's fields never changes its signature.
#[derive(Default)]
pub struct ComponentStore {
    records: FxHashMap<EntityId, EntityRecord>,
    next_id: u32,
}

macro_rules! component_accessors {
    ($get:ident, $get_mut:ident, $variant:ident, $ty:ty) => {
        pub fn $get(&self, id: EntityId) -> Option<&$ty> {
            match self.component(id, ComponentKind::$variant) {
                Some(Component::$variant(c)) => Some(c),
                _ => None,
            }
        }

        pub fn $get_mut(&mut self, id: EntityId) -> Option<&mut $ty> {
            match self.component_mut(id, ComponentKind::$variant) {
                Some(Component::$variant(c)) => Some(c),
                _ => None,
            }
        }
    };
}

impl ComponentStore {
    fn spawn(&mut self) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        self.records.insert(id, EntityRecord::new());
        id
    }

    /// Returns false if the entity was already gone.
    fn despawn(&mut self, id: EntityId) -> bool {
        self.records.remove(&id).is_some()
    }

    /// Attach a component, replacing any existing one of the same kind.
    /// Returns true if the entity's signature changed.
    fn attach(&mut self, id: EntityId, component: Component) -> bool {
        let Some(record) = self.records.get_mut(&id) else {
            return false;
        };
        let kind = component.kind();
        let added = !record.signature.contains(kind);
        record.slots[kind.index()] = Some(component);
        record.signature.insert(kind);
        added
    }

    /// Detach a component. Returns true if the entity's signature changed.
    fn detach(&mut self, id: EntityId, kind: ComponentKind) -> bool {
        let Some(record) = self.records.get_mut(&id) else {
            return false;
        };
        let removed = record.signature.contains(kind);
        record.slots[kind.index()] = None;
        record.signature.remove(kind);
        removed
    }

    fn clear(&mut self) {
        self.records.clear();
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Signature of an entity, or `None` if unknown.
    pub fn signature(&self, id: EntityId) -> Option<Signature> {
        self.records.get(&id).map(|r| r.signature)
    }

    pub fn component(&self, id: EntityId, kind: ComponentKind) -> Option<&Component> {
        self.records
            .get(&id)
            .and_then(|r| r.slots[kind.index()].as_ref())
    }

    pub fn component_mut(&mut self, id: EntityId, kind: ComponentKind) -> Option<&mut Component> {
        self.records
            .get_mut(&id)
            .and_then(|r| r.slots[kind.index()].as_mut())
    }

    component_accessors!(position, position_mut, Position, Position);
    component_accessors!(velocity, velocity_mut, Velocity, Velocity);
    component_accessors!(rotation, rotation_mut, Rotation, Rotation);
    component_accessors!(render_handle, render_handle_mut, Render, RenderHandle);
    component_accessors!(input_axis, input_axis_mut, Input, InputAxis);
    component_accessors!(collider, collider_mut, Collider, Collider);
    component_accessors!(health, health_mut, Health, Health);

    /// Entity ids whose signature is a superset of `signature`, in id order.
    pub fn entities_with(&self, signature: Signature) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .records
            .iter()
            .filter(|(_, r)| r.signature.contains_all(signature))
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }
}

struct SystemSlot {
    system: Box<dyn System>,
    members: Vec<EntityId>,
}

/// Owner of all entities and systems; routes entities into system working
/// sets and drives one update per rendered frame.
///
/// Operations on unknown entities are silent no-ops; a stale id left over
/// from a same-frame removal never raises.
#[derive(Default)]
pub struct World {
    store: ComponentStore,
    systems: Vec<SystemSlot>,
    last_time: Option<f64>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh entity with an empty component set.
    ///
    /// Always succeeds. The entity is immediately evaluated against every
    /// registered system (it only enters working sets with an empty
    /// requirement until components are attached).
    pub fn create_entity(&mut self) -> EntityId {
        let id = self.store.spawn();
        self.refresh_membership(id);
        debug!("created {id}");
        id
    }

    /// Destroy an entity, removing it from every system working set and
    /// dropping its components. Idempotent; unknown ids are a no-op.
    pub fn destroy_entity(&mut self, id: EntityId) {
        if !self.store.despawn(id) {
            return;
        }
        for slot in &mut self.systems {
            slot.members.retain(|&member| member != id);
        }
        debug!("destroyed {id}");
    }

    /// Attach a component to an entity, replacing any existing component of
    /// the same kind. No-op if the entity is unknown.
    pub fn add_component(&mut self, id: EntityId, component: impl Into<Component>) {
        if self.store.attach(id, component.into()) {
            self.refresh_membership(id);
        }
    }

    /// Detach a component from an entity. No-op if the entity is unknown or
    /// does not carry that kind.
    pub fn remove_component(&mut self, id: EntityId, kind: ComponentKind) {
        if self.store.detach(id, kind) {
            self.refresh_membership(id);
        }
    }

    /// Register a system and back-fill its working set with all currently
    /// eligible entities. Systems run in registration order.
    pub fn add_system(&mut self, system: Box<dyn System>) {
        let members = self.store.entities_with(system.signature());
        self.systems.push(SystemSlot { system, members });
    }

    /// Advance every system by the time elapsed since the previous call.
    ///
    /// `now` is the driver's clock in seconds. The first call observes a
    /// delta of exactly zero; a clock that goes backwards is clamped to zero
    /// rather than producing a negative step.
    pub fn update(&mut self, now: f64) {
        let dt = match self.last_time {
            None => 0.0,
            Some(previous) => (now - previous).max(0.0) as f32,
        };
        self.last_time = Some(now);

        // The slots are detached from `self` for the duration of the pass so
        // each system can borrow the store mutably.
        let mut systems = std::mem::take(&mut self.systems);
        for slot in &mut systems {
            slot.system.update(&mut self.store, &slot.members, dt);
        }
        self.systems = systems;
    }

    /// Ad-hoc query: ids of entities carrying at least `signature`.
    pub fn entities_with(&self, signature: Signature) -> Vec<EntityId> {
        self.store.entities_with(signature)
    }

    pub fn store(&self) -> &ComponentStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ComponentStore {
        &mut self.store
    }

    pub fn entity_count(&self) -> usize {
        self.store.len()
    }

    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Remove every entity and system and reset the clock.
    pub fn clear(&mut self) {
        self.store.clear();
        self.systems.clear();
        self.last_time = None;
    }

    fn refresh_membership(&mut self, id: EntityId) {
        let Some(signature) = self.store.signature(id) else {
            return;
        };
        for slot in &mut self.systems {
            let eligible = signature.contains_all(slot.system.signature());
            let position = slot.members.iter().position(|&member| member == id);
            match (eligible, position) {
                (true, None) => slot.members.push(id),
                (false, Some(index)) => {
                    slot.members.remove(index);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Records every update call so tests can observe scheduling decisions.
    struct RecordingSystem {
        name: &'static str,
        signature: Signature,
        log: Rc<RefCell<Vec<(&'static str, Vec<EntityId>, f32)>>>,
    }

    impl System for RecordingSystem {
        fn signature(&self) -> Signature {
            self.signature
        }

        fn update(&mut self, _store: &mut ComponentStore, members: &[EntityId], dt: f32) {
            self.log
                .borrow_mut()
                .push((self.name, members.to_vec(), dt));
        }
    }

    fn recording_world(
        signature: Signature,
    ) -> (World, Rc<RefCell<Vec<(&'static str, Vec<EntityId>, f32)>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut world = World::new();
        world.add_system(Box::new(RecordingSystem {
            name: "recorder",
            signature,
            log: Rc::clone(&log),
        }));
        (world, log)
    }

    const POS_VEL: Signature = Signature::of(&[ComponentKind::Position, ComponentKind::Velocity]);

    #[test]
    fn test_create_entity_assigns_fresh_identities() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        assert_ne!(a, b);
        assert_eq!(world.entity_count(), 2);
    }

    #[test]
    fn test_entity_enters_working_set_when_signature_completes() {
        let (mut world, log) = recording_world(POS_VEL);
        let entity = world.create_entity();
        world.add_component(entity, Position::default());

        world.update(0.0);
        assert_eq!(log.borrow()[0].1, Vec::<EntityId>::new());

        world.add_component(entity, Velocity::default());
        world.update(0.016);
        assert_eq!(log.borrow()[1].1, vec![entity]);
    }

    #[test]
    fn test_entity_leaves_working_set_on_component_removal() {
        let (mut world, log) = recording_world(POS_VEL);
        let entity = world.create_entity();
        world.add_component(entity, Position::default());
        world.add_component(entity, Velocity::default());

        world.remove_component(entity, ComponentKind::Velocity);
        world.update(0.0);
        assert!(log.borrow()[0].1.is_empty());
    }

    #[test]
    fn test_add_system_backfills_existing_entities() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, Position::default());
        world.add_component(entity, Velocity::default());
        let other = world.create_entity();
        world.add_component(other, Position::default());

        let log = Rc::new(RefCell::new(Vec::new()));
        world.add_system(Box::new(RecordingSystem {
            name: "late",
            signature: POS_VEL,
            log: Rc::clone(&log),
        }));
        world.update(0.0);
        assert_eq!(log.borrow()[0].1, vec![entity]);
    }

    #[test]
    fn test_destroy_entity_purges_every_working_set_and_components() {
        let (mut world, log) = recording_world(POS_VEL);
        let entity = world.create_entity();
        world.add_component(entity, Position::default());
        world.add_component(entity, Velocity::default());
        world.add_component(entity, Health::full(10.0));

        world.destroy_entity(entity);
        world.update(0.0);

        assert!(log.borrow()[0].1.is_empty());
        assert!(world.store().position(entity).is_none());
        assert!(world.store().velocity(entity).is_none());
        assert!(world.store().health(entity).is_none());
        assert!(world.store().signature(entity).is_none());
    }

    #[test]
    fn test_destroy_entity_is_idempotent() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.destroy_entity(entity);
        world.destroy_entity(entity); // second call must be a no-op
        assert_eq!(world.entity_count(), 0);
    }

    #[test]
    fn test_operations_on_unknown_entity_are_noops() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.destroy_entity(entity);

        world.add_component(entity, Position::new(1.0, 2.0, 3.0));
        world.remove_component(entity, ComponentKind::Position);
        assert!(world.store().position(entity).is_none());
    }

    #[test]
    fn test_first_update_has_zero_delta() {
        let (mut world, log) = recording_world(Signature::EMPTY);
        world.update(123.5);
        world.update(124.0);
        let log = log.borrow();
        assert!(approx_eq(log[0].2, 0.0));
        assert!(approx_eq(log[1].2, 0.5));
    }

    #[test]
    fn test_backwards_clock_clamps_delta_to_zero() {
        let (mut world, log) = recording_world(Signature::EMPTY);
        world.update(10.0);
        world.update(9.0);
        assert!(approx_eq(log.borrow()[1].2, 0.0));
    }

    #[test]
    fn test_systems_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut world = World::new();
        for name in ["first", "second", "third"] {
            world.add_system(Box::new(RecordingSystem {
                name,
                signature: Signature::EMPTY,
                log: Rc::clone(&log),
            }));
        }
        world.update(0.0);
        let order: Vec<&str> = log.borrow().iter().map(|entry| entry.0).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_replacing_component_keeps_membership() {
        let (mut world, log) = recording_world(POS_VEL);
        let entity = world.create_entity();
        world.add_component(entity, Position::default());
        world.add_component(entity, Velocity::default());
        world.add_component(entity, Position::new(5.0, 0.0, 0.0));

        world.update(0.0);
        assert_eq!(log.borrow()[0].1, vec![entity]);
        assert!(approx_eq(world.store().position(entity).unwrap().x, 5.0));
    }

    #[test]
    fn test_entities_with_filters_by_signature() {
        let mut world = World::new();
        let moving = world.create_entity();
        world.add_component(moving, Position::default());
        world.add_component(moving, Velocity::default());
        let still = world.create_entity();
        world.add_component(still, Position::default());

        let found = world.entities_with(POS_VEL);
        assert_eq!(found, vec![moving]);
        let all = world.entities_with(Signature::of(&[ComponentKind::Position]));
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_clear_resets_world_and_clock() {
        let (mut world, log) = recording_world(Signature::EMPTY);
        world.create_entity();
        world.update(50.0);
        world.clear();
        assert_eq!(world.entity_count(), 0);
        assert_eq!(world.system_count(), 0);

        // Clock restarts: the next update after re-registering sees dt 0.
        let log2 = Rc::clone(&log);
        world.add_system(Box::new(RecordingSystem {
            name: "after-clear",
            signature: Signature::EMPTY,
            log: log2,
        }));
        world.update(60.0);
        assert!(approx_eq(log.borrow().last().unwrap().2, 0.0));
    }
}
