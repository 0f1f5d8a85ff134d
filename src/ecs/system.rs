use crate::ecs::component::Signature;
use crate::ecs::entity::EntityId;
use crate::ecs::world::ComponentStore;

/// Per-frame logic keyed by a required component signature.
///
/// The [`World`](crate::ecs::World) maintains each system's working set: the
/// entities whose component signature is a superset of
/// [`System::signature`]. `update` receives only that working set and must
/// not reach for entities outside it.
pub trait System {
    /// Component kinds an entity must carry to enter this system's working
    /// set. Fixed for the lifetime of the system.
    fn signature(&self) -> Signature;

    /// Advance this system by `dt` seconds over its working set.
    ///
    /// `members` is owned by the world; component data is read and mutated
    /// through `store`, which cannot change any entity's component set.
    fn update(&mut self, store: &mut ComponentStore, members: &[EntityId], dt: f32);
}
