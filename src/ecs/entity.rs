/// Opaque entity identity.
///
/// Unique within the [`World`](crate::ecs::World) that created it and stable
/// for the entity's whole lifetime; the attached component set may change,
/// the identity never does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw numeric value, for logging and diagnostics only.
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}
