//! Component tagging and signatures.
//!
//! Each built-in component type has a [`ComponentKind`] tag; a [`Signature`]
//! is a bitmask over those tags. Systems declare the signature they require
//! and the world compares entity signatures against it with plain bit ops.

use crate::components::collider::Collider;
use crate::components::health::Health;
use crate::components::inputaxis::InputAxis;
use crate::components::position::Position;
use crate::components::renderhandle::RenderHandle;
use crate::components::rotation::Rotation;
use crate::components::velocity::Velocity;

/// Tag identifying a built-in component type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ComponentKind {
    Position,
    Velocity,
    Rotation,
    Render,
    Input,
    Collider,
    Health,
}

impl ComponentKind {
    /// Number of component kinds; sizes the per-entity slot array.
    pub const COUNT: usize = 7;

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    const fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

/// Bitmask over [`ComponentKind`]s.
///
/// An entity's signature holds one bit per attached component type; a
/// system's signature holds one bit per required type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Signature(u32);

impl Signature {
    pub const EMPTY: Self = Self(0);

    /// Build a signature from a list of kinds.
    pub const fn of(kinds: &[ComponentKind]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < kinds.len() {
            bits |= kinds[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub fn insert(&mut self, kind: ComponentKind) {
        self.0 |= kind.bit();
    }

    pub fn remove(&mut self, kind: ComponentKind) {
        self.0 &= !kind.bit();
    }

    pub const fn contains(self, kind: ComponentKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// True if every kind in `required` is present in `self`.
    pub const fn contains_all(self, required: Signature) -> bool {
        self.0 & required.0 == required.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Tagged union carrying one component record.
#[derive(Clone, Debug)]
pub enum Component {
    Position(Position),
    Velocity(Velocity),
    Rotation(Rotation),
    Render(RenderHandle),
    Input(InputAxis),
    Collider(Collider),
    Health(Health),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Position(_) => ComponentKind::Position,
            Component::Velocity(_) => ComponentKind::Velocity,
            Component::Rotation(_) => ComponentKind::Rotation,
            Component::Render(_) => ComponentKind::Render,
            Component::Input(_) => ComponentKind::Input,
            Component::Collider(_) => ComponentKind::Collider,
            Component::Health(_) => ComponentKind::Health,
        }
    }
}

impl From<Position> for Component {
    fn from(c: Position) -> Self {
        Component::Position(c)
    }
}

impl From<Velocity> for Component {
    fn from(c: Velocity) -> Self {
        Component::Velocity(c)
    }
}

impl From<Rotation> for Component {
    fn from(c: Rotation) -> Self {
        Component::Rotation(c)
    }
}

impl From<RenderHandle> for Component {
    fn from(c: RenderHandle) -> Self {
        Component::Render(c)
    }
}

impl From<InputAxis> for Component {
    fn from(c: InputAxis) -> Self {
        Component::Input(c)
    }
}

impl From<Collider> for Component {
    fn from(c: Collider) -> Self {
        Component::Collider(c)
    }
}

impl From<Health> for Component {
    fn from(c: Health) -> Self {
        Component::Health(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_of_kinds() {
        let sig = Signature::of(&[ComponentKind::Position, ComponentKind::Velocity]);
        assert!(sig.contains(ComponentKind::Position));
        assert!(sig.contains(ComponentKind::Velocity));
        assert!(!sig.contains(ComponentKind::Health));
    }

    #[test]
    fn test_signature_insert_remove() {
        let mut sig = Signature::EMPTY;
        assert!(sig.is_empty());
        sig.insert(ComponentKind::Collider);
        assert!(sig.contains(ComponentKind::Collider));
        sig.remove(ComponentKind::Collider);
        assert!(sig.is_empty());
    }

    #[test]
    fn test_contains_all_is_superset_check() {
        let entity = Signature::of(&[
            ComponentKind::Position,
            ComponentKind::Velocity,
            ComponentKind::Render,
        ]);
        let required = Signature::of(&[ComponentKind::Position, ComponentKind::Velocity]);
        assert!(entity.contains_all(required));
        assert!(!required.contains_all(entity));
        // Every signature is a superset of the empty one.
        assert!(Signature::EMPTY.contains_all(Signature::EMPTY));
        assert!(entity.contains_all(Signature::EMPTY));
    }

    #[test]
    fn test_component_kind_round_trip() {
        let component = Component::from(Position::new(1.0, 2.0, 3.0));
        assert_eq!(component.kind(), ComponentKind::Position);
        let component = Component::from(Health::full(10.0));
        assert_eq!(component.kind(), ComponentKind::Health);
    }
}
