//! Entity-component-system scheduler.
//!
//! Identity ([`EntityId`]), data ([`Component`] records tagged by
//! [`ComponentKind`]), and behavior ([`System`]) are kept strictly separate.
//! The [`World`] owns all entities and registered systems and routes entities
//! into system working sets by comparing bitmask [`Signature`]s, so membership
//! re-evaluation on a component change is a couple of bit operations per
//! system rather than a type lookup.
//!
//! Submodules overview:
//! - [`entity`] – opaque entity identity
//! - [`component`] – component tagging, signatures, and the tagged union
//! - [`system`] – the [`System`] trait implemented by concrete systems
//! - [`world`] – entity/component storage and the per-frame scheduler

pub mod component;
pub mod entity;
pub mod system;
pub mod world;

pub use component::{Component, ComponentKind, Signature};
pub use entity::EntityId;
pub use system::System;
pub use world::{ComponentStore, World};
