//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the simulation world. Components are plain data records with no behavior
//! beyond small invariant-preserving helpers.
//!
//! Submodules overview:
//! - [`position`] – world-space 3D position of an entity
//! - [`velocity`] – linear velocity in world units per second
//! - [`rotation`] – Euler rotation angles in radians
//! - [`renderhandle`] – opaque non-owning reference to a render-layer drawable
//! - [`inputaxis`] – normalized 2D movement intent from an input device
//! - [`collider`] – sphere collider radius and layer tag
//! - [`health`] – current/max health with clamped damage and heal

pub mod collider;
pub mod health;
pub mod inputaxis;
pub mod position;
pub mod renderhandle;
pub mod rotation;
pub mod velocity;
