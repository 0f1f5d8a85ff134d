//! Discrete-step physics engine.
//!
//! Bodies are spheres identified by caller-supplied string keys, independent
//! of the ECS; an entity opts into physics by owning a body and letting the
//! simulation copy the body position back into its `Position` component.
//!
//! Submodules overview:
//! - [`body`] – the [`PhysicsBody`] record and its builder helpers
//! - [`engine`] – integration, pairwise collision resolution, raycasts

pub mod body;
pub mod engine;

pub use body::{CollisionCallback, PhysicsBody};
pub use engine::{PhysicsEngine, PhysicsError, PhysicsStats, RaycastHit};
