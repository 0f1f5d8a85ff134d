//! Wisp Engine library.
//!
//! Real-time simulation core for a third-person 3D exploration game:
//! a bitmask-signature ECS, a sphere physics engine, smoothed character
//! and camera controllers, input snapshotting, and INI configuration.
//! Rendering and platform I/O live outside this crate; the host drives
//! [`game::Simulation::tick`] with timestamps and input snapshots and
//! reads back poses and render updates.

pub mod camera;
pub mod character;
pub mod components;
pub mod config;
pub mod ecs;
pub mod game;
pub mod input;
pub mod physics;
pub mod systems;
