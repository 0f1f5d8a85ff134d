//! Concrete ECS systems.
//!
//! Submodules overview:
//! - [`movement`] – integrate entity positions from velocities and elapsed time

pub mod movement;
