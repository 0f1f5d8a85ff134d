//! Non-owning reference to a render-layer drawable.
//!
//! The render layer allocates, owns, and disposes drawables; the simulation
//! core only associates entity positions with these handles so the renderer
//! can reposition them each frame. The core never dereferences the handle.

/// Opaque handle to a drawable owned by the render layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderHandle {
    pub handle: u64,
}

impl RenderHandle {
    pub fn new(handle: u64) -> Self {
        Self { handle }
    }
}
