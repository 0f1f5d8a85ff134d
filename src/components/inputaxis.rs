/// Normalized 2D movement intent from an input device.
///
/// Values are expected in [-1, 1] as produced by the input sampler
/// ([`crate::input::InputState`]); `set` clamps to keep that range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputAxis {
    pub x: f32,
    pub y: f32,
}

impl InputAxis {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x.clamp(-1.0, 1.0);
        self.y = y.clamp(-1.0, 1.0);
    }
}
