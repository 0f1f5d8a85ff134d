//! Input sampling.
//!
//! [`InputState`] accumulates raw key and joystick events between ticks and
//! collapses them into an [`InputSnapshot`], a normalized 2D movement axis
//! plus the source that produced it. The simulation reads one snapshot per
//! tick and never sees individual events.

const DIAGONAL_SCALE: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Keys the simulation cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    pub const COUNT: usize = 8;

    fn index(self) -> usize {
        match self {
            Key::W => 0,
            Key::A => 1,
            Key::S => 2,
            Key::D => 3,
            Key::ArrowUp => 4,
            Key::ArrowDown => 5,
            Key::ArrowLeft => 6,
            Key::ArrowRight => 7,
        }
    }
}

/// Where the current axis values came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Keyboard,
    Touch,
}

/// One tick's worth of movement input.
///
/// `x` is strafe (positive right), `y` is forward (positive away from the
/// camera). Both lie in [-1, 1] and the combined length never exceeds 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub x: f32,
    pub y: f32,
    pub source: InputSource,
}

impl InputSnapshot {
    /// True when no movement is requested this tick.
    pub fn is_neutral(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Event accumulator between ticks.
#[derive(Debug)]
pub struct InputState {
    keys: [bool; Key::COUNT],
    x: f32,
    y: f32,
    source: InputSource,
    enabled: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: [false; Key::COUNT],
            x: 0.0,
            y: 0.0,
            source: InputSource::Keyboard,
            enabled: true,
        }
    }

    pub fn key_down(&mut self, key: Key) {
        if !self.enabled {
            return;
        }
        self.keys[key.index()] = true;
        self.recompute_from_keys();
    }

    pub fn key_up(&mut self, key: Key) {
        if !self.enabled {
            return;
        }
        self.keys[key.index()] = false;
        self.recompute_from_keys();
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys[key.index()]
    }

    /// Feed a virtual joystick deflection; values are clamped to [-1, 1].
    pub fn set_joystick(&mut self, x: f32, y: f32) {
        if !self.enabled {
            return;
        }
        self.x = x.clamp(-1.0, 1.0);
        self.y = y.clamp(-1.0, 1.0);
        self.source = InputSource::Touch;
    }

    /// Release all keys and zero the axes.
    pub fn reset(&mut self) {
        self.keys = [false; Key::COUNT];
        self.x = 0.0;
        self.y = 0.0;
        self.source = InputSource::Keyboard;
    }

    /// Disabling also resets, so a hidden game never keeps a stale axis.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.reset();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            x: self.x,
            y: self.y,
            source: self.source,
        }
    }

    fn recompute_from_keys(&mut self) {
        let mut x = 0.0;
        let mut y = 0.0;
        // Later assignments win, so S beats W and D beats A when opposite
        // keys are held together.
        if self.keys[Key::W.index()] || self.keys[Key::ArrowUp.index()] {
            y = 1.0;
        }
        if self.keys[Key::S.index()] || self.keys[Key::ArrowDown.index()] {
            y = -1.0;
        }
        if self.keys[Key::A.index()] || self.keys[Key::ArrowLeft.index()] {
            x = -1.0;
        }
        if self.keys[Key::D.index()] || self.keys[Key::ArrowRight.index()] {
            x = 1.0;
        }
        if x != 0.0 && y != 0.0 {
            x *= DIAGONAL_SCALE;
            y *= DIAGONAL_SCALE;
        }
        self.x = x;
        self.y = y;
        self.source = InputSource::Keyboard;
    }
}
