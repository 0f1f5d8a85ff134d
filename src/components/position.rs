//! World-space position component.

use glam::Vec3;

/// World-space position of an entity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn vec3(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec3> for Position {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_all_axes() {
        let mut pos = Position::new(1.0, 2.0, 3.0);
        pos.set(4.0, 5.0, 6.0);
        assert_eq!(pos, Position::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_vec3_round_trip() {
        let pos = Position::from(Vec3::new(1.5, -2.0, 0.25));
        assert_eq!(pos.vec3(), Vec3::new(1.5, -2.0, 0.25));
    }
}
