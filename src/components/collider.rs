/// Sphere collider tag for an entity.
///
/// The layer is a free-form name used by game logic to group colliders
/// (e.g. "player", "pickup"). Narrow-phase collision itself lives in
/// [`crate::physics`]; this component only declares intent and size.
#[derive(Clone, Debug, PartialEq)]
pub struct Collider {
    pub radius: f32,
    pub layer: String,
}

impl Collider {
    /// Create a collider on the default layer.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            layer: String::from("default"),
        }
    }

    /// Move the collider to a named layer.
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_layer() {
        let collider = Collider::new(1.5);
        assert_eq!(collider.radius, 1.5);
        assert_eq!(collider.layer, "default");
    }

    #[test]
    fn test_with_layer() {
        let collider = Collider::new(0.5).with_layer("player");
        assert_eq!(collider.layer, "player");
    }
}
