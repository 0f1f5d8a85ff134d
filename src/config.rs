//! Simulation configuration.
//!
//! Manages tuning values loaded from an INI configuration file. Provides
//! defaults for safe startup; missing keys keep their defaults so a partial
//! file is always valid.
//!
//! # Configuration File Format
//!
//! ```ini
//! [movement]
//! speed = 0.12
//! max_distance = 96.0
//! interpolation = 0.08
//! rotation_speed = 0.1
//!
//! [camera]
//! fov = 60.0
//! follow_interpolation = 0.05
//! free_distance = 15.0
//!
//! [physics]
//! gravity_y = -9.8
//!
//! [controls]
//! mouse_sensitivity = 0.005
//! ```

use configparser::ini::Ini;
use glam::Vec3;
use log::info;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config file: {0}")]
    Load(String),
}

/// Character movement tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementConfig {
    /// Target displacement per tick of full joystick deflection, in units.
    pub speed: f32,
    /// Radius of the circular play area around the origin.
    pub max_distance: f32,
    /// Per-tick position smoothing factor in (0, 1].
    pub interpolation: f32,
    /// Per-tick facing smoothing factor in (0, 1].
    pub rotation_speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 0.12,
            max_distance: 96.0,
            interpolation: 0.08,
            rotation_speed: 0.1,
        }
    }
}

/// Camera rig tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Offset from the tracked point in follow mode.
    pub follow_offset: Vec3,
    /// Per-tick smoothing factor for follow mode.
    pub follow_interpolation: f32,
    /// Initial azimuth for free orbit, in radians.
    pub free_theta: f32,
    /// Initial polar angle for free orbit, in radians.
    pub free_phi: f32,
    pub free_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Per-tick smoothing factor for free orbit.
    pub free_interpolation: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 60.0,
            near: 0.1,
            far: 1000.0,
            follow_offset: Vec3::new(0.0, 6.0, 10.0),
            follow_interpolation: 0.05,
            free_theta: 0.0,
            free_phi: std::f32::consts::FRAC_PI_4,
            free_distance: 15.0,
            min_distance: 5.0,
            max_distance: 30.0,
            free_interpolation: 0.1,
        }
    }
}

/// Physics world tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    pub gravity: Vec3,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.8, 0.0),
        }
    }
}

/// Pointer and touch gesture tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlsConfig {
    /// Radians of orbit per pixel of mouse drag.
    pub mouse_sensitivity: f32,
    /// Radians of orbit per pixel of one-finger drag.
    pub touch_sensitivity: f32,
    /// Distance change per wheel delta unit.
    pub zoom_sensitivity: f32,
    /// Distance change per pixel of pinch spread.
    pub pinch_sensitivity: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.005,
            touch_sensitivity: 0.005,
            zoom_sensitivity: 0.01,
            pinch_sensitivity: 0.05,
        }
    }
}

/// Top-level simulation configuration.
///
/// Built from defaults, then optionally overlaid from an INI file with
/// [`load_from_file`](SimConfig::load_from_file).
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub movement: MovementConfig,
    pub camera: CameraConfig,
    pub physics: PhysicsConfig,
    pub controls: ControlsConfig,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            movement: MovementConfig::default(),
            camera: CameraConfig::default(),
            physics: PhysicsConfig::default(),
            controls: ControlsConfig::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(ConfigError::Load)?;

        let getf = |config: &Ini, section: &str, key: &str| -> Option<f32> {
            config.getfloat(section, key).ok().flatten().map(|v| v as f32)
        };

        // [movement] section
        if let Some(speed) = getf(&config, "movement", "speed") {
            self.movement.speed = speed;
        }
        if let Some(max_distance) = getf(&config, "movement", "max_distance") {
            self.movement.max_distance = max_distance;
        }
        if let Some(interpolation) = getf(&config, "movement", "interpolation") {
            self.movement.interpolation = interpolation;
        }
        if let Some(rotation_speed) = getf(&config, "movement", "rotation_speed") {
            self.movement.rotation_speed = rotation_speed;
        }

        // [camera] section
        if let Some(fov) = getf(&config, "camera", "fov") {
            self.camera.fov = fov;
        }
        if let Some(near) = getf(&config, "camera", "near") {
            self.camera.near = near;
        }
        if let Some(far) = getf(&config, "camera", "far") {
            self.camera.far = far;
        }
        if let Some(v) = getf(&config, "camera", "follow_offset_y") {
            self.camera.follow_offset.y = v;
        }
        if let Some(v) = getf(&config, "camera", "follow_offset_z") {
            self.camera.follow_offset.z = v;
        }
        if let Some(v) = getf(&config, "camera", "follow_interpolation") {
            self.camera.follow_interpolation = v;
        }
        if let Some(v) = getf(&config, "camera", "free_distance") {
            self.camera.free_distance = v;
        }
        if let Some(v) = getf(&config, "camera", "min_distance") {
            self.camera.min_distance = v;
        }
        if let Some(v) = getf(&config, "camera", "max_distance") {
            self.camera.max_distance = v;
        }
        if let Some(v) = getf(&config, "camera", "free_interpolation") {
            self.camera.free_interpolation = v;
        }

        // [physics] section
        if let Some(x) = getf(&config, "physics", "gravity_x") {
            self.physics.gravity.x = x;
        }
        if let Some(y) = getf(&config, "physics", "gravity_y") {
            self.physics.gravity.y = y;
        }
        if let Some(z) = getf(&config, "physics", "gravity_z") {
            self.physics.gravity.z = z;
        }

        // [controls] section
        if let Some(v) = getf(&config, "controls", "mouse_sensitivity") {
            self.controls.mouse_sensitivity = v;
        }
        if let Some(v) = getf(&config, "controls", "touch_sensitivity") {
            self.controls.touch_sensitivity = v;
        }
        if let Some(v) = getf(&config, "controls", "zoom_sensitivity") {
            self.controls.zoom_sensitivity = v;
        }
        if let Some(v) = getf(&config, "controls", "pinch_sensitivity") {
            self.controls.pinch_sensitivity = v;
        }

        info!(
            "Loaded config: speed={}, max_distance={}, fov={}, gravity={:?}",
            self.movement.speed, self.movement.max_distance, self.camera.fov, self.physics.gravity
        );

        Ok(())
    }
}
