//! Wisp Engine headless demo.
//!
//! Drives the simulation core without a renderer: spawns the player and a
//! ring of static obstacles, feeds a synthetic joystick for a fixed number
//! of ticks, and logs positions, camera poses and raycast probes along the
//! way. Useful for smoke-testing tuning values from `config.ini`.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --frames 600
//! ```

use clap::Parser;
use glam::Vec3;
use log::info;
use std::path::PathBuf;

use wispengine::components::collider::Collider;
use wispengine::components::health::Health;
use wispengine::components::position::Position;
use wispengine::components::renderhandle::RenderHandle;
use wispengine::components::rotation::Rotation;
use wispengine::config::SimConfig;
use wispengine::game::Simulation;
use wispengine::input::{InputSnapshot, InputState};
use wispengine::physics::PhysicsBody;

/// Wisp Engine simulation core
#[derive(Parser)]
#[command(version, about = "Headless demo loop for the Wisp Engine simulation core")]
struct Cli {
    /// Path to an INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 300)]
    frames: u32,

    /// Seconds of simulated time per tick.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Seed for obstacle placement.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimConfig::with_path(path),
        None => SimConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    let mut sim = Simulation::new(&config);

    // Player: one entity, one physics body, bound together.
    let player = sim.world_mut().create_entity();
    sim.world_mut().add_component(player, Position::default());
    sim.world_mut().add_component(player, Rotation::default());
    sim.world_mut().add_component(player, RenderHandle::new(1));
    sim.world_mut().add_component(player, Collider::new(0.5));
    sim.world_mut().add_component(player, Health::full(100.0));
    if let Err(e) = sim
        .physics_mut()
        .add_body(PhysicsBody::new("player", Vec3::ZERO, 0.5).with_friction(0.2))
    {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    sim.bind_body(player, "player");

    // A ring of static obstacles scattered around the play area.
    let mut rng = fastrand::Rng::with_seed(cli.seed);
    for i in 0..8u64 {
        let angle = rng.f32() * std::f32::consts::TAU;
        let distance = 8.0 + rng.f32() * 24.0;
        let body = PhysicsBody::new(
            format!("obstacle-{i}"),
            Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance),
            1.0 + rng.f32(),
        )
        .with_static();
        if let Err(e) = sim.physics_mut().add_body(body) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    info!(
        "simulation ready: {} entities, {:?}",
        sim.world().entity_count(),
        sim.physics().stats()
    );

    let mut input = InputState::new();
    for frame in 0..cli.frames {
        // Slowly sweep the joystick in a circle so the demo wanders.
        let sweep = frame as f32 * 0.01;
        input.set_joystick(sweep.cos(), sweep.sin());
        let snapshot: InputSnapshot = input.snapshot();

        sim.tick(frame as f64 * cli.dt, snapshot);

        if frame % 60 == 0 {
            let position = sim.character().position();
            let pose = sim.camera().pose();
            let probe = sim
                .physics()
                .raycast(position, Vec3::new(1.0, 0.0, 0.0), 50.0);
            info!(
                "tick {frame}: character={position:?} camera={:?} probe={probe:?}",
                pose.position
            );
        }
    }

    info!(
        "done after {} ticks: character at {:?}, {:?}",
        cli.frames,
        sim.character().position(),
        sim.physics().stats()
    );
}
