//! Simulation core
//!
//! All gameplay logic lives here:
//! - No fixed timestep: one tick per host frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod apple;
pub mod particles;
pub mod scene;
pub mod snake;
pub mod state;
pub mod tick;

pub use apple::{check_apple, head_touches_apple, spawn_apple};
pub use particles::{spawn_burst, update_particles};
pub use scene::{AppleView, ParticleView, SceneSnapshot, SegmentView, emit_scene, pulse_factor};
pub use snake::Snake;
pub use state::{GameState, Particle, SimStatus, TickOutcome, Viewport};
pub use tick::tick;
