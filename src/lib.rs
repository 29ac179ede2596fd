//! Apple Chase - a snake that chases a pointer (or a tracked hand) and eats apples
//!
//! Core modules:
//! - `sim`: Simulation core (chain solver, apples, particles, tick driver, scene)
//! - `input`: Latest-value target channel shared with the input collaborator
//! - `tuning`: Data-driven game balance
//! - `error`: Crate error types
//!
//! All simulation positions are normalized to [0,1]x[0,1]. Distances are
//! measured in pixels using the viewport size passed to each call.

pub mod error;
pub mod input;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::SimError;
pub use input::{TargetSlot, TargetSource};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (design values, mirrored by `Tuning::default`)
pub mod consts {
    /// Head pursuit blend factor per tick
    pub const FOLLOW_ALPHA: f32 = 0.5;
    /// Maximum pixel distance between adjacent segments
    pub const SEGMENT_GAP: f32 = 10.0;

    /// Head radius in pixels
    pub const HEAD_RADIUS: f32 = 18.0;
    /// Radius of the last body segment in pixels
    pub const TAIL_RADIUS: f32 = 8.0;
    /// Apple radius in pixels
    pub const APPLE_RADIUS: f32 = 16.0;

    /// Segments in a freshly started chain
    pub const INITIAL_LENGTH: usize = 10;
    /// Segments appended per apple
    pub const GROWTH_PER_APPLE: usize = 5;
    /// Score awarded per apple
    pub const SCORE_PER_APPLE: u64 = 10;
    /// Apples never spawn closer than this to a viewport edge (normalized)
    pub const SPAWN_MARGIN: f32 = 0.05;

    /// Particles emitted per apple
    pub const PARTICLE_BURST: usize = 12;
    /// Life lost per tick
    pub const PARTICLE_DECAY: f32 = 0.04;
    /// Particle speed range (normalized units per tick)
    pub const PARTICLE_SPEED_MIN: f32 = 0.002;
    pub const PARTICLE_SPEED_MAX: f32 = 0.008;
    /// Burst color for eaten apples (0xRRGGBB)
    pub const APPLE_COLOR: u32 = 0xff4d4d;

    /// Apple pulsation: phase advance per tick and radius amplitude
    pub const PULSE_RATE: f32 = 0.1;
    pub const PULSE_AMPLITUDE: f32 = 0.1;
}

/// Linear interpolation between two normalized points
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Convert a normalized point to pixel space
#[inline]
pub fn to_pixels(p: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(p.x * width, p.y * height)
}

/// Convert a pixel-space point back to normalized space
///
/// Callers must ensure the viewport is non-degenerate.
#[inline]
pub fn to_normalized(p: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(p.x / width, p.y / height)
}

/// Pixel distance between two normalized points
#[inline]
pub fn pixel_distance(a: Vec2, b: Vec2, width: f32, height: f32) -> f32 {
    to_pixels(a, width, height).distance(to_pixels(b, width, height))
}

/// Angle (radians, atan2 convention) of the direction from `from` to `to`
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}
