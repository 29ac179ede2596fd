//! Game state and core simulation types
//!
//! One `GameState` owns everything the simulation mutates. Subsystems borrow
//! it exclusively, one after another, inside a tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::apple::spawn_apple;
use super::snake::Snake;
use crate::error::SimError;
use crate::input::TargetSource;
use crate::tuning::Tuning;

/// Whether the simulation is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimStatus {
    /// Chain is empty, ticks do nothing
    #[default]
    Idle,
    /// Chain is alive and chasing the target
    Active,
}

/// Viewport size in pixels, supplied by the host on every call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when pixel/normalized conversions would divide by zero or yield NaN
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    /// Normalized point to pixel space
    #[inline]
    pub fn to_pixels(&self, p: Vec2) -> Vec2 {
        crate::to_pixels(p, self.width, self.height)
    }

    /// Pixel point to normalized space
    #[inline]
    pub fn to_normalized(&self, p: Vec2) -> Vec2 {
        crate::to_normalized(p, self.width, self.height)
    }

    /// Pixel distance between two normalized points
    #[inline]
    pub fn distance(&self, a: Vec2, b: Vec2) -> f32 {
        crate::pixel_distance(a, b, self.width, self.height)
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Normalized position
    pub pos: Vec2,
    /// Normalized displacement per tick
    pub vel: Vec2,
    /// 0-1, decreases every tick
    pub life: f32,
    /// 0xRRGGBB
    pub color: u32,
}

/// What a call to `tick` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Simulation is idle, nothing ran
    Idle,
    /// Viewport had zero area, tick skipped to keep NaN out of the chain
    Skipped,
    /// Physics ran
    Advanced { apple_eaten: bool },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub status: SimStatus,
    /// Score of the current (or last) run
    pub score: u64,
    /// Active ticks since the last start
    pub time_ticks: u64,
    /// Pursuit goal, written by the input collaborator
    pub target: Vec2,
    pub snake: Snake,
    /// The single live apple (normalized center)
    pub apple: Vec2,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create an idle simulation with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create an idle simulation with custom tuning, rejecting invalid values
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, SimError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            tuning,
            status: SimStatus::Idle,
            score: 0,
            time_ticks: 0,
            target: Vec2::splat(0.5),
            snake: Snake::default(),
            apple: Vec2::splat(0.5),
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start (or restart) a run: collapsed chain at the target, fresh apple
    pub fn start(&mut self) {
        self.score = 0;
        self.time_ticks = 0;
        self.snake = Snake::collapsed(self.target, self.tuning.initial_length);
        self.particles.clear();
        self.apple = spawn_apple(&mut self.rng, self.tuning.spawn_margin);
        self.status = SimStatus::Active;
        log::info!(
            "Run started: {} segments at ({:.3}, {:.3})",
            self.snake.len(),
            self.target.x,
            self.target.y
        );
    }

    /// Alias of `start`, for hosts that expose a restart button
    pub fn reset(&mut self) {
        self.start();
    }

    /// Stop the run. Score is kept for display. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if self.status == SimStatus::Active {
            log::info!("Run stopped with score {}", self.score);
        }
        self.snake.clear();
        self.particles.clear();
        self.status = SimStatus::Idle;
    }

    /// Overwrite the pursuit target. Coordinates are clamped to [0,1];
    /// non-finite values are ignored.
    pub fn set_target(&mut self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            log::warn!("Ignoring non-finite target ({}, {})", x, y);
            return;
        }
        self.target = Vec2::new(x.clamp(0.0, 1.0), y.clamp(0.0, 1.0));
    }

    /// Pull the latest target from an input collaborator, if it has one
    pub fn poll_target(&mut self, source: &impl TargetSource) {
        if let Some(t) = source.latest_target() {
            self.set_target(t.x, t.y);
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn status(&self) -> SimStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == SimStatus::Active
    }
}
