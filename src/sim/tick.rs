//! Per-frame simulation tick
//!
//! Runs once per host frame, with no fixed timestep and no sub-stepping:
//! chain solver, then apple contact, then particles.

use super::apple::check_apple;
use super::particles::update_particles;
use super::state::{GameState, SimStatus, TickOutcome, Viewport};
use crate::error::SimError;

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, viewport: Viewport) -> Result<TickOutcome, SimError> {
    if state.status == SimStatus::Idle {
        return Ok(TickOutcome::Idle);
    }

    if viewport.is_degenerate() {
        log::warn!(
            "Skipping tick for degenerate viewport {}x{}",
            viewport.width,
            viewport.height
        );
        return Ok(TickOutcome::Skipped);
    }

    if state.snake.is_empty() {
        return Err(SimError::EmptyChainWhileActive);
    }

    state.time_ticks += 1;

    let tuning = &state.tuning;
    state
        .snake
        .step(state.target, viewport, tuning.follow_alpha, tuning.segment_gap);

    let apple_eaten = check_apple(state, viewport);

    update_particles(&mut state.particles, state.tuning.particle_decay);

    Ok(TickOutcome::Advanced { apple_eaten })
}

impl GameState {
    /// Method form of [`tick`]
    pub fn tick(&mut self, viewport: Viewport) -> Result<TickOutcome, SimError> {
        tick(self, viewport)
    }
}
