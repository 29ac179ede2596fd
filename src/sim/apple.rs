//! Apples: spawning, contact, growth
//!
//! Exactly one apple is live at a time. Eating it awards score, grows the
//! chain from the tail, bursts particles where it stood, and respawns it.

use glam::Vec2;
use rand::Rng;

use super::particles::spawn_burst;
use super::state::{GameState, Viewport};

/// Random apple position inset by `margin` from every edge.
///
/// Ignores the chain: an apple may land on the snake.
pub fn spawn_apple<R: Rng>(rng: &mut R, margin: f32) -> Vec2 {
    let lo = margin;
    let hi = 1.0 - margin;
    Vec2::new(rng.random_range(lo..=hi), rng.random_range(lo..=hi))
}

/// True when the head overlaps the apple (strictly closer than the radii sum)
pub fn head_touches_apple(head: Vec2, apple: Vec2, viewport: Viewport, contact_distance: f32) -> bool {
    viewport.distance(head, apple) < contact_distance
}

/// Check the head against the apple and apply the pickup if they touch.
///
/// Returns whether an apple was eaten this tick.
pub fn check_apple(state: &mut GameState, viewport: Viewport) -> bool {
    let Some(head) = state.snake.head() else {
        return false;
    };
    if !head_touches_apple(head, state.apple, viewport, state.tuning.contact_distance()) {
        return false;
    }

    let eaten_at = state.apple;
    state.score += state.tuning.score_per_apple;
    state.snake.grow(state.tuning.growth_per_apple);
    spawn_burst(
        &mut state.particles,
        &mut state.rng,
        eaten_at,
        state.tuning.apple_color,
        &state.tuning,
    );
    state.apple = spawn_apple(&mut state.rng, state.tuning.spawn_margin);

    log::debug!(
        "Apple eaten at ({:.3}, {:.3}); score {}, length {}, next apple ({:.3}, {:.3})",
        eaten_at.x,
        eaten_at.y,
        state.score,
        state.snake.len(),
        state.apple.x,
        state.apple.y
    );
    true
}
