//! Scene snapshot for the renderer
//!
//! A read-only projection of the game state. Positions stay normalized; radii
//! are in pixels. The renderer decides how to draw it.

use glam::Vec2;
use serde::Serialize;

use super::state::{GameState, SimStatus, Viewport};
use crate::angle_to;

/// One body segment
#[derive(Debug, Clone, Serialize)]
pub struct SegmentView {
    pub pos: Vec2,
    /// `index / len`, 0 at the head
    pub progress: f32,
    /// Pixels
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppleView {
    pub pos: Vec2,
    /// Base radius times the pulse factor (pixels)
    pub radius: f32,
    pub pulse: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    /// 0xRRGGBB
    pub color: u32,
    /// Equal to remaining life
    pub alpha: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub status: SimStatus,
    pub viewport: Viewport,
    pub score: u64,
    pub segments: Vec<SegmentView>,
    pub apple: Option<AppleView>,
    pub particles: Vec<ParticleView>,
    /// Eye direction (radians) from the head toward the apple
    pub gaze: Option<f32>,
}

/// Apple pulsation factor at a given tick
pub fn pulse_factor(time_ticks: u64, rate: f32, amplitude: f32) -> f32 {
    1.0 + amplitude * (time_ticks as f32 * rate).sin()
}

/// Project the state into a renderable snapshot
pub fn emit_scene(state: &GameState, viewport: Viewport) -> SceneSnapshot {
    let tuning = &state.tuning;
    let len = state.snake.len();
    let taper_span = (len.max(2) - 1) as f32;

    let segments = state
        .snake
        .segments
        .iter()
        .enumerate()
        .map(|(i, &pos)| SegmentView {
            pos,
            progress: i as f32 / len as f32,
            radius: tuning.head_radius
                + (tuning.tail_radius - tuning.head_radius) * (i as f32 / taper_span),
        })
        .collect();

    let apple = state.is_active().then(|| {
        let pulse = pulse_factor(state.time_ticks, tuning.pulse_rate, tuning.pulse_amplitude);
        AppleView {
            pos: state.apple,
            radius: tuning.apple_radius * pulse,
            pulse,
        }
    });

    let particles = state
        .particles
        .iter()
        .map(|p| ParticleView {
            pos: p.pos,
            color: p.color,
            alpha: p.life.clamp(0.0, 1.0),
        })
        .collect();

    let gaze = state
        .snake
        .head()
        .map(|head| gaze_angle(head, state.apple));

    SceneSnapshot {
        status: state.status,
        viewport,
        score: state.score,
        segments,
        apple,
        particles,
        gaze,
    }
}

/// Direction from head to apple, straight `atan2` in normalized space
pub fn gaze_angle(head: Vec2, apple: Vec2) -> f32 {
    angle_to(head, apple)
}

impl GameState {
    /// Snapshot for the renderer; callable every frame regardless of status
    pub fn emit_scene(&self, width: f32, height: f32) -> SceneSnapshot {
        emit_scene(self, Viewport::new(width, height))
    }
}
