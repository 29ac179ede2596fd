//! Browser facade
//!
//! Thin `wasm-bindgen` wrapper so a JS host can drive the simulation from
//! `requestAnimationFrame` and feed it pointer or hand-tracking positions.

use wasm_bindgen::prelude::*;

use crate::sim::{GameState, SimStatus, TickOutcome, Viewport};

#[wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
}

/// One simulation instance owned by the JS host
#[wasm_bindgen]
pub struct SnakeGame {
    state: GameState,
}

#[wasm_bindgen]
impl SnakeGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> SnakeGame {
        SnakeGame {
            state: GameState::new(seed),
        }
    }

    /// Build from a JSON tuning document
    pub fn with_tuning(seed: u64, tuning_json: &str) -> Result<SnakeGame, JsValue> {
        let tuning = crate::Tuning::from_json(tuning_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let state = GameState::with_tuning(seed, tuning)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(SnakeGame { state })
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        self.state.set_target(x, y);
    }

    pub fn start(&mut self) {
        self.state.start();
    }

    pub fn stop(&mut self) {
        self.state.stop();
    }

    /// Advance one frame. Returns true when an apple was eaten.
    pub fn tick(&mut self, width: f32, height: f32) -> Result<bool, JsValue> {
        match self.state.tick(Viewport::new(width, height)) {
            Ok(TickOutcome::Advanced { apple_eaten }) => Ok(apple_eaten),
            Ok(_) => Ok(false),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }

    pub fn score(&self) -> u64 {
        self.state.score()
    }

    pub fn is_active(&self) -> bool {
        self.state.status() == SimStatus::Active
    }

    /// Scene snapshot as JSON
    pub fn scene_json(&self, width: f32, height: f32) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.emit_scene(width, height))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
