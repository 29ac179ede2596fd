//! Apple Chase headless demo
//!
//! Drives the simulation with a scripted circular target on a background
//! thread, the way a pointer or hand tracker would, and logs progress.
//! Pass a tuning JSON path as the first argument to override the defaults.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::Duration;

    use apple_chase::sim::{GameState, TickOutcome, Viewport};
    use apple_chase::{TargetSlot, Tuning};

    env_logger::init();
    log::info!("Apple Chase (headless) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Could not load tuning from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    const TICKS: u32 = 600;
    let viewport = Viewport::new(800.0, 600.0);
    let slot = TargetSlot::new();

    // Input collaborator: writes whenever it likes, no synchronization with ticks
    let writer = slot.clone();
    let tracker = std::thread::spawn(move || {
        for i in 0..TICKS * 2 {
            let t = i as f32 * 0.02;
            writer.set(0.5 + 0.35 * t.cos(), 0.5 + 0.35 * (t * 1.3).sin());
            std::thread::sleep(Duration::from_micros(500));
        }
    });

    let mut state = match GameState::with_tuning(42, tuning) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Rejected tuning: {}", e);
            std::process::exit(1);
        }
    };
    state.poll_target(&slot);
    state.start();

    for frame in 0..TICKS {
        state.poll_target(&slot);
        match state.tick(viewport) {
            Ok(TickOutcome::Advanced { apple_eaten: true }) => {
                log::info!(
                    "frame {}: apple! score {}, length {}",
                    frame,
                    state.score(),
                    state.snake.len()
                );
            }
            Ok(_) => {}
            Err(e) => {
                log::error!("Simulation fault: {}", e);
                std::process::exit(1);
            }
        }
        let scene = state.emit_scene(viewport.width, viewport.height);
        log::trace!("frame {}: {} particles", frame, scene.particles.len());
        std::thread::sleep(Duration::from_millis(1));
    }

    state.stop();
    if tracker.join().is_err() {
        log::warn!("Target thread panicked");
    }
    log::info!("Final score: {}", state.score());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_init, this is just to satisfy the compiler
}
