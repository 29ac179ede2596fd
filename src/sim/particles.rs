//! Decorative particles
//!
//! Spawned in bursts, fade at a fixed rate, removed once dead. They never
//! touch gameplay.

use glam::Vec2;
use rand::Rng;

use super::state::Particle;
use crate::tuning::Tuning;

/// Emit `tuning.particle_burst` particles at `pos`, flying in random directions
pub fn spawn_burst<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    pos: Vec2,
    color: u32,
    tuning: &Tuning,
) {
    particles.reserve(tuning.particle_burst);
    for _ in 0..tuning.particle_burst {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(tuning.particle_speed_min..=tuning.particle_speed_max);
        particles.push(Particle {
            pos,
            vel: Vec2::from_angle(angle) * speed,
            life: 1.0,
            color,
        });
    }
}

/// Age and move every particle, dropping the dead ones
pub fn update_particles(particles: &mut Vec<Particle>, decay: f32) {
    for particle in particles.iter_mut() {
        particle.life -= decay;
        particle.pos += particle.vel;
    }
    particles.retain(|p| p.life > 0.0);
}
