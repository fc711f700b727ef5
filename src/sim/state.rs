//! Simulation state
//!
//! The live balls, the drag flag and the RNG that colors new balls.

use std::collections::VecDeque;

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::color::derive_color;
use super::particle::Particle;
use crate::settings::{Boundary, Settings};

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    pub settings: Settings,
    pub boundary: Boundary,
    /// Live balls, oldest at the front
    pub particles: VecDeque<Particle>,
    /// Primary pointer button held
    pub dragging: bool,
    rng: Pcg32,
}

impl SimState {
    /// Create an empty simulation with the given seed
    pub fn new(settings: Settings, boundary: Boundary, seed: u64) -> Self {
        let particles = VecDeque::with_capacity(settings.capacity + settings.ray_count as usize);
        Self {
            settings,
            boundary,
            particles,
            dragging: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Emit a fan of balls at `pos` with evenly spaced headings.
    ///
    /// Each ball's color is chained from the newest ball already in the
    /// collection. Returns the number of old balls evicted to stay within
    /// capacity.
    pub fn spawn_fan(&mut self, pos: DVec2) -> usize {
        let step = self.settings.ray_step_degrees();
        for i in 0..self.settings.ray_count {
            let mut ball = Particle::new(pos, i as f64 * step, self.settings.speed);
            ball.color = derive_color(
                self.particles.back().map(|p| &p.color),
                self.settings.smooth_colors,
                &mut self.rng,
            );
            self.particles.push_back(ball);
        }
        self.evict_oldest()
    }

    /// Drop balls from the front until within capacity
    fn evict_oldest(&mut self) -> usize {
        let mut evicted = 0;
        while self.particles.len() > self.settings.capacity {
            self.particles.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Remove every ball. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.particles.len();
        self.particles.clear();
        removed
    }
}
