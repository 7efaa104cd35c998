// Fixed-size ambient particle field with elastic boundary reflection.
//
// The field owns its particles exclusively: nothing else mutates them.
// Positions stay inside the viewport after every tick; radius and opacity
// are fixed at creation.

use crate::constants::{OPACITY_MAX, OPACITY_MIN, RADIUS_MAX, RADIUS_MIN, VELOCITY_HALF_RANGE};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Generate `count` particles: uniform position inside the viewport,
    /// per-axis velocity in ±[`VELOCITY_HALF_RANGE`], radius in
    /// [`RADIUS_MIN`, `RADIUS_MAX`], opacity in [`OPACITY_MIN`,
    /// `OPACITY_MAX`]. Ids run 0..count. Constructing a new field is the
    /// only way to replace the set.
    pub fn new(count: usize, viewport: Vec2, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|i| Particle {
                id: i as u32,
                pos: Vec2::new(
                    uniform_in_extent(rng, viewport.x),
                    uniform_in_extent(rng, viewport.y),
                ),
                vel: Vec2::new(
                    rng.gen_range(-VELOCITY_HALF_RANGE..=VELOCITY_HALF_RANGE),
                    rng.gen_range(-VELOCITY_HALF_RANGE..=VELOCITY_HALF_RANGE),
                ),
                radius: rng.gen_range(RADIUS_MIN..=RADIUS_MAX),
                opacity: rng.gen_range(OPACITY_MIN..=OPACITY_MAX),
            })
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance every particle one step. Each axis is handled independently:
    /// a candidate that leaves [0, extent] flips that axis's velocity for the
    /// next tick while the position is clamped into range this tick (clamp
    /// now, redirect next), so large steps never escape the canvas.
    pub fn tick(&mut self, viewport: Vec2) {
        for p in &mut self.particles {
            let (x, vx) = step_axis(p.pos.x, p.vel.x, viewport.x);
            let (y, vy) = step_axis(p.pos.y, p.vel.y, viewport.y);
            p.pos = Vec2::new(x, y);
            p.vel = Vec2::new(vx, vy);
        }
    }
}

/// One axis of the tick: reflect the velocity iff the candidate position
/// exits [0, extent], and pin the position into range either way. A zero
/// extent degenerates to the origin rather than NaN.
pub fn step_axis(pos: f32, vel: f32, extent: f32) -> (f32, f32) {
    let extent = extent.max(0.0);
    let candidate = pos + vel;
    let vel = if candidate < 0.0 || candidate > extent {
        -vel
    } else {
        vel
    };
    (candidate.clamp(0.0, extent), vel)
}

fn uniform_in_extent(rng: &mut impl Rng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}
