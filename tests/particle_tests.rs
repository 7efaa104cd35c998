// Host-side tests for the particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod particles {
    include!("../src/particles.rs");
}

use constants::*;
use glam::Vec2;
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn make_field() -> ParticleField {
    let mut rng = StdRng::seed_from_u64(42);
    ParticleField::new(PARTICLE_COUNT, VIEWPORT, &mut rng)
}

#[test]
fn initialize_creates_fifty_particles_with_distinct_ids() {
    let field = make_field();
    assert_eq!(field.particles().len(), 50);
    for (i, p) in field.particles().iter().enumerate() {
        assert_eq!(p.id, i as u32);
    }
}

#[test]
fn initialize_draws_attributes_within_configured_ranges() {
    let field = make_field();
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= VIEWPORT.x);
        assert!(p.pos.y >= 0.0 && p.pos.y <= VIEWPORT.y);
        assert!(p.vel.x.abs() <= VELOCITY_HALF_RANGE);
        assert!(p.vel.y.abs() <= VELOCITY_HALF_RANGE);
        assert!(p.radius >= RADIUS_MIN && p.radius <= RADIUS_MAX);
        assert!(p.opacity >= OPACITY_MIN && p.opacity <= OPACITY_MAX);
    }
}

#[test]
fn positions_stay_in_bounds_over_many_ticks() {
    let mut field = make_field();
    for _ in 0..10_000 {
        field.tick(VIEWPORT);
        for p in field.particles() {
            assert!(
                p.pos.x >= 0.0 && p.pos.x <= VIEWPORT.x,
                "x out of bounds: {}",
                p.pos.x
            );
            assert!(
                p.pos.y >= 0.0 && p.pos.y <= VIEWPORT.y,
                "y out of bounds: {}",
                p.pos.y
            );
        }
    }
}

#[test]
fn radius_and_opacity_never_change_across_ticks() {
    let mut field = make_field();
    let before: Vec<(f32, f32)> = field
        .particles()
        .iter()
        .map(|p| (p.radius, p.opacity))
        .collect();
    for _ in 0..500 {
        field.tick(VIEWPORT);
    }
    for (p, (radius, opacity)) in field.particles().iter().zip(before) {
        assert_eq!(p.radius, radius);
        assert_eq!(p.opacity, opacity);
    }
}

#[test]
fn step_axis_keeps_velocity_inside_bounds() {
    let (pos, vel) = step_axis(5.0, 1.0, 10.0);
    assert_eq!(pos, 6.0);
    assert_eq!(vel, 1.0);
}

#[test]
fn step_axis_flips_velocity_only_when_candidate_exits() {
    // Candidate 10.3 exits [0, 10]: clamp now, redirect next
    let (pos, vel) = step_axis(9.8, 0.5, 10.0);
    assert_eq!(pos, 10.0);
    assert_eq!(vel, -0.5);

    // Candidate -0.4 exits at the low edge
    let (pos, vel) = step_axis(0.1, -0.5, 10.0);
    assert_eq!(pos, 0.0);
    assert_eq!(vel, 0.5);

    // Candidate exactly on the edge does not flip
    let (pos, vel) = step_axis(9.5, 0.5, 10.0);
    assert_eq!(pos, 10.0);
    assert_eq!(vel, 0.5);
}

#[test]
fn zero_viewport_degenerates_to_origin() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = ParticleField::new(10, Vec2::ZERO, &mut rng);
    for p in field.particles() {
        assert_eq!(p.pos, Vec2::ZERO);
    }
    for _ in 0..100 {
        field.tick(Vec2::ZERO);
        for p in field.particles() {
            assert_eq!(p.pos, Vec2::ZERO);
            assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
        }
    }
}

#[test]
fn zero_extent_pins_even_nonzero_positions_to_the_origin() {
    // A collapsing viewport must not leave particles hovering inside a
    // leftover one-pixel extent.
    let (pos, vel) = step_axis(0.5, 0.25, 0.0);
    assert_eq!(pos, 0.0);
    assert_eq!(vel, -0.25);

    let (pos, _) = step_axis(pos, vel, 0.0);
    assert_eq!(pos, 0.0);
}

#[test]
fn new_field_replaces_the_whole_set() {
    let mut rng = StdRng::seed_from_u64(42);
    let field = ParticleField::new(12, VIEWPORT, &mut rng);
    assert_eq!(field.particles().len(), 12);
    let field = ParticleField::new(50, VIEWPORT, &mut rng);
    assert_eq!(field.particles().len(), 50);
}

#[test]
fn wall_contact_pins_this_tick_and_redirects_the_next() {
    // First contact: pinned to the wall, velocity flipped
    let (pos, vel) = step_axis(799.9, 0.25, 800.0);
    assert_eq!(pos, 800.0);
    assert_eq!(vel, -0.25);

    // Next tick walks back off the wall with the reflected velocity
    let (pos, vel) = step_axis(pos, vel, 800.0);
    assert_eq!(pos, 799.75);
    assert_eq!(vel, -0.25);
}
