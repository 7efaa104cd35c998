/// Particle field and section transform tuning constants.
///
/// These constants express intended behavior (counts, ranges, scroll
/// activation windows) and keep magic numbers out of the code.
// Particle field
pub const PARTICLE_COUNT: usize = 50;

// Per-axis velocity is drawn uniformly from ±VELOCITY_HALF_RANGE (px per tick)
pub const VELOCITY_HALF_RANGE: f32 = 0.25;

pub const RADIUS_MIN: f32 = 1.0;
pub const RADIUS_MAX: f32 = 3.0;

pub const OPACITY_MIN: f32 = 0.2;
pub const OPACITY_MAX: f32 = 0.7;

// Shared fill color for every particle (violet family); alpha comes from
// the particle's own opacity
pub const PARTICLE_RGB: (u8, u8, u8) = (139, 92, 246);

// Hero content drifts down at half the scroll rate
pub const HERO_PARALLAX_FACTOR: f32 = 0.5;

// About: horizontal slide-in distance/speed and reveal window
pub const ABOUT_SLIDE_BASE_PX: f32 = 300.0;
pub const ABOUT_SLIDE_SPEED: f32 = 0.8;
pub const ABOUT_FADE_START: f32 = 200.0;
pub const ABOUT_FADE_END: f32 = 500.0;

// Skills: vertical entry, reveal window, bar fill threshold
pub const SKILLS_RISE_BASE_PX: f32 = 100.0;
pub const SKILLS_RISE_START: f32 = 1200.0;
pub const SKILLS_RISE_RATE: f32 = 0.3;
pub const SKILLS_FADE_START: f32 = 1000.0;
pub const SKILLS_FADE_END: f32 = 1400.0;
pub const SKILL_BAR_FILL_THRESHOLD: f32 = 1200.0;

// Projects: vertical entry, perspective tilt, reveal window
pub const PROJECTS_RISE_BASE_PX: f32 = 100.0;
pub const PROJECTS_RISE_START: f32 = 1800.0;
pub const PROJECTS_RISE_RATE: f32 = 0.2;
pub const PROJECTS_TILT_BASE_DEG: f32 = 15.0;
pub const PROJECTS_TILT_RATE: f32 = 0.03;
pub const PROJECTS_FADE_START: f32 = 1600.0;
pub const PROJECTS_FADE_END: f32 = 2000.0;

// Floating hero icons: scroll-phase sinusoidal drift
pub const DRIFT_FREQ: f32 = 0.01;
pub const DRIFT_AMPLITUDE_X_PX: f32 = 20.0;
pub const DRIFT_AMPLITUDE_Y_PX: f32 = 15.0;

// Scroll-driven backdrop gradient center drift (percent of viewport per px)
pub const BACKDROP_DRIFT_X: f32 = 0.01;
pub const BACKDROP_DRIFT_Y: f32 = 0.02;
