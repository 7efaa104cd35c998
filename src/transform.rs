// Pure scroll/pointer to visual-transform derivations.
//
// Everything here is stateless: given the current scroll offset (and the
// per-section activation windows from `constants`), these functions yield
// the translation/opacity/rotation a section should present. The page-side
// code reads them on every frame; tests feed them literal offsets.

use crate::constants::{
    ABOUT_FADE_END, ABOUT_FADE_START, ABOUT_SLIDE_BASE_PX, ABOUT_SLIDE_SPEED, BACKDROP_DRIFT_X,
    BACKDROP_DRIFT_Y, DRIFT_AMPLITUDE_X_PX, DRIFT_AMPLITUDE_Y_PX, DRIFT_FREQ,
    HERO_PARALLAX_FACTOR, PROJECTS_FADE_END, PROJECTS_FADE_START, PROJECTS_RISE_BASE_PX,
    PROJECTS_RISE_RATE, PROJECTS_RISE_START, PROJECTS_TILT_BASE_DEG, PROJECTS_TILT_RATE,
    SKILLS_FADE_END, SKILLS_FADE_START, SKILLS_RISE_BASE_PX, SKILLS_RISE_RATE, SKILLS_RISE_START,
    SKILL_BAR_FILL_THRESHOLD,
};
use glam::Vec2;

/// Scroll-offset interval over which a section's reveal is non-trivial.
/// Callers must keep `end > start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionWindow {
    pub start: f32,
    pub end: f32,
}

impl SectionWindow {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }
}

pub const ABOUT_WINDOW: SectionWindow = SectionWindow::new(ABOUT_FADE_START, ABOUT_FADE_END);
pub const SKILLS_WINDOW: SectionWindow = SectionWindow::new(SKILLS_FADE_START, SKILLS_FADE_END);
pub const PROJECTS_WINDOW: SectionWindow =
    SectionWindow::new(PROJECTS_FADE_START, PROJECTS_FADE_END);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub opacity: f32,
    pub rotation: f32,
}

/// Which side a sliding section enters from; determines the offset sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Reveal progress through the window, clamped to [0,1]. Also serves as the
/// generic per-section progress signal.
pub fn reveal_fade(scroll: f32, window: SectionWindow) -> f32 {
    ((scroll - window.start) / (window.end - window.start)).clamp(0.0, 1.0)
}

/// Signed slide-in offset: full `base` at rest, shrinking with scroll and
/// clamped at zero (never overshoots past the resting position).
pub fn slide_in(scroll: f32, base: f32, speed: f32, direction: Direction) -> f32 {
    direction.sign() * (base - scroll * speed).max(0.0)
}

/// Vertical entry offset: `base` at `start`, decaying at `rate` per
/// scrolled pixel, clamped at zero. Before `start` the offset exceeds
/// `base`, but the paired reveal fade keeps the section invisible there.
pub fn rise(scroll: f32, base: f32, start: f32, rate: f32) -> f32 {
    (base - (scroll - start) * rate).max(0.0)
}

/// Hero content parallax: drifts down at a fraction of the scroll rate,
/// always fully opaque.
pub fn hero(scroll: f32) -> SectionTransform {
    SectionTransform {
        translate_y: scroll * HERO_PARALLAX_FACTOR,
        opacity: 1.0,
        ..Default::default()
    }
}

/// About column: horizontal slide-in from the given side plus reveal fade.
pub fn about(scroll: f32, direction: Direction) -> SectionTransform {
    SectionTransform {
        translate_x: slide_in(scroll, ABOUT_SLIDE_BASE_PX, ABOUT_SLIDE_SPEED, direction),
        opacity: reveal_fade(scroll, ABOUT_WINDOW),
        ..Default::default()
    }
}

/// Skills grid: vertical entry plus reveal fade.
pub fn skills(scroll: f32) -> SectionTransform {
    SectionTransform {
        translate_y: rise(scroll, SKILLS_RISE_BASE_PX, SKILLS_RISE_START, SKILLS_RISE_RATE),
        opacity: reveal_fade(scroll, SKILLS_WINDOW),
        ..Default::default()
    }
}

/// Projects grid: vertical entry, perspective tilt flattening out with
/// scroll, plus reveal fade.
pub fn projects(scroll: f32) -> SectionTransform {
    SectionTransform {
        translate_y: rise(
            scroll,
            PROJECTS_RISE_BASE_PX,
            PROJECTS_RISE_START,
            PROJECTS_RISE_RATE,
        ),
        opacity: reveal_fade(scroll, PROJECTS_WINDOW),
        rotation: rise(
            scroll,
            PROJECTS_TILT_BASE_DEG,
            PROJECTS_RISE_START,
            PROJECTS_TILT_RATE,
        ),
        ..Default::default()
    }
}

/// Floating-icon drift: a closed sinusoidal orbit keyed to scroll, phase
/// offset per icon so they never move in lockstep.
pub fn icon_drift(scroll: f32, phase: f32) -> Vec2 {
    let t = scroll * DRIFT_FREQ + phase;
    Vec2::new(
        t.sin() * DRIFT_AMPLITUDE_X_PX,
        t.cos() * DRIFT_AMPLITUDE_Y_PX,
    )
}

/// Skill bar fill percentage: the configured level once the skills section
/// has scrolled into place, empty before that.
pub fn skill_bar_fill(scroll: f32, level: f32) -> f32 {
    if scroll > SKILL_BAR_FILL_THRESHOLD {
        level
    } else {
        0.0
    }
}

/// Scroll-driven backdrop gradient center, in percent of the viewport.
pub fn backdrop_center(scroll: f32) -> Vec2 {
    Vec2::new(
        50.0 + scroll * BACKDROP_DRIFT_X,
        50.0 + scroll * BACKDROP_DRIFT_Y,
    )
}
