//! Applies the transform derivations to the page chrome once per frame:
//! hero parallax and icon drift, about slide/fade, skills rise/fade and
//! bar fills, projects rise/tilt/fade, and the two ambient gradients.
//!
//! Elements are addressed by id (or class for the skill bars); anything
//! the page does not carry is skipped.

use crate::dom;
use crate::input::InputState;
use crate::transform::{self, Direction};
use wasm_bindgen::JsCast;
use web_sys as web;

pub const HERO_CONTENT_ID: &str = "hero-content";
pub const ABOUT_LEFT_ID: &str = "about-left";
pub const ABOUT_RIGHT_ID: &str = "about-right";
pub const SKILLS_GRID_ID: &str = "skills-grid";
pub const PROJECTS_GRID_ID: &str = "projects-grid";
pub const POINTER_GLOW_ID: &str = "pointer-glow";
pub const SCROLL_BACKDROP_ID: &str = "scroll-backdrop";
pub const SKILL_BAR_CLASS: &str = "skill-bar";
pub const SKILL_LEVEL_ATTR: &str = "data-level";

// Hero icon ids with their drift phase offsets
const FLOATING_ICONS: [(&str, f32); 4] = [
    ("icon-bolt", 0.0),
    ("icon-rocket", 1.0),
    ("icon-laptop", 2.0),
    ("icon-star", 1.5),
];

pub fn apply(document: &web::Document, input: &InputState) {
    let scroll = input.scroll_y;

    let hero = transform::hero(scroll);
    dom::set_style_property(
        document,
        HERO_CONTENT_ID,
        "transform",
        &format!("translateY({:.1}px)", hero.translate_y),
    );

    for (id, phase) in FLOATING_ICONS {
        let d = transform::icon_drift(scroll, phase);
        dom::set_style_property(
            document,
            id,
            "transform",
            &format!("translate({:.1}px, {:.1}px)", d.x, d.y),
        );
    }

    apply_section(document, ABOUT_LEFT_ID, transform::about(scroll, Direction::Right));
    apply_section(document, ABOUT_RIGHT_ID, transform::about(scroll, Direction::Left));
    apply_section(document, SKILLS_GRID_ID, transform::skills(scroll));
    apply_section(document, PROJECTS_GRID_ID, transform::projects(scroll));

    apply_skill_bars(document, scroll);
    apply_gradients(document, input);
}

fn apply_section(document: &web::Document, id: &str, t: transform::SectionTransform) {
    let mut css = format!("translate({:.1}px, {:.1}px)", t.translate_x, t.translate_y);
    if t.rotation != 0.0 {
        css.push_str(&format!(" rotateX({:.2}deg)", t.rotation));
    }
    dom::set_style_property(document, id, "transform", &css);
    dom::set_style_property(document, id, "opacity", &format!("{:.3}", t.opacity));
}

/// Fill every `.skill-bar` to its `data-level` percentage once the skills
/// section is in view.
fn apply_skill_bars(document: &web::Document, scroll: f32) {
    let bars = document.get_elements_by_class_name(SKILL_BAR_CLASS);
    for i in 0..bars.length() {
        let Some(el) = bars.item(i) else {
            continue;
        };
        let Some(level) = el
            .get_attribute(SKILL_LEVEL_ATTR)
            .and_then(|v| v.parse::<f32>().ok())
        else {
            continue;
        };
        let fill = transform::skill_bar_fill(scroll, level);
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html.style().set_property("width", &format!("{fill:.0}%"));
        }
    }
}

/// Pointer-centered glow (pass-through coordinates) and the slower
/// scroll-driven secondary gradient behind it.
fn apply_gradients(document: &web::Document, input: &InputState) {
    dom::set_style_property(
        document,
        POINTER_GLOW_ID,
        "background",
        &format!(
            "radial-gradient(circle at {:.0}px {:.0}px, rgba(139, 92, 246, 0.15) 0%, transparent 50%)",
            input.pointer.x, input.pointer.y
        ),
    );
    let center = transform::backdrop_center(input.scroll_y);
    dom::set_style_property(
        document,
        SCROLL_BACKDROP_ID,
        "background",
        &format!(
            "radial-gradient(circle at {:.2}% {:.2}%, rgba(59, 130, 246, 0.1) 0%, transparent 70%)",
            center.x, center.y
        ),
    );
}
