#![cfg(target_arch = "wasm32")]
//! Ambient background for a single-page portfolio: a full-viewport particle
//! canvas plus scroll/pointer-driven section transforms. The page supplies
//! the markup; this crate supplies the motion.

use crate::constants::PARTICLE_COUNT;
use crate::input::InputState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod particles;
mod render;
mod schedule;
mod sections;
mod transform;

const CANVAS_ID: &str = "particle-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // A page without the canvas stays static; not a fault.
    let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
        log::warn!("missing #{CANVAS_ID}; ambient animation disabled");
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::sync_canvas_backing_size(&canvas);

    let Some(painter) = render::CanvasPainter::new(canvas) else {
        log::warn!("2d context unavailable; ambient animation disabled");
        return Ok(());
    };

    let (vw, vh) = dom::viewport_size();
    let input = Rc::new(RefCell::new(InputState::new(Vec2::new(vw, vh))));
    input.borrow_mut().set_scroll(dom::scroll_offset());

    let mut rng = rand::thread_rng();
    let field = particles::ParticleField::new(PARTICLE_COUNT, Vec2::new(vw, vh), &mut rng);
    log::info!(
        "[field] {} particles over {:.0}x{:.0}",
        field.particles().len(),
        vw,
        vh
    );

    let control = Rc::new(RefCell::new(schedule::LoopControl::new()));
    let listeners = Rc::new(RefCell::new(Some(events::InputListeners::attach(
        &window,
        input.clone(),
    ))));
    events::wire_teardown(&window, control.clone(), listeners);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        input,
        painter,
        control,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
