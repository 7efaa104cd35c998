//! Self-rescheduling requestAnimationFrame driver. Exactly one frame is in
//! flight at a time: tick completes fully before render observes the
//! particle set, then the callback re-schedules itself. `LoopControl`
//! gates the cycle so teardown halts the loop instead of leaking work.

use crate::dom;
use crate::input::InputState;
use crate::particles::ParticleField;
use crate::render::CanvasPainter;
use crate::schedule::LoopControl;
use crate::sections;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: ParticleField,
    pub input: Rc<RefCell<InputState>>,
    pub painter: CanvasPainter,
    pub control: Rc<RefCell<LoopControl>>,
}

impl FrameContext {
    /// One cycle: physics tick strictly before render, then section
    /// styling from the same input snapshot.
    pub fn frame(&mut self) {
        let input = *self.input.borrow();
        self.painter.resize_if_needed(input.viewport);
        // Tick against the raw viewport: a zero extent degenerates to the
        // origin instead of the backing store's rounded size.
        self.field.tick(input.viewport);
        self.painter.render(self.field.particles());
        self.control.borrow_mut().end_render();
        if let Some(document) = dom::window_document() {
            sections::apply(&document, &input);
        }
    }
}

/// Start the RAF loop. No-op unless the control is Idle; after `stop` the
/// callback declines to reschedule and the closure is dropped with the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let control = frame_ctx.borrow().control.clone();
    if !control.borrow_mut().start() {
        return;
    }
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !control.borrow_mut().begin_tick() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    log::info!("[frame] render loop running");
}
