//! Host input wiring: scroll, pointermove and resize listeners feeding the
//! shared [`InputState`], and the page-teardown hook.
//!
//! The listener closures are stored rather than forgotten so `detach` can
//! deregister all three; a remount never piles up stale listeners.

use crate::dom;
use crate::input::InputState;
use crate::schedule::LoopControl;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputListeners {
    window: web::Window,
    scroll: Closure<dyn FnMut()>,
    pointer: Closure<dyn FnMut(web::PointerEvent)>,
    resize: Closure<dyn FnMut()>,
    attached: bool,
}

impl InputListeners {
    /// Register the three listeners. Each one only overwrites its field of
    /// the shared state; no other computation happens on the event path.
    pub fn attach(window: &web::Window, input: Rc<RefCell<InputState>>) -> Self {
        let scroll = {
            let input = input.clone();
            Closure::wrap(Box::new(move || {
                input.borrow_mut().set_scroll(dom::scroll_offset());
            }) as Box<dyn FnMut()>)
        };
        let pointer = {
            let input = input.clone();
            Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                input
                    .borrow_mut()
                    .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
            }) as Box<dyn FnMut(_)>)
        };
        let resize = {
            let input = input.clone();
            Closure::wrap(Box::new(move || {
                let (w, h) = dom::viewport_size();
                input.borrow_mut().set_viewport(w, h);
            }) as Box<dyn FnMut()>)
        };
        _ = window.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref());
        _ = window
            .add_event_listener_with_callback("pointermove", pointer.as_ref().unchecked_ref());
        _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        Self {
            window: window.clone(),
            scroll,
            pointer,
            resize,
            attached: true,
        }
    }

    /// Remove all three listeners; further events no longer touch the
    /// shared state.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.scroll.as_ref().unchecked_ref());
        _ = self.window.remove_event_listener_with_callback(
            "pointermove",
            self.pointer.as_ref().unchecked_ref(),
        );
        _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        self.attached = false;
        log::info!("[input] listeners detached");
    }
}

impl Drop for InputListeners {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Stop the frame loop and release the input listeners when the page goes
/// away. The hook itself lives for the page lifetime.
pub fn wire_teardown(
    window: &web::Window,
    control: Rc<RefCell<LoopControl>>,
    listeners: Rc<RefCell<Option<InputListeners>>>,
) {
    let closure = Closure::wrap(Box::new(move || {
        control.borrow_mut().stop();
        if let Some(mut l) = listeners.borrow_mut().take() {
            l.detach();
        }
        log::info!("[teardown] render loop stopped");
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
