use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current window inner size in CSS pixels; (0, 0) when no window exists.
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_offset() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Match the canvas backing store to the full viewport. A zero-sized
/// viewport keeps a zero-sized surface; the simulation degenerates to the
/// origin rather than a phantom pixel.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let (w, h) = viewport_size();
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
}

/// Write one inline style property on the element with the given id.
/// Missing elements are skipped; the page simply has no such section.
pub fn set_style_property(document: &web::Document, element_id: &str, prop: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html.style().set_property(prop, value);
        }
    }
}
