//! Canvas2D particle painter. The painter owns the drawing surface; no
//! other component draws on it.

use crate::constants::PARTICLE_RGB;
use crate::particles::Particle;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasPainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    /// Acquire the 2D context. `None` when the context is unavailable; the
    /// caller then never starts the render loop (silent no-op, no throw).
    pub fn new(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Grow/shrink the backing store to the viewport when it changed.
    pub fn resize_if_needed(&self, viewport: Vec2) {
        let w = viewport.x as u32;
        let h = viewport.y as u32;
        if self.canvas.width() != w {
            self.canvas.set_width(w);
        }
        if self.canvas.height() != h {
            self.canvas.set_height(h);
        }
    }

    /// Clear the full surface, then draw each particle as a filled circle
    /// in the shared hue with per-particle alpha.
    pub fn render(&self, particles: &[Particle]) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        let (r, g, b) = PARTICLE_RGB;
        for p in particles {
            self.ctx.begin_path();
            if self
                .ctx
                .arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU)
                .is_err()
            {
                continue;
            }
            self.ctx
                .set_fill_style_str(&format!("rgba({r}, {g}, {b}, {})", p.opacity));
            self.ctx.fill();
        }
    }
}
