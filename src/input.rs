// Latest host-environment input signals shared across the frame pipeline.
//
// Single writer (the event wiring), many readers; every setter overwrites
// in place, so a reader always sees the most recent value (last write
// wins, no history).

use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub scroll_y: f32,
    pub pointer: Vec2,
    pub viewport: Vec2,
}

impl InputState {
    /// Pointer starts at the origin and scroll at zero; only the viewport
    /// comes from the live window.
    pub fn new(viewport: Vec2) -> Self {
        Self {
            scroll_y: 0.0,
            pointer: Vec2::ZERO,
            viewport,
        }
    }

    pub fn set_scroll(&mut self, y: f32) {
        self.scroll_y = y.max(0.0);
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn set_viewport(&mut self, w: f32, h: f32) {
        self.viewport = Vec2::new(w, h);
    }

    /// Pointer normalized into [0,1]² against the viewport; center when the
    /// viewport has no extent.
    pub fn pointer_uv(&self) -> [f32; 2] {
        if self.viewport.x > 0.0 && self.viewport.y > 0.0 {
            [
                (self.pointer.x / self.viewport.x).clamp(0.0, 1.0),
                (self.pointer.y / self.viewport.y).clamp(0.0, 1.0),
            ]
        } else {
            [0.5, 0.5]
        }
    }
}
