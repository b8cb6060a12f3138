//! Canvas 2D implementation of the drawable surface

use web_sys::CanvasRenderingContext2d;

use super::{Surface, TextAlign};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::Rect;

/// [`Surface`] backed by a browser 2D canvas context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str, align: TextAlign) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
