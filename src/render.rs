use raylib::prelude::*;

use crate::geometry::{Point, Rect};
use crate::surface::Surface;
use crate::texture_loader::Asset;

/// Current drawable area of the window.
pub fn window_rect(rl: &RaylibHandle) -> Rect {
    Rect::new(0, 0, rl.get_screen_width(), rl.get_screen_height())
}

/// Screen surface backed by a raylib draw handle for the current frame.
pub struct RaylibSurface<'a, D: RaylibDraw> {
    draw: &'a mut D,
}

impl<'a, D: RaylibDraw> RaylibSurface<'a, D> {
    pub fn new(draw: &'a mut D) -> Self {
        Self { draw }
    }
}

impl<D: RaylibDraw> Surface<Asset> for RaylibSurface<'_, D> {
    fn fill(&mut self, color: Color) {
        self.draw.clear_background(color);
    }

    fn blit(&mut self, image: &Asset, position: Point) {
        self.draw.draw_texture(image.texture(), position.x, position.y, Color::WHITE);
    }
}

/// Full-frame error message, shown before giving up.
pub fn draw_error(d: &mut impl RaylibDraw, message: &str) {
    d.clear_background(Color::BLACK);
    d.draw_text(&format!("Error: {}", message), 20, 20, 20, Color::RED);
}
