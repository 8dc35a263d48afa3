use raylib::prelude::Color;

use crate::error::Result;
use crate::geometry::{Point, Rect};

/// Anything drawable with a known pixel size.
pub trait Picture {
    fn size(&self) -> (i32, i32);

    /// Rect of the picture anchored at the origin.
    fn rect(&self) -> Rect {
        Rect::from_size(self.size())
    }
}

/// Loads named assets scaled to fit a pixel size.
pub trait ImageProvider {
    type Image: Picture;

    fn get_image(&mut self, name: &str, size: (i32, i32)) -> Result<Self::Image>;
}

/// Target the screens composite onto, one frame at a time. Its geometry is
/// handed to `Screen::resize` by the caller before drawing.
pub trait Surface<I: Picture> {
    fn fill(&mut self, color: Color);
    fn blit(&mut self, image: &I, position: Point);
}
