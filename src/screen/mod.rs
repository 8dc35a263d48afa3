//! Animated backgrounds, one per kiosk state.
//!
//! A screen is resized whenever the display area changes and animated once
//! per frame. Most screens are a static picture; the choice screen shakes two
//! layout thumbnails and the selected screen slides the chosen one into place.

pub mod choice;
pub mod selected;
#[cfg(test)]
pub mod testing;

use std::fmt;
use std::time::Instant;

use raylib::prelude::Color;
use tracing::debug;

use crate::constants::*;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::surface::{ImageProvider, Picture, Surface};

use self::choice::ChoiceLayouts;
use self::selected::SelectedLayout;

/// Screens that only show their background picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticKind {
    Intro,
    IntroWithPrint,
    Capture,
    Processing,
    Print,
    Finished,
    Oops,
}

impl StaticKind {
    pub fn asset_name(self) -> &'static str {
        match self {
            StaticKind::Intro => "intro.png",
            StaticKind::IntroWithPrint => "intro_with_print.png",
            StaticKind::Capture => "capture.png",
            StaticKind::Processing => "processing.png",
            StaticKind::Print => "print.png",
            StaticKind::Finished => "finished.png",
            StaticKind::Oops => "opps.png",
        }
    }
}

pub fn layout_asset_name(layout: u32) -> String {
    format!("layout{}.png", layout)
}

/// Background picture shared by every screen, scaled to the display area.
struct Background<I> {
    name: &'static str,
    rect: Option<Rect>,
    image: Option<I>,
}

impl<I: Picture> Background<I> {
    fn new(name: &'static str) -> Self {
        Self { name, rect: None, image: None }
    }

    fn load<P>(&self, rect: Rect, provider: &mut P) -> Result<I>
    where
        P: ImageProvider<Image = I>,
    {
        debug!(name = self.name, width = rect.width, height = rect.height, "Scaling background");
        provider.get_image(self.name, rect.size())
    }

    fn commit(&mut self, rect: Rect, image: I) {
        self.rect = Some(rect);
        self.image = Some(image);
    }

    fn draw<S: Surface<I>>(&self, surface: &mut S) {
        surface.fill(Color::BLACK);
        if let (Some(rect), Some(image)) = (self.rect, self.image.as_ref()) {
            surface.blit(image, image.rect().with_center(rect.center()).top_left());
        }
    }
}

/// Size of a layout thumbnail drawn over `background`.
fn thumbnail_size(background: &impl Picture) -> (i32, i32) {
    let (width, height) = background.size();
    (
        (width as f64 * THUMBNAIL_RATIO) as i32,
        (height as f64 * THUMBNAIL_RATIO) as i32,
    )
}

/// Left and right thumbnail slots: the display width is split into three
/// equal gutters around the two thumbnails, and both sit at the same height.
fn thumbnail_slots(display: Rect, background: &impl Picture, left: &impl Picture, right_width: i32) -> [Point; 2] {
    let left_width = left.size().0;
    let gutter = (display.width - left_width - right_width).div_euclid(3);

    let background_top = background.rect().with_center(display.center()).top();
    let thumbnail_top = left.rect().with_center(background.rect().center()).top();
    let top = (background_top as f64 + thumbnail_top as f64 * THUMBNAIL_DROP) as i32;

    [Point::new(gutter, top), Point::new(gutter * 2 + left_width, top)]
}

enum Foreground<I> {
    Static,
    Choice(ChoiceLayouts<I>),
    Selected(SelectedLayout<I>),
}

pub struct Screen<I> {
    background: Background<I>,
    foreground: Foreground<I>,
}

impl<I: Picture> Screen<I> {
    pub fn fixed(kind: StaticKind) -> Self {
        Self {
            background: Background::new(kind.asset_name()),
            foreground: Foreground::Static,
        }
    }

    /// Screen offering two print layouts side by side.
    pub fn choice(choices: [u32; 2]) -> Self {
        Self {
            background: Background::new("choose.png"),
            foreground: Foreground::Choice(ChoiceLayouts::new(choices)),
        }
    }

    /// Screen confirming `selected`, which must be one of `choices`.
    pub fn selected(choices: [u32; 2], selected: u32) -> Result<Self> {
        Ok(Self {
            background: Background::new("chosen.png"),
            foreground: Foreground::Selected(SelectedLayout::new(choices, selected)?),
        })
    }

    /// Fit the screen to `rect`. Returns false, without touching any image,
    /// when `rect` is the geometry already in use.
    pub fn resize<P>(&mut self, rect: Rect, provider: &mut P) -> Result<bool>
    where
        P: ImageProvider<Image = I>,
    {
        if self.background.rect == Some(rect) {
            return Ok(false);
        }

        // Load everything first so a failed load keeps the previous geometry.
        let image = self.background.load(rect, provider)?;
        match &mut self.foreground {
            Foreground::Static => {}
            Foreground::Choice(layouts) => layouts.resize(rect, &image, provider)?,
            Foreground::Selected(layout) => layout.resize(rect, &image, provider)?,
        }
        self.background.commit(rect, image);
        Ok(true)
    }

    /// Draw one frame onto `surface`, advancing the animation by one step.
    pub fn animate<S: Surface<I>>(&mut self, surface: &mut S, now: Instant) {
        self.background.draw(surface);
        let Some(rect) = self.background.rect else {
            return;
        };

        match &mut self.foreground {
            Foreground::Static => {}
            Foreground::Choice(layouts) => layouts.animate(surface, now),
            Foreground::Selected(layout) => layout.animate(rect, surface, now),
        }
    }
}

impl<I> fmt::Display for Screen<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.foreground {
            Foreground::Selected(layout) => write!(f, "chosen{}.png", layout.selected()),
            _ => f.write_str(self.background.name),
        }
    }
}
