//! In-memory stand-ins for the image provider and the display surface.

use std::collections::HashMap;

use raylib::prelude::Color;

use crate::error::{Error, Result};
use crate::geometry::{Point, fit_keep_aspect};
use crate::surface::{ImageProvider, Picture, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct FakeImage {
    pub name: String,
    pub size: (i32, i32),
}

impl FakeImage {
    pub fn new(name: &str, size: (i32, i32)) -> Self {
        Self { name: name.to_string(), size }
    }
}

impl Picture for FakeImage {
    fn size(&self) -> (i32, i32) {
        self.size
    }
}

/// Scales like the real loader: keeps the natural aspect ratio of an asset
/// when one is registered, otherwise fills the requested size exactly.
#[derive(Default)]
pub struct FakeProvider {
    pub loads: Vec<(String, (i32, i32))>,
    natural: HashMap<String, (i32, i32)>,
    failing: Option<String>,
}

impl FakeProvider {
    pub fn with_natural(mut self, name: &str, size: (i32, i32)) -> Self {
        self.natural.insert(name.to_string(), size);
        self
    }

    pub fn fail_on(&mut self, name: &str) {
        self.failing = Some(name.to_string());
    }
}

impl ImageProvider for FakeProvider {
    type Image = FakeImage;

    fn get_image(&mut self, name: &str, size: (i32, i32)) -> Result<FakeImage> {
        if self.failing.as_deref() == Some(name) {
            return Err(Error::asset(name, "missing"));
        }
        self.loads.push((name.to_string(), size));
        let scaled = match self.natural.get(name) {
            Some(&natural) => fit_keep_aspect(natural, size),
            None => size,
        };
        Ok(FakeImage::new(name, scaled))
    }
}

#[derive(Default)]
pub struct RecordingSurface {
    pub fills: usize,
    pub blits: Vec<(String, Point)>,
}

impl RecordingSurface {
    pub fn blits_of(&self, name: &str) -> Vec<Point> {
        self.blits
            .iter()
            .filter(|(blitted, _)| blitted == name)
            .map(|(_, position)| *position)
            .collect()
    }
}

impl Surface<FakeImage> for RecordingSurface {
    fn fill(&mut self, _color: Color) {
        self.fills += 1;
    }

    fn blit(&mut self, image: &FakeImage, position: Point) {
        self.blits.push((image.name.clone(), position));
    }
}
