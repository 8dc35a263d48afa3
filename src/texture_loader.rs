use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::geometry::fit_keep_aspect;
use crate::surface::{ImageProvider, Picture};

/// Scaled texture shared between the cache and the screens using it.
#[derive(Clone)]
pub struct Asset(Rc<Texture2D>);

impl Asset {
    pub fn texture(&self) -> &Texture2D {
        &self.0
    }
}

impl Picture for Asset {
    fn size(&self) -> (i32, i32) {
        (self.0.width(), self.0.height())
    }
}

/// Directory of background and layout pictures, with a texture cache keyed
/// by name and scaled size.
pub struct AssetStore {
    root: PathBuf,
    cache: HashMap<(String, (i32, i32)), Asset>,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), cache: HashMap::new() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Picture files available in the asset directory, sorted by name.
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_file() && is_picture(&path) {
                paths.push(path);
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }

    /// Borrow the store together with the raylib context needed to upload textures.
    pub fn loader<'a>(&'a mut self, rl: &'a mut RaylibHandle, thread: &'a RaylibThread) -> AssetLoader<'a> {
        AssetLoader { store: self, rl, thread }
    }
}

pub struct AssetLoader<'a> {
    store: &'a mut AssetStore,
    rl: &'a mut RaylibHandle,
    thread: &'a RaylibThread,
}

impl ImageProvider for AssetLoader<'_> {
    type Image = Asset;

    fn get_image(&mut self, name: &str, size: (i32, i32)) -> Result<Asset> {
        let key = (name.to_string(), size);
        if let Some(asset) = self.store.cache.get(&key) {
            return Ok(asset.clone());
        }

        let path = self.store.root.join(name);
        let mut image = load_image_with_exif_rotation(&path)?;
        let (width, height) = fit_keep_aspect((image.width(), image.height()), size);
        image.resize(width.max(1), height.max(1));

        let texture = self.rl.load_texture_from_image(self.thread, &image)
            .map_err(|e| Error::asset(name, e))?;
        debug!(name, width, height, "Loaded texture");

        // Only the latest size of a picture is worth keeping.
        self.store.cache.retain(|(cached, _), _| cached != name);
        let asset = Asset(Rc::new(texture));
        self.store.cache.insert(key, asset.clone());
        Ok(asset)
    }
}

fn is_picture(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif"))
        .unwrap_or(false)
}

/// EXIF orientation of a JPEG, 1 (upright) when absent or unreadable.
fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|field| &field.value) {
            Some(Value::Short(values)) if !values.is_empty() => values[0],
            _ => 1,
        },
        Err(e) => {
            warn!(path = %image_path.display(), "Could not read EXIF data: {}", e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation ---
fn load_image_with_exif_rotation(image_path: &Path) -> Result<Image> {
    let name = image_path.display().to_string();
    let file_bytes = fs::read(image_path).map_err(|e| Error::asset(&name, e))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| Error::asset(&name, e))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Mirrored orientations are left as is.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(path = %name, orientation, "Applied EXIF rotation");
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_picture_extensions() {
        assert!(is_picture(Path::new("assets/intro.png")));
        assert!(is_picture(Path::new("assets/layout1.JPG")));
        assert!(!is_picture(Path::new("assets/readme.txt")));
        assert!(!is_picture(Path::new("assets/chosen")));
    }

    #[test]
    fn orientation_defaults_to_upright_without_exif() {
        assert_eq!(exif_orientation(Path::new("x.jpg"), b"not a jpeg"), 1);
    }

    #[test]
    fn missing_asset_is_reported_by_name() {
        let err = load_image_with_exif_rotation(Path::new("/nonexistent/boothscreens/intro.png")).err().unwrap();
        assert!(err.to_string().contains("intro.png"));
    }

    #[test]
    fn listing_a_missing_directory_fails() {
        assert!(AssetStore::new("/nonexistent/boothscreens").list().is_err());
    }
}
