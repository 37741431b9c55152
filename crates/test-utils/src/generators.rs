//! Logo image generators for compositing tests.

use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A solid, fully opaque logo.
pub fn solid_logo(width: u32, height: u32, rgb: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

/// Save a logo as PNG under `dir`.
pub fn write_logo(dir: &Path, name: &str, logo: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    logo.save(&path).expect("failed to write test logo");
    path
}

/// Temporary media directory holding generated logos.
pub struct LogoDir {
    dir: TempDir,
}

impl LogoDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn solid(&self, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
        write_logo(self.path(), name, &solid_logo(width, height, rgb))
    }

    /// Write bytes that are not a decodable image.
    pub fn corrupt(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, b"definitely not a png").expect("failed to write test file");
        path
    }
}

impl Default for LogoDir {
    fn default() -> Self {
        Self::new()
    }
}
