//! The pixel buffer every rasterizer draws into.
//!
//! Colors are stored packed as ARGB8888 words in a flat row-major vector with
//! the origin at the top-left. Rendering treats increasing `y` as "up", so
//! callers flip the canvas once with [`Canvas::flip_vertically`] before
//! encoding it.

use std::path::Path;

use image::{Rgb, RgbImage};
use thiserror::Error;

use crate::colors::Color;

/// Errors produced while writing a canvas to disk.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode image")]
    Encode(#[from] image::ImageError),
}

pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![background.to_argb(); size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color.to_argb());
    }

    /// Whether `(x, y)` is a pixel of this canvas.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width as usize)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height as usize)?;
        Some(y * self.width as usize + x)
    }

    /// Write a single pixel. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.color_buffer[index] = color.to_argb();
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y)
            .map(|index| Color::from_argb(self.color_buffer[index]))
    }

    /// Number of pixels currently holding exactly `color`.
    pub fn count_color(&self, color: Color) -> usize {
        let argb = color.to_argb();
        self.color_buffer.iter().filter(|&&c| c == argb).count()
    }

    /// Reverse the row order in place, turning a bottom-left origin image
    /// into the top-down layout encoders expect.
    pub fn flip_vertically(&mut self) {
        let row = self.width as usize;
        let rows = self.height as usize;
        for y in 0..rows / 2 {
            let (top, bottom) = self.color_buffer.split_at_mut((rows - 1 - y) * row);
            top[y * row..(y + 1) * row].swap_with_slice(&mut bottom[..row]);
        }
    }

    /// Convert to a 24-bit RGB image, dropping alpha.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let index = y as usize * self.width as usize + x as usize;
            let color = Color::from_argb(self.color_buffer[index]);
            Rgb([color.r, color.g, color.b])
        })
    }

    /// Encode the canvas to `path`, picking the format from its extension.
    ///
    /// Missing parent directories are created.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), OutputError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                path: parent.display().to_string(),
                source,
            })?;
        }
        self.to_rgb_image().save(path)?;
        Ok(())
    }
}
