//! Image utilities
//! A raw RGBA buffer the simulation can paint into without knowing
//! anything about the game engine; bevy types only appear at the
//! conversion edge.

use bevy::render::{
    color::Color,
    render_resource::{Extent3d, TextureDimension, TextureFormat},
    texture::Image,
};

use super::vectors::XyVector;

/// Representing a raw RGBA image
/// Full ownership, no lifetimes, not a component
/// Pixels are stored row by row from the top-left corner, one cell per pixel
#[derive(Clone)]
pub struct RawImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RawImage {
    /// Create an image of the given size filled with one color
    pub fn new_filled(width: u32, height: u32, color: Color) -> Self {
        let rgba = color.as_rgba_u8();
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width as usize * height as usize {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Overwrite the pixel backing the given cell
    /// The position must be inside the image
    pub fn set_pixel(&mut self, pos: XyVector, color: Color) {
        let idx = (pos.y as usize * self.width as usize + pos.x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&color.as_rgba_u8());
    }

    /// Convert to a bevy image
    /// Load this into an asset server to get a texture
    pub fn to_bevy_image(self) -> Image {
        let size = Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        };

        Image::new(
            size,
            TextureDimension::D2,
            self.pixels,
            TextureFormat::Rgba8UnormSrgb,
        )
    }
}
