//! Raster image to normalized height field.
//!
//! Decoding is someone else's job; this module only sees width, height and
//! 8-bit pixels in either RGBA or RGB order.

use crate::constants::{LUMA_B, LUMA_G, LUMA_R};
use crate::error::{ReliefError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    Rgba8,
    Rgb8,
}

impl PixelLayout {
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Rgba8 => 4,
            PixelLayout::Rgb8 => 3,
        }
    }
}

/// Borrowed view of a decoded image.
#[derive(Clone, Copy, Debug)]
pub struct RasterImage<'a> {
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    pub pixels: &'a [u8],
}

impl<'a> RasterImage<'a> {
    pub fn rgba(width: u32, height: u32, pixels: &'a [u8]) -> Self {
        Self {
            width,
            height,
            layout: PixelLayout::Rgba8,
            pixels,
        }
    }

    pub fn rgb(width: u32, height: u32, pixels: &'a [u8]) -> Self {
        Self {
            width,
            height,
            layout: PixelLayout::Rgb8,
            pixels,
        }
    }
}

/// Perceptual luminance of an 8-bit colour in [0, 1].
///
/// Accumulated in f64 so that pure white narrows to exactly 1.0.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    let lum = (LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64) / 255.0;
    lum as f32
}

/// Row-major grid of normalized elevations. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl HeightField {
    pub fn from_image(image: &RasterImage<'_>) -> Result<Self> {
        check_dimensions(image.width, image.height)?;
        let channels = image.layout.channels();
        let expected = sample_count(image.width, image.height)
            .and_then(|count| count.checked_mul(channels))
            .ok_or_else(|| too_large(image.width, image.height))?;
        if image.pixels.len() != expected {
            return Err(ReliefError::InvalidImage(format!(
                "expected {} bytes for {}x{} {:?}, got {}",
                expected,
                image.width,
                image.height,
                image.layout,
                image.pixels.len()
            )));
        }

        let values = image
            .pixels
            .chunks_exact(channels)
            .map(|px| luminance(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width: image.width,
            height: image.height,
            values,
        })
    }

    /// Wrap precomputed heights, e.g. for synthetic terrain. Every value must lie
    /// in [0, 1]; NaN is rejected.
    pub fn from_values(width: u32, height: u32, values: Vec<f32>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = sample_count(width, height).ok_or_else(|| too_large(width, height))?;
        if values.len() != expected {
            return Err(ReliefError::InvalidImage(format!(
                "expected {} heights for {}x{}, got {}",
                expected,
                width,
                height,
                values.len()
            )));
        }
        if let Some((i, v)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(ReliefError::InvalidImage(format!(
                "height {} at index {} is outside [0, 1]",
                v, i
            )));
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Height at grid coordinate (x, y). Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.values[y as usize * self.width as usize + x as usize]
    }

    /// Lowest and highest sample.
    pub fn range(&self) -> (f32, f32) {
        self.values
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ReliefError::InvalidImage(format!(
            "image has zero size ({}x{})",
            width, height
        )));
    }
    Ok(())
}

#[inline]
fn sample_count(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)
}

fn too_large(width: u32, height: u32) -> ReliefError {
    ReliefError::InvalidImage(format!("image is too large ({}x{})", width, height))
}
