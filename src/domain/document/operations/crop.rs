// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/crop.rs
//
// Crop bounds and sub-image extraction.

use image::{DynamicImage, GenericImageView};

use crate::constant::MIN_CROP_EXTENT;
use crate::domain::document::core::error::{CropError, DocResult};

/// Crop bounds in pixel coordinates, right and bottom exclusive.
///
/// Pure domain model: constructed through [`CropBounds::from_corners`] it is
/// guaranteed that `left < right <= width` and `top < bottom <= height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBounds {
    /// Normalize two opposite corners (image space, any order) into bounds
    /// clamped to a `width` x `height` image.
    ///
    /// The minimum extent is checked on the clamped span before coordinates
    /// are truncated to whole pixels, so a drag shorter than one pixel is
    /// degenerate even when it crosses a pixel boundary.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_corners(
        (x0, y0): (f32, f32),
        (x1, y1): (f32, f32),
        width: u32,
        height: u32,
    ) -> DocResult<Self> {
        let (lo_x, hi_x) = clamp_span(x0, x1, width);
        let (lo_y, hi_y) = clamp_span(y0, y1, height);

        let span_w = hi_x - lo_x;
        let span_h = hi_y - lo_y;
        let min_extent = MIN_CROP_EXTENT as f32;
        if span_w < min_extent || span_h < min_extent {
            return Err(CropError::DegenerateSelection {
                width: span_w as u32,
                height: span_h as u32,
            });
        }

        Ok(Self {
            left: lo_x as u32,
            top: lo_y as u32,
            right: hi_x as u32,
            bottom: hi_y as u32,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.left, self.top, self.right, self.bottom)
    }

    /// True when the bounds lie entirely inside a `width` x `height` image.
    #[must_use]
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && self.right <= width
            && self.bottom <= height
    }
}

/// Order two coordinates and clamp them to `[0, extent]`.
fn clamp_span(a: f32, b: f32, extent: u32) -> (f32, f32) {
    let max = extent as f32;
    (a.min(b).clamp(0.0, max), a.max(b).clamp(0.0, max))
}

/// Cut `[left, right) x [top, bottom)` out of `source`.
///
/// The result keeps the source's color type; nothing is converted or
/// re-encoded. Does not touch `source`.
pub fn extract_crop(source: &DynamicImage, bounds: CropBounds) -> DocResult<DynamicImage> {
    let (width, height) = source.dimensions();
    if !bounds.fits(width, height) {
        return Err(CropError::OutOfBounds {
            bounds: bounds.as_tuple(),
            image_size: (width, height),
        });
    }

    Ok(source.crop_imm(bounds.left, bounds.top, bounds.width(), bounds.height()))
}
