// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/types/raster.rs
//
// Raster source image owned by a crop session.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ColorType, DynamicImage, GenericImageView, ImageFormat, ImageReader};

use crate::domain::document::core::error::{CropError, DocResult};

/// Represents the decoded raster a crop session works on (PNG, JPEG, BMP, ...).
///
/// Immutable once loaded; the session owns it for its whole lifetime.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// The decoded image, already in display orientation.
    image: DynamicImage,
    /// Container format detected while decoding, if any.
    format: Option<ImageFormat>,
}

impl SourceImage {
    /// Load a raster image from disk.
    pub fn open(path: &Path) -> DocResult<Self> {
        let bytes = fs::read(path).map_err(|source| CropError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Self::from_bytes(&bytes)?;
        log::info!(
            "Opened {} ({}x{})",
            path.display(),
            source.width(),
            source.height()
        );
        Ok(source)
    }

    /// Decode a raster image from encoded bytes (format is sniffed).
    pub fn from_bytes(bytes: &[u8]) -> DocResult<Self> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| CropError::ImageDecode(image::ImageError::IoError(e)))?;
        let format = reader.format();
        let decoded = reader.decode().map_err(CropError::ImageDecode)?;
        let image = apply_orientation(decoded, read_orientation(bytes));

        Ok(Self { image, format })
    }

    /// Wrap an already decoded image.
    #[must_use]
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image,
            format: None,
        }
    }

    /// Returns the pixel dimensions (width, height).
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[must_use]
    pub fn color_type(&self) -> ColorType {
        self.image.color()
    }

    /// Format the image was decoded from, `None` for in-memory images.
    #[must_use]
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Borrow the decoded pixels.
    #[must_use]
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

/// EXIF orientation tag value (1-8), 1 when absent or unreadable.
#[cfg(feature = "exif")]
fn read_orientation(bytes: &[u8]) -> u32 {
    let mut cursor = Cursor::new(bytes);
    exif::Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .unwrap_or(1)
}

#[cfg(not(feature = "exif"))]
fn read_orientation(_bytes: &[u8]) -> u32 {
    1
}

/// Bring the image into the orientation the user sees on screen.
///
/// Uses the `DynamicImage` transforms so the color type is preserved.
fn apply_orientation(image: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => image.fliph(),
        3 => image.rotate180(),
        4 => image.flipv(),
        5 => image.rotate90().fliph(),
        6 => image.rotate90(),
        7 => image.rotate270().fliph(),
        8 => image.rotate270(),
        _ => image,
    }
}
