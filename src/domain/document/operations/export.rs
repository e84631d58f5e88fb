// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/export.rs
//
// Writing a cropped raster to disk in the format named by the file extension.

use std::borrow::Cow;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat};

use crate::constant::DEFAULT_SAVE_EXT;
use crate::domain::document::core::error::{CropError, DocResult};

/// Output encodings a crop can be saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    Tiff,
    WebP,
}

impl OutputFormat {
    /// Pick the encoding from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> DocResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| CropError::UnsupportedFormat(path.to_path_buf()))?;

        match ext.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "bmp" => Ok(Self::Bmp),
            "gif" => Ok(Self::Gif),
            "tif" | "tiff" => Ok(Self::Tiff),
            "webp" => Ok(Self::WebP),
            _ => Err(CropError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    #[must_use]
    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Bmp => ImageFormat::Bmp,
            Self::Gif => ImageFormat::Gif,
            Self::Tiff => ImageFormat::Tiff,
            Self::WebP => ImageFormat::WebP,
        }
    }

    /// Whether 8-bit RGB pixels survive a save/load cycle unchanged.
    ///
    /// GIF is palette based and quantizes anything beyond 256 colors.
    #[must_use]
    pub fn is_lossless(self) -> bool {
        !matches!(self, Self::Jpeg | Self::Gif)
    }

    /// Convert `image` into a color type the encoder accepts.
    ///
    /// Images that are already acceptable are borrowed, not copied.
    fn prepare<'a>(self, image: &'a DynamicImage) -> Cow<'a, DynamicImage> {
        let color = image.color();
        let supported = match self {
            Self::Png => !matches!(color, ColorType::Rgb32F | ColorType::Rgba32F),
            Self::Jpeg => matches!(color, ColorType::L8 | ColorType::Rgb8),
            Self::Bmp => matches!(
                color,
                ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8
            ),
            Self::Gif | Self::WebP => matches!(color, ColorType::Rgb8 | ColorType::Rgba8),
            Self::Tiff => matches!(
                color,
                ColorType::L8
                    | ColorType::L16
                    | ColorType::Rgb8
                    | ColorType::Rgb16
                    | ColorType::Rgba8
                    | ColorType::Rgba16
            ),
        };

        if supported {
            return Cow::Borrowed(image);
        }

        let converted = match self {
            Self::Jpeg if !color.has_color() => DynamicImage::ImageLuma8(image.to_luma8()),
            Self::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
            Self::Png => DynamicImage::ImageRgba16(image.to_rgba16()),
            _ => DynamicImage::ImageRgba8(image.to_rgba8()),
        };
        log::debug!("Converted {color:?} to {:?} for {self:?}", converted.color());
        Cow::Owned(converted)
    }
}

/// Append the default extension when `path` has none.
#[must_use]
pub fn resolve_save_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_SAVE_EXT)
    }
}

/// Encode `image` to `path`, choosing the format from its extension.
///
/// The image is encoded in memory first; the target file is only touched
/// once encoding has succeeded, so a failed save leaves it as it was.
/// Returns the path actually written (see [`resolve_save_path`]).
pub fn save_crop(image: &DynamicImage, path: &Path, jpeg_quality: u8) -> DocResult<PathBuf> {
    let path = resolve_save_path(path);
    let format = OutputFormat::from_path(&path)?;
    let bytes = encode(&format.prepare(image), format, jpeg_quality)?;

    fs::write(&path, &bytes).map_err(|source| CropError::Io {
        path: path.clone(),
        source,
    })?;

    log::info!(
        "Saved {}x{} crop to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(path)
}

fn encode(image: &DynamicImage, format: OutputFormat, jpeg_quality: u8) -> DocResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());

    match format {
        OutputFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buffer, jpeg_quality.clamp(1, 100));
            image
                .write_with_encoder(encoder)
                .map_err(CropError::ImageEncode)?;
        }
        _ => {
            image
                .write_to(&mut buffer, format.image_format())
                .map_err(CropError::ImageEncode)?;
        }
    }

    Ok(buffer.into_inner())
}
