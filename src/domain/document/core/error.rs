// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/core/error.rs
//
// Error taxonomy for crop sessions.

use std::path::PathBuf;

/// Result alias used across the document layer.
pub type DocResult<T> = Result<T, CropError>;

/// Everything that can go wrong between a press and a saved crop.
///
/// None of these are fatal: the session reports them and keeps its state.
#[derive(Debug, thiserror::Error)]
pub enum CropError {
    #[error("no selection: draw a rectangle first")]
    NoSelection,

    #[error("select a region: selection is {width}x{height} pixels")]
    DegenerateSelection { width: u32, height: u32 },

    #[error(
        "crop bounds ({},{})-({},{}) exceed image bounds {}x{}",
        bounds.0, bounds.1, bounds.2, bounds.3, image_size.0, image_size.1
    )]
    OutOfBounds {
        bounds: (u32, u32, u32, u32),
        image_size: (u32, u32),
    },

    #[error("failed to decode image: {0}")]
    ImageDecode(#[source] image::ImageError),

    #[error("failed to encode image: {0}")]
    ImageEncode(#[source] image::ImageError),

    #[error("unsupported output format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CropError {
    /// True for errors caused by the user's selection rather than by I/O.
    #[must_use]
    pub fn is_selection_error(&self) -> bool {
        matches!(self, Self::NoSelection | Self::DegenerateSelection { .. })
    }
}
