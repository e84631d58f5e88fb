// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/mod.rs
//
// Document module root.

pub mod core;
pub mod operations;
pub mod types;

pub use self::core::error::{CropError, DocResult};
pub use self::operations::crop::{CropBounds, extract_crop};
pub use self::operations::export::{OutputFormat, save_crop};
pub use self::types::raster::SourceImage;
