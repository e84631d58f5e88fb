// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Interactive crop selector for the Happy Document image utility.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;

pub use app::{CropMessage, CropSession, Outcome};
pub use config::AppConfig;
pub use domain::document::{CropBounds, CropError, SourceImage, extract_crop};
