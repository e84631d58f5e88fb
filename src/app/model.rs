// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Crop session state: one source image plus its viewport and selection.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::app::input::{WheelInput, normalize_wheel};
use crate::app::view::crop::CropSelection;
use crate::app::view::viewport::{ScrollAxis, Viewport};
use crate::config::AppConfig;
use crate::domain::document::{CropBounds, DocResult, SourceImage, extract_crop, save_crop};

/// One open image and everything the user has done to it so far.
///
/// Sessions share nothing; two open images are two independent sessions.
#[derive(Debug)]
pub struct CropSession {
    source: SourceImage,
    viewport: Viewport,
    selection: CropSelection,

    natural_scrolling: bool,
    allow_crop_while_selecting: bool,
    jpeg_quality: u8,

    error: Option<String>,
}

impl CropSession {
    pub fn new(source: SourceImage, config: &AppConfig) -> Self {
        let viewport = Viewport::new(
            source.dimensions(),
            (config.viewport_width, config.viewport_height),
            config.scroll_increment,
        );

        Self {
            source,
            viewport,
            selection: CropSelection::default(),
            natural_scrolling: config.natural_scrolling,
            allow_crop_while_selecting: config.allow_crop_while_selecting,
            jpeg_quality: config.jpeg_quality,
            error: None,
        }
    }

    /// Start a session on an image file.
    pub fn open(path: &Path, config: &AppConfig) -> DocResult<Self> {
        Ok(Self::new(SourceImage::open(path)?, config))
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selection(&self) -> &CropSelection {
        &self.selection
    }

    /// Last user-facing error message, if the last command failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // Pointer.

    pub fn press(&mut self, x: f32, y: f32) {
        let point = self.viewport.screen_to_image(x, y);
        self.selection.press(point);
    }

    pub fn drag(&mut self, x: f32, y: f32) {
        let point = self.viewport.screen_to_image(x, y);
        self.selection.drag(point);
    }

    pub fn release(&mut self) {
        self.selection.release();
    }

    pub fn reset(&mut self) {
        self.selection.reset();
        log::debug!("Selection cleared");
    }

    // Scrolling.

    pub fn scroll(&mut self, axis: ScrollAxis, units: i32) {
        self.viewport.scroll(axis, units);
    }

    pub fn wheel(&mut self, input: WheelInput) {
        if let Some((axis, units)) = normalize_wheel(input, self.natural_scrolling) {
            self.scroll(axis, units);
        }
    }

    pub fn scroll_to(&mut self, x: f32, y: f32) {
        self.viewport.set_offset(x, y);
    }

    pub fn resize_viewport(&mut self, width: u32, height: u32) {
        self.viewport.set_visible(width, height);
    }

    // Cropping.

    /// Pixel bounds of the current selection.
    pub fn crop_bounds(&self) -> DocResult<CropBounds> {
        let (width, height) = self.source.dimensions();
        self.selection
            .crop_bounds(width, height, self.allow_crop_while_selecting)
    }

    /// Extract the selected region as a new image.
    pub fn crop(&self) -> DocResult<DynamicImage> {
        let bounds = self.crop_bounds()?;
        extract_crop(self.source.image(), bounds)
    }

    /// Crop and write the result; returns the path actually written.
    pub fn save(&self, path: &Path) -> DocResult<PathBuf> {
        let cropped = self.crop()?;
        save_crop(&cropped, path, self.jpeg_quality)
    }
}
