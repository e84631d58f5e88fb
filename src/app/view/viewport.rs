// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/viewport.rs
//
// Scroll state of the canvas the source image is shown on.

use crate::constant::DEFAULT_SCROLL_FRACTION;

/// Scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAxis {
    Horizontal,
    Vertical,
}

/// Visible window onto a canvas whose scrollable extent is the image size.
///
/// Offsets are in image pixels and always stay within
/// `[0, max(0, extent - visible)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    extent: (u32, u32),
    visible: (u32, u32),
    offset_x: f32,
    offset_y: f32,
    /// Pixels per scroll unit; `0.0` selects a tenth of the visible size.
    scroll_increment: f32,
}

impl Viewport {
    pub fn new(extent: (u32, u32), visible: (u32, u32), scroll_increment: f32) -> Self {
        Self {
            extent,
            visible,
            offset_x: 0.0,
            offset_y: 0.0,
            scroll_increment: scroll_increment.max(0.0),
        }
    }

    /// Current scroll offset (x, y).
    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    /// Map a point on the visible canvas to image space.
    pub fn screen_to_image(&self, x: f32, y: f32) -> (f32, f32) {
        (x + self.offset_x, y + self.offset_y)
    }

    /// Map an image-space point back onto the visible canvas.
    pub fn image_to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.offset_x, y - self.offset_y)
    }

    /// Pixels moved by one scroll unit on `axis`.
    pub fn unit_size(&self, axis: ScrollAxis) -> f32 {
        if self.scroll_increment > 0.0 {
            return self.scroll_increment;
        }
        let visible = match axis {
            ScrollAxis::Horizontal => self.visible.0,
            ScrollAxis::Vertical => self.visible.1,
        };
        (visible as f32 / DEFAULT_SCROLL_FRACTION).max(1.0)
    }

    /// Scroll by `units` along `axis`. Positive moves right/down.
    pub fn scroll(&mut self, axis: ScrollAxis, units: i32) {
        if units == 0 {
            return;
        }
        let step = self.unit_size(axis) * units as f32;
        match axis {
            ScrollAxis::Horizontal => self.set_offset(self.offset_x + step, self.offset_y),
            ScrollAxis::Vertical => self.set_offset(self.offset_x, self.offset_y + step),
        }
        log::trace!("Scrolled {axis:?} by {units}: offset {:?}", self.offset());
    }

    /// Jump to an absolute offset, clamped to the scrollable range.
    pub fn set_offset(&mut self, x: f32, y: f32) {
        let (max_x, max_y) = self.max_offset();
        self.offset_x = x.clamp(0.0, max_x);
        self.offset_y = y.clamp(0.0, max_y);
    }

    /// Resize the visible area (e.g. window resized) keeping offsets valid.
    pub fn set_visible(&mut self, width: u32, height: u32) {
        self.visible = (width, height);
        self.set_offset(self.offset_x, self.offset_y);
    }

    fn max_offset(&self) -> (f32, f32) {
        (
            self.extent.0.saturating_sub(self.visible.0) as f32,
            self.extent.1.saturating_sub(self.visible.1) as f32,
        )
    }
}
