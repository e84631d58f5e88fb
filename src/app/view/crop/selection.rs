// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/selection.rs
//
// Rubber-band selection state machine. Pure state: drawing the rectangle is
// left to the host.

use crate::domain::document::{CropBounds, CropError, DocResult};

/// Anchor and cursor of a rubber-band rectangle, both in image space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    pub anchor: (f32, f32),
    pub cursor: (f32, f32),
}

impl SelectionRect {
    fn at(point: (f32, f32)) -> Self {
        Self {
            anchor: point,
            cursor: point,
        }
    }

    /// Normalized `(left, top, right, bottom)`, unclamped.
    pub fn normalized(&self) -> (f32, f32, f32, f32) {
        let (x0, y0) = self.anchor;
        let (x1, y1) = self.cursor;
        (x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
    }
}

/// Where the selection currently is in its press/drag/release cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    /// Pointer held down, rectangle growing.
    Selecting(SelectionRect),
    /// Pointer released, rectangle finalized.
    Selected(SelectionRect),
}

#[derive(Debug, Clone, Default)]
pub struct CropSelection {
    state: SelectionState,
}

impl CropSelection {
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Rectangle to render, whether still growing or finalized.
    pub fn rect(&self) -> Option<SelectionRect> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Selecting(rect) | SelectionState::Selected(rect) => Some(rect),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SelectionState::Selecting(_))
    }

    /// Start a new selection at an image-space point, discarding any old one.
    pub fn press(&mut self, point: (f32, f32)) {
        self.state = SelectionState::Selecting(SelectionRect::at(point));
        log::debug!("Selection started at {point:?}");
    }

    /// Move the cursor corner. Ignored unless a press is in progress.
    pub fn drag(&mut self, point: (f32, f32)) {
        if let SelectionState::Selecting(rect) = &mut self.state {
            rect.cursor = point;
        }
    }

    /// Finalize the rectangle. Ignored unless a press is in progress.
    pub fn release(&mut self) {
        if let SelectionState::Selecting(rect) = self.state {
            self.state = SelectionState::Selected(rect);
            log::debug!("Selection finalized: {:?}", rect.normalized());
        }
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::Idle;
    }

    /// Integer crop bounds for a `width` x `height` image.
    ///
    /// `allow_selecting` decides whether a rectangle that is still being
    /// dragged counts; when it does not, it is reported as no selection.
    pub fn crop_bounds(
        &self,
        width: u32,
        height: u32,
        allow_selecting: bool,
    ) -> DocResult<CropBounds> {
        let rect = match self.state {
            SelectionState::Selected(rect) => rect,
            SelectionState::Selecting(rect) if allow_selecting => rect,
            _ => return Err(CropError::NoSelection),
        };
        CropBounds::from_corners(rect.anchor, rect.cursor, width, height)
    }
}
