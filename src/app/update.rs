// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message dispatch: apply one host event to a session.

use std::path::PathBuf;

use image::DynamicImage;

use crate::app::message::CropMessage;
use crate::app::model::CropSession;
use crate::domain::document::DocResult;

/// What an event produced beyond the state change itself.
#[derive(Debug)]
pub enum Outcome {
    Updated,
    Cropped(DynamicImage),
    Saved(PathBuf),
}

impl CropSession {
    /// Apply one event.
    ///
    /// A failing command leaves the selection untouched; its message is kept
    /// in [`CropSession::error`] for the host to show and also returned.
    pub fn update(&mut self, message: CropMessage) -> DocResult<Outcome> {
        log::trace!("{message:?}");

        let result = match message {
            CropMessage::Press { x, y } => {
                self.clear_error();
                self.press(x, y);
                Ok(Outcome::Updated)
            }
            CropMessage::Drag { x, y } => {
                self.drag(x, y);
                Ok(Outcome::Updated)
            }
            CropMessage::Release => {
                self.release();
                Ok(Outcome::Updated)
            }
            CropMessage::Wheel(input) => {
                self.wheel(input);
                Ok(Outcome::Updated)
            }
            CropMessage::Scroll { axis, units } => {
                self.scroll(axis, units);
                Ok(Outcome::Updated)
            }
            CropMessage::ScrollTo { x, y } => {
                self.scroll_to(x, y);
                Ok(Outcome::Updated)
            }
            CropMessage::Resize { width, height } => {
                self.resize_viewport(width, height);
                Ok(Outcome::Updated)
            }
            CropMessage::Reset => {
                self.clear_error();
                self.reset();
                Ok(Outcome::Updated)
            }
            CropMessage::Crop => self.crop().map(Outcome::Cropped),
            CropMessage::Save(path) => self.save(&path).map(Outcome::Saved),
        };

        if let Err(err) = &result {
            if err.is_selection_error() {
                log::warn!("{err}");
            } else {
                log::error!("{err}");
            }
            self.set_error(err.to_string());
        }

        result
    }
}
