// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Session messages: pointer, wheel and command events forwarded by the host.

use std::path::PathBuf;

use crate::app::input::WheelInput;
use crate::app::view::viewport::ScrollAxis;

/// One interaction event. Pointer coordinates are relative to the visible
/// canvas; the session translates them with the current scroll offset.
#[derive(Debug, Clone, PartialEq)]
pub enum CropMessage {
    // Pointer.
    Press { x: f32, y: f32 },
    Drag { x: f32, y: f32 },
    Release,

    // Scrolling.
    Wheel(WheelInput),
    Scroll { axis: ScrollAxis, units: i32 },
    ScrollTo { x: f32, y: f32 },
    Resize { width: u32, height: u32 },

    // Commands.
    Reset,
    Crop,
    Save(PathBuf),
}
