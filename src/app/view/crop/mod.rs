// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop selection module: rubber-band selection state.

mod selection;

pub use selection::{CropSelection, SelectionRect, SelectionState};
