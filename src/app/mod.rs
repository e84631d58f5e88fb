// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Interaction layer: turns host events into selection and viewport changes.

pub mod input;
pub mod message;
pub mod model;
pub mod script;
mod update;
pub mod view;

pub use message::CropMessage;
pub use model::CropSession;
pub use update::Outcome;
