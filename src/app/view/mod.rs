// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View state: what part of the image is visible and what is selected on it.

pub mod crop;
pub mod viewport;
