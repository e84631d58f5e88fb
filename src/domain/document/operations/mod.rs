// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/mod.rs

pub mod crop;
pub mod export;
