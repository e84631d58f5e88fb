// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/core/mod.rs

pub mod error;
