// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: image documents and the operations applied to them.
// Nothing in here knows about pointers, wheels or scroll offsets.

pub mod document;
