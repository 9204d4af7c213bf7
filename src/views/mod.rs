// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Top-level views

mod editor;

pub use editor::editor_page;
