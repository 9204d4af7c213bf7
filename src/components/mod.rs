// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the ROI editor

pub mod point_list;
pub mod preset_toolbar;
pub mod roi_canvas;

// Re-export commonly used widget views and types
pub use point_list::{manual_entry, point_list};
pub use preset_toolbar::{preset_toolbar, status_row};
pub use roi_canvas::{PolygonUpdate, QueuedCommand, roi_canvas_view};
