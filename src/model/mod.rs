// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! ROI persistence

pub mod roi_file;

pub use roi_file::{
    JsonRoiFile, RoiFileError, RoiSink, format_point, format_points, load_points, parse_points,
};
