// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Fixed preset zones in native space

use super::Polygon;
use kurbo::Point;

/// Named quadrilateral shortcuts shown in the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Almost the whole frame, with a 50 px margin
    FullFrame,
    /// A gate in the middle of the frame
    CenterGate,
    /// A doorway on the left side of the frame
    LeftDoor,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::FullFrame, Preset::CenterGate, Preset::LeftDoor];

    pub fn display_name(self) -> &'static str {
        match self {
            Preset::FullFrame => "Full Frame",
            Preset::CenterGate => "Center Gate",
            Preset::LeftDoor => "Left Door",
        }
    }

    /// The four corners, clockwise from top-left
    pub fn corners(self) -> [Point; 4] {
        let [x0, y0, x1, y1] = match self {
            Preset::FullFrame => [50.0, 50.0, 1230.0, 670.0],
            Preset::CenterGate => [400.0, 150.0, 880.0, 600.0],
            Preset::LeftDoor => [50.0, 100.0, 500.0, 670.0],
        };
        [
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    pub fn polygon(self) -> Polygon {
        Polygon::from_points(self.corners().to_vec())
    }
}
