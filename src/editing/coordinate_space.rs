// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Mapping between native (persisted) space and display (on-screen) space
//!
//! Native space is the fixed reference resolution in `settings::native`.
//! Display space follows the width of the hosting container, keeping the
//! native aspect ratio. Nothing is clamped: off-frame and negative points
//! map through unchanged.

use crate::settings;
use kurbo::{Affine, Point, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateSpace {
    /// Display pixels per native pixel
    scale: f64,
    /// Current canvas size in display pixels
    display_size: Size,
}

impl Default for CoordinateSpace {
    fn default() -> Self {
        Self::native()
    }
}

impl CoordinateSpace {
    /// Identity mapping at the native resolution
    pub fn native() -> Self {
        Self {
            scale: 1.0,
            display_size: Size::new(settings::native::WIDTH, settings::native::HEIGHT),
        }
    }

    /// Derive the mapping from the container width.
    ///
    /// A zero (or unbounded / non-finite) width means the container has not
    /// been laid out yet; the native mapping is used instead.
    pub fn for_container_width(width: f64) -> Self {
        if !width.is_finite() || width <= 0.0 {
            return Self::native();
        }
        let scale = width / settings::native::WIDTH;
        let height = (settings::native::HEIGHT * scale).round();
        Self {
            scale,
            display_size: Size::new(width, height),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn display_size(&self) -> Size {
        self.display_size
    }

    pub fn to_display(&self, native: Point) -> Point {
        Point::new(native.x * self.scale, native.y * self.scale)
    }

    pub fn to_native(&self, display: Point) -> Point {
        Point::new(display.x / self.scale, display.y / self.scale)
    }

    /// Convert a display-pixel radius into native units
    pub fn native_distance(&self, display_distance: f64) -> f64 {
        display_distance / self.scale
    }

    /// Affine that maps native space onto the canvas
    pub fn affine(&self) -> Affine {
        Affine::scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_falls_back_to_native() {
        let space = CoordinateSpace::for_container_width(0.0);
        assert_eq!(space.scale(), 1.0);
        assert_eq!(space.display_size(), Size::new(1280.0, 720.0));
    }

    #[test]
    fn unbounded_width_falls_back_to_native() {
        let space = CoordinateSpace::for_container_width(f64::INFINITY);
        assert_eq!(space, CoordinateSpace::native());
    }

    #[test]
    fn half_width_halves_everything() {
        let space = CoordinateSpace::for_container_width(640.0);
        assert_eq!(space.scale(), 0.5);
        assert_eq!(space.display_size(), Size::new(640.0, 360.0));
        assert_eq!(space.to_display(Point::new(100.0, 50.0)), Point::new(50.0, 25.0));
        assert_eq!(space.native_distance(12.0), 24.0);
    }

    #[test]
    fn display_height_is_rounded() {
        // 1000 / 1280 * 720 = 562.5
        let space = CoordinateSpace::for_container_width(1000.0);
        assert_eq!(space.display_size().height, 563.0);
    }

    #[test]
    fn round_trip_within_tolerance() {
        let widths = [1.0, 333.0, 640.0, 917.5, 1280.0, 1999.0, 3840.0];
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1279.0, 719.0),
            Point::new(-40.5, 12.25),
            Point::new(5000.0, -3000.0),
            Point::new(0.1, 0.2),
        ];
        for w in widths {
            let space = CoordinateSpace::for_container_width(w);
            for p in points {
                let back = space.to_native(space.to_display(p));
                assert!((back.x - p.x).abs() < 1e-6, "x drift at width {w}: {p:?}");
                assert!((back.y - p.y).abs() < 1e-6, "y drift at width {w}: {p:?}");
            }
        }
    }

    #[test]
    fn off_frame_points_are_not_clamped() {
        let space = CoordinateSpace::for_container_width(640.0);
        assert_eq!(space.to_native(Point::new(-10.0, 900.0)), Point::new(-20.0, 1800.0));
    }
}
