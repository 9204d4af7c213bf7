// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer state machine types
//!
//! The editor is always in exactly one of three states. `Dragging` carries
//! the polygon as it was when the drag began so the whole gesture can be
//! committed to history as a single step on release.

use crate::polygon::Polygon;
use kurbo::Point;
use std::time::{Duration, Instant};

/// Which pointer button triggered an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary (usually left) button: add, insert, drag
    Primary,
    /// Secondary (usually right) button: delete
    Secondary,
}

/// An in-progress vertex drag
#[derive(Debug, Clone, PartialEq)]
pub struct Drag {
    /// Index of the vertex being moved
    pub index: usize,
    /// Polygon captured when the drag began
    pub start: Polygon,
}

/// Input controller state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    #[default]
    Idle,
    /// Pointer is over a vertex (visual feedback only)
    Hovering(usize),
    Dragging(Drag),
}

impl InputState {
    pub fn hovered_index(&self) -> Option<usize> {
        match self {
            InputState::Idle => None,
            InputState::Hovering(index) => Some(*index),
            // A drag always starts on the hovered vertex
            InputState::Dragging(drag) => Some(drag.index),
        }
    }

    pub fn dragged_index(&self) -> Option<usize> {
        match self {
            InputState::Dragging(drag) => Some(drag.index),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, InputState::Dragging(_))
    }
}

/// Detects double-clicks from successive primary presses
#[derive(Debug, Clone)]
pub struct ClickTracker {
    last_time: Option<Instant>,
    last_position: Option<Point>,
    window: Duration,
    max_distance: f64,
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(
            crate::settings::double_click::WINDOW,
            crate::settings::double_click::DISTANCE,
        )
    }
}

impl ClickTracker {
    pub fn new(window: Duration, max_distance: f64) -> Self {
        Self {
            last_time: None,
            last_position: None,
            window,
            max_distance,
        }
    }

    /// Record a press at `position` (display space) and report whether it
    /// completes a double-click. A completed double-click resets the
    /// tracker so a third press starts a new sequence.
    pub fn register(&mut self, position: Point, now: Instant) -> bool {
        let is_double = match (self.last_time, self.last_position) {
            (Some(time), Some(pos)) => {
                now.saturating_duration_since(time) <= self.window
                    && pos.distance(position) <= self.max_distance
            }
            _ => false,
        };

        if is_double {
            self.last_time = None;
            self.last_position = None;
        } else {
            self.last_time = Some(now);
            self.last_position = Some(position);
        }
        is_double
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_and_drag_indices() {
        assert_eq!(InputState::Idle.hovered_index(), None);
        assert_eq!(InputState::Hovering(2).hovered_index(), Some(2));
        assert_eq!(InputState::Hovering(2).dragged_index(), None);

        let drag = InputState::Dragging(Drag {
            index: 1,
            start: Polygon::new(),
        });
        assert_eq!(drag.hovered_index(), Some(1));
        assert_eq!(drag.dragged_index(), Some(1));
        assert!(drag.is_dragging());
    }

    #[test]
    fn two_quick_presses_make_a_double_click() {
        let mut tracker = ClickTracker::new(Duration::from_millis(400), 4.0);
        let t0 = Instant::now();
        assert!(!tracker.register(Point::new(10.0, 10.0), t0));
        assert!(tracker.register(Point::new(11.0, 10.0), t0 + Duration::from_millis(150)));
        // Third press starts over
        assert!(!tracker.register(Point::new(11.0, 10.0), t0 + Duration::from_millis(200)));
    }

    #[test]
    fn slow_or_distant_presses_are_single_clicks() {
        let mut tracker = ClickTracker::new(Duration::from_millis(400), 4.0);
        let t0 = Instant::now();
        tracker.register(Point::new(10.0, 10.0), t0);
        assert!(!tracker.register(Point::new(10.0, 10.0), t0 + Duration::from_millis(900)));
        assert!(!tracker.register(Point::new(50.0, 10.0), t0 + Duration::from_millis(950)));
    }
}
