// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! File I/O operations for AppState (save, reload, manual entry)

use super::{AppState, StatusMessage};
use crate::model::{JsonRoiFile, RoiSink, format_points, parse_points};
use crate::polygon::Polygon;
use anyhow::{Context, Result};
use chrono::Local;
use std::sync::atomic::Ordering;

/// Read the ROI file into a polygon
pub(super) fn load_polygon(file: &JsonRoiFile) -> Result<Polygon> {
    let points = file
        .load()
        .with_context(|| format!("Failed to load ROI from {}", file.path().display()))?;
    Ok(Polygon::from_points(points))
}

impl AppState {
    /// Validate and persist the current polygon to the ROI file
    pub fn save_roi(&mut self) {
        let mut sink = self.roi_file.clone();
        let flag = self.save_in_progress.clone();
        flag.store(true, Ordering::SeqCst);
        if !self.save_with(&mut sink) {
            flag.store(false, Ordering::SeqCst);
        }
    }

    /// Validate and hand the polygon to `sink`. Returns true if written.
    ///
    /// A polygon with fewer than three points is rejected without calling
    /// the sink; editing continues either way.
    pub fn save_with(&mut self, sink: &mut impl RoiSink) -> bool {
        let points = match self.polygon.validate_for_save() {
            Ok(points) => points,
            Err(e) => {
                tracing::info!("Save rejected: {}", e);
                self.status = Some(StatusMessage::error(e.to_string()));
                return false;
            }
        };

        match sink.persist(points) {
            Ok(()) => {
                let time = Local::now().format("%H:%M:%S").to_string();
                self.status = Some(StatusMessage::info(format!(
                    "Saved {} points at {}",
                    points.len(),
                    time
                )));
                self.last_saved = Some(time);
                self.dirty = false;
                true
            }
            Err(e) => {
                tracing::error!("Failed to save ROI: {}", e);
                self.status = Some(StatusMessage::error(format!("Save failed: {e}")));
                false
            }
        }
    }

    /// Reload the ROI file after an external change
    pub fn reload_roi_from_disk(&mut self) {
        match load_polygon(&self.roi_file) {
            Ok(polygon) => {
                if polygon == self.polygon {
                    return;
                }
                tracing::info!("Reloaded {} points from disk", polygon.len());
                self.replace_polygon(polygon);
                self.dirty = false;
                self.status = Some(StatusMessage::info("ROI file changed on disk, reloaded"));
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable ROI file: {:#}", e);
                self.status = Some(StatusMessage::error(format!("{e:#}")));
            }
        }
    }

    /// Manual coordinate entry. Text that does not parse as a list of
    /// `[x, y]` pairs is kept in the field but does not touch the polygon.
    pub fn set_manual_text(&mut self, text: String) {
        let parsed = parse_points(&text);
        self.manual_text = text;
        match parsed {
            Some(points) => {
                let polygon = Polygon::from_points(points);
                if polygon != self.polygon {
                    self.polygon = polygon;
                    self.dirty = true;
                }
            }
            None => tracing::debug!("Ignoring malformed manual coordinates"),
        }
    }

    /// Replace the polygon from outside the canvas and resync the entry field
    pub(crate) fn replace_polygon(&mut self, polygon: Polygon) {
        self.manual_text = format_points(polygon.points());
        self.polygon = polygon;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::scratch_state;
    use crate::model::{RoiFileError, RoiSink, load_points};
    use crate::polygon::{Polygon, Preset};
    use kurbo::Point;

    /// Records what it was asked to persist
    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<Vec<Point>>,
    }

    impl RoiSink for RecordingSink {
        fn persist(&mut self, points: &[Point]) -> Result<(), RoiFileError> {
            self.calls.push(points.to_vec());
            Ok(())
        }
    }

    #[test]
    fn incomplete_polygon_is_rejected_without_persisting() {
        let (mut state, _) = scratch_state("roi.json");
        state.polygon = Polygon::from_points(vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
        let mut sink = RecordingSink::default();

        assert!(!state.save_with(&mut sink));
        assert!(sink.calls.is_empty());
        let status = state.status.expect("status");
        assert!(status.is_error);
        assert!(status.text.contains("at least 3"));
        assert_eq!(state.polygon.len(), 2);
    }

    #[test]
    fn points_are_forwarded_unchanged() {
        let (mut state, _) = scratch_state("roi.json");
        // Coincident points and clockwise/counter-clockwise order are kept
        let points = vec![
            Point::new(10.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 20.0),
            Point::new(20.0, 10.0),
        ];
        state.polygon = Polygon::from_points(points.clone());
        state.dirty = true;
        let mut sink = RecordingSink::default();

        assert!(state.save_with(&mut sink));
        assert_eq!(sink.calls, vec![points]);
        assert!(!state.dirty);
        assert!(state.last_saved.is_some());
    }

    #[test]
    fn save_roi_writes_file() {
        let (mut state, path) = scratch_state("roi.json");
        state.polygon = Preset::CenterGate.polygon();
        state.save_roi();
        assert_eq!(
            load_points(&path).expect("load"),
            Preset::CenterGate.corners().to_vec()
        );
    }

    #[test]
    fn manual_entry_ignores_malformed_text() {
        let (mut state, _) = scratch_state("roi.json");
        state.set_manual_text("[[1, 2], [3, 4], [5, 6]]".to_string());
        assert_eq!(state.polygon.len(), 3);
        assert!(state.dirty);

        state.set_manual_text("[[1, 2], [3, 4], [5".to_string());
        assert_eq!(state.polygon.len(), 3);
        assert_eq!(state.manual_text, "[[1, 2], [3, 4], [5");
    }

    #[test]
    fn reload_picks_up_external_edit() {
        let (mut state, path) = scratch_state("roi.json");
        std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        std::fs::write(&path, "[[0,0],[100,0],[100,100]]").expect("write");

        state.reload_roi_from_disk();
        assert_eq!(state.polygon.len(), 3);
        assert_eq!(state.manual_text, "[[0,0],[100,0],[100,100]]");
        assert!(!state.dirty);
    }

    #[test]
    fn unreadable_file_keeps_polygon() {
        let (mut state, path) = scratch_state("roi.json");
        state.polygon = Preset::LeftDoor.polygon();
        std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        std::fs::write(&path, "{\"points\": 3}").expect("write");

        state.reload_roi_from_disk();
        assert_eq!(state.polygon, Preset::LeftDoor.polygon());
        let status = state.status.expect("status");
        assert!(status.is_error);
        assert!(status.text.starts_with("Failed to load ROI"));
    }
}
