// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor plumbing for AppState: commands out, polygon updates in

use super::AppState;
use crate::components::{PolygonUpdate, QueuedCommand};
use crate::editing::EditorCommand;

impl AppState {
    /// Queue a command for the canvas under a fresh serial
    pub fn issue(&mut self, command: EditorCommand) {
        self.command_serial += 1;
        self.command = Some(QueuedCommand {
            serial: self.command_serial,
            command,
        });
    }

    /// Handle a committed edit or save request from the canvas
    pub fn on_polygon_update(&mut self, update: PolygonUpdate) {
        self.can_undo = update.can_undo;
        if update.polygon != self.polygon {
            self.replace_polygon(update.polygon);
            self.dirty = true;
            // Stale validation errors go away once the user edits again
            if self.status.as_ref().is_some_and(|s| s.is_error) {
                self.status = None;
            }
        }
        if update.save_requested {
            self.save_roi();
        }
    }

    /// Label for the point-count badge
    pub fn point_count_label(&self) -> String {
        match self.polygon.len() {
            1 => "1 point".to_string(),
            n => format!("{n} points"),
        }
    }

    /// "Unsaved changes" while dirty, otherwise the last save time
    pub fn save_state_label(&self) -> Option<String> {
        if self.dirty {
            return Some("Unsaved changes".to_string());
        }
        self.last_saved
            .as_ref()
            .map(|time| format!("Last saved {time}"))
    }
}
