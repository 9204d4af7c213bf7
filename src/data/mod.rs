// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) that drives the Xilem reactive UI.
//!
//! `AppState` is the owner the canvas reports to: it keeps the last
//! committed polygon, the stream status and the save status. Sub-modules
//! split the methods by domain: file I/O and editor commands.

mod editor;
mod file_io;

use crate::components::QueuedCommand;
use crate::config::Config;
use crate::model::JsonRoiFile;
use crate::polygon::Polygon;
use crate::stream::{StreamFrame, StreamHealth};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use xilem::WindowId;

/// One-line message under the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application state
pub struct AppState {
    /// Runtime configuration
    pub config: Config,

    /// Last committed polygon, as reported by the canvas
    pub polygon: Polygon,

    /// Whether the canvas has anything to undo
    pub can_undo: bool,

    /// True when the polygon differs from what was last saved or loaded
    pub dirty: bool,

    /// Latest probe result
    pub stream_health: StreamHealth,

    /// Latest decoded camera frame
    pub frame: Option<Arc<StreamFrame>>,

    /// Most recent toolbar / point-list command for the canvas
    pub command: Option<QueuedCommand>,

    /// Serial of the last issued command
    pub(crate) command_serial: u64,

    /// Text of the manual coordinate entry field
    pub manual_text: String,

    /// Validation / save feedback
    pub status: Option<StatusMessage>,

    /// Wall-clock time of the last successful save (`%H:%M:%S`)
    pub last_saved: Option<String>,

    /// Where the ROI is persisted
    pub roi_file: JsonRoiFile,

    /// Set while we write the ROI file so the watcher skips our own save
    pub save_in_progress: Arc<AtomicBool>,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    /// Create the state and load the ROI file named in `config`
    pub fn new(config: Config) -> Self {
        let roi_file = JsonRoiFile::new(config.roi_path.clone());
        let (polygon, status) = match file_io::load_polygon(&roi_file) {
            Ok(polygon) => {
                tracing::info!(
                    "Loaded {} ROI points from {}",
                    polygon.len(),
                    roi_file.path().display()
                );
                (polygon, None)
            }
            Err(e) => {
                tracing::error!("{:#}", e);
                (Polygon::new(), Some(StatusMessage::error(format!("{e:#}"))))
            }
        };

        let manual_text = crate::model::format_points(polygon.points());
        Self {
            config,
            polygon,
            can_undo: false,
            dirty: false,
            stream_health: StreamHealth::Probing,
            frame: None,
            command: None,
            command_serial: 0,
            manual_text,
            status,
            last_saved: None,
            roi_file,
            save_in_progress: Arc::new(AtomicBool::new(false)),
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Record a probe result. Logged by the probe loop, not here.
    pub fn set_stream_health(&mut self, health: StreamHealth) {
        self.stream_health = health;
        if !health.is_healthy() {
            self.frame = None;
        }
    }

    pub fn set_frame(&mut self, frame: Arc<StreamFrame>) {
        self.frame = Some(frame);
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}
