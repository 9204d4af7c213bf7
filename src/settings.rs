// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`, and
//! deployment-specific values (URLs, file paths) belong in `config.rs`.

// ============================================================================
// NATIVE RESOLUTION
// ============================================================================
/// Width of the reference frame the analytics pipeline expects
const NATIVE_WIDTH: f64 = 1280.0;

/// Height of the reference frame the analytics pipeline expects
const NATIVE_HEIGHT: f64 = 720.0;

// ============================================================================
// HIT TESTING
// ============================================================================
// All thresholds are in display pixels; they are divided by the current
// scale before being compared against native-space distances.

/// Radius for grabbing a vertex with the primary button
const VERTEX_HIT_RADIUS: f64 = 12.0;

/// Radius for deleting a vertex (right-click / double-click)
const DELETE_HIT_RADIUS: f64 = 16.0;

/// Radius for grabbing an edge midpoint to insert a vertex
const MIDPOINT_HIT_RADIUS: f64 = 12.0;

// ============================================================================
// HISTORY
// ============================================================================
/// Maximum number of undo snapshots kept (oldest evicted first)
const HISTORY_CAPACITY: usize = 30;

// ============================================================================
// DOUBLE CLICK
// ============================================================================
/// Maximum time between two primary presses to count as a double-click
const DOUBLE_CLICK_MILLIS: u64 = 400;

/// Maximum display-space distance between the two presses
const DOUBLE_CLICK_DISTANCE: f64 = 4.0;

// ============================================================================
// STREAM SETTINGS
// ============================================================================
/// Seconds between health probes
const HEALTH_PROBE_INTERVAL_SECS: u64 = 8;

/// Seconds before a single health probe is treated as failed
const HEALTH_PROBE_TIMEOUT_SECS: u64 = 5;

/// Seconds to wait before reconnecting to the raw MJPEG feed
const FRAME_RECONNECT_SECS: u64 = 2;

/// Upper bound on bytes buffered while looking for a JPEG end marker
const FRAME_MAX_BUFFER: usize = 8 * 1024 * 1024;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Native (persisted) coordinate space
pub mod native {
    /// Reference frame width in native pixels
    pub const WIDTH: f64 = super::NATIVE_WIDTH;

    /// Reference frame height in native pixels
    pub const HEIGHT: f64 = super::NATIVE_HEIGHT;
}

/// Pointer hit-test radii (display pixels)
pub mod hit {
    pub const VERTEX: f64 = super::VERTEX_HIT_RADIUS;
    pub const DELETE: f64 = super::DELETE_HIT_RADIUS;
    pub const MIDPOINT: f64 = super::MIDPOINT_HIT_RADIUS;
}

/// Undo history settings
pub mod history {
    /// Maximum number of snapshots kept
    pub const CAPACITY: usize = super::HISTORY_CAPACITY;
}

/// Double-click detection
pub mod double_click {
    use std::time::Duration;

    pub const WINDOW: Duration = Duration::from_millis(super::DOUBLE_CLICK_MILLIS);
    pub const DISTANCE: f64 = super::DOUBLE_CLICK_DISTANCE;
}

/// Camera stream polling and decoding
pub mod stream {
    /// Default seconds between health probes
    pub const PROBE_INTERVAL_SECS: u64 = super::HEALTH_PROBE_INTERVAL_SECS;

    /// Default per-probe timeout in seconds
    pub const PROBE_TIMEOUT_SECS: u64 = super::HEALTH_PROBE_TIMEOUT_SECS;

    /// Delay before the frame puller reconnects
    pub const RECONNECT_SECS: u64 = super::FRAME_RECONNECT_SECS;

    /// Maximum buffered bytes in the MJPEG splitter
    pub const MAX_BUFFER: usize = super::FRAME_MAX_BUFFER;
}
