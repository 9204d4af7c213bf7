// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Camera stream plumbing: health probing and background frames

pub mod frame;
pub mod health;
pub mod mjpeg;

pub use frame::{FrameError, FrameReady, StreamFrame, run_frame_loop};
pub use health::{HealthReport, ProbeError, StreamHealth, health_url_for, run_probe_loop};
pub use mjpeg::MjpegSplitter;
