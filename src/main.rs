// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! ROI Editor: an interactive counting-zone polygon editor built with Xilem

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    roi_editor::run(EventLoop::with_user_event())
}
