// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod coordinate_space;
pub mod mouse;
pub mod session;
pub mod undo;

pub use coordinate_space::CoordinateSpace;
pub use mouse::{ClickTracker, Drag, InputState, MouseButton};
pub use session::{EditOutcome, EditSession, EditorCommand};
pub use undo::UndoState;
