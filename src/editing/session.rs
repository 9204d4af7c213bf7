// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - the editor state plus the input controller
//!
//! All pointer positions handed to this type are in display space; they are
//! converted to native space here. Every mutation pushes exactly one
//! snapshot of the pre-mutation polygon, except drags, which push once on
//! release.

use super::coordinate_space::CoordinateSpace;
use super::mouse::{Drag, InputState, MouseButton};
use super::undo::UndoState;
use crate::polygon::{Polygon, Preset, ValidationError};
use crate::settings;
use crate::stream::StreamHealth;
use kurbo::Point;

/// What an input operation did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Nothing changed
    Unchanged,
    /// Only hover feedback changed
    Hover,
    /// The polygon changed as part of an in-progress drag
    Preview,
    /// The polygon changed and the change is committed
    Committed,
}

impl EditOutcome {
    pub fn is_committed(self) -> bool {
        self == EditOutcome::Committed
    }

    pub fn needs_repaint(self) -> bool {
        self != EditOutcome::Unchanged
    }
}

/// Actions routed into the editor from outside the canvas (toolbar, point
/// list) so that they go through the same history as pointer edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    ApplyPreset(Preset),
    Undo,
    Clear,
    RemoveVertex(usize),
    Save,
}

/// Editing state for one ROI editor instance
#[derive(Debug, Clone)]
pub struct EditSession {
    /// The polygon being edited (native space)
    pub polygon: Polygon,

    /// Display <-> native mapping
    pub space: CoordinateSpace,

    /// Latest result of the stream health probe
    pub stream_health: StreamHealth,

    /// Pointer state machine
    input: InputState,

    /// Undo snapshots
    history: UndoState<Polygon>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(Polygon::new())
    }
}

impl EditSession {
    pub fn new(polygon: Polygon) -> Self {
        Self {
            polygon,
            space: CoordinateSpace::native(),
            stream_health: StreamHealth::Probing,
            input: InputState::Idle,
            history: UndoState::default(),
        }
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.input
            .hovered_index()
            .filter(|&i| i < self.polygon.len())
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.input
            .dragged_index()
            .filter(|&i| i < self.polygon.len())
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Update the display mapping from the container width
    pub fn set_container_width(&mut self, width: f64) {
        self.space = CoordinateSpace::for_container_width(width);
    }

    /// Record a new probe result. Never touches the polygon or history.
    pub fn set_stream_health(&mut self, health: StreamHealth) -> bool {
        if self.stream_health == health {
            return false;
        }
        self.stream_health = health;
        true
    }

    // ========================================================================
    // POINTER INPUT
    // ========================================================================

    /// Convert a display position to a whole-pixel native point
    fn native_point(&self, display: Point) -> Point {
        let native = self.space.to_native(display);
        Point::new(native.x.round(), native.y.round())
    }

    fn hit_radius(&self, display_radius: f64) -> f64 {
        self.space.native_distance(display_radius)
    }

    /// Pointer pressed at `display` with `button`
    pub fn pointer_down(&mut self, display: Point, button: MouseButton) -> EditOutcome {
        match button {
            MouseButton::Primary => self.primary_down(display),
            MouseButton::Secondary => self.delete_at(display),
        }
    }

    fn primary_down(&mut self, display: Point) -> EditOutcome {
        let native = self.space.to_native(display);

        // 1. Grab an existing vertex; history is pushed on release
        if let Some(index) = self
            .polygon
            .hit_test(native, self.hit_radius(settings::hit::VERTEX))
        {
            tracing::debug!("Drag start on vertex {}", index);
            self.input = InputState::Dragging(Drag {
                index,
                start: self.polygon.clone(),
            });
            return EditOutcome::Hover;
        }

        let point = self.native_point(display);

        // 2. Insert on an edge midpoint and drag the new vertex right away
        if let Some(edge) = self
            .polygon
            .hit_test_midpoint(native, self.hit_radius(settings::hit::MIDPOINT))
        {
            self.history.push(self.polygon.clone());
            self.polygon = self.polygon.insert_after(edge, point);
            let index = edge + 1;
            tracing::info!("Inserted vertex {} on edge {}", index, edge);
            self.input = InputState::Dragging(Drag {
                index,
                start: self.polygon.clone(),
            });
            return EditOutcome::Committed;
        }

        // 3. Append
        self.history.push(self.polygon.clone());
        self.polygon = self.polygon.append(point);
        self.input = InputState::Idle;
        tracing::info!(
            "Added vertex {} at ({}, {})",
            self.polygon.len(),
            point.x,
            point.y
        );
        EditOutcome::Committed
    }

    /// Delete the vertex under `display` using the forgiving delete radius
    pub fn delete_at(&mut self, display: Point) -> EditOutcome {
        let native = self.space.to_native(display);
        match self
            .polygon
            .hit_test(native, self.hit_radius(settings::hit::DELETE))
        {
            Some(index) => self.remove_vertex(index),
            None => EditOutcome::Unchanged,
        }
    }

    /// Double-click: same as a secondary click on a vertex
    pub fn double_click(&mut self, display: Point) -> EditOutcome {
        self.delete_at(display)
    }

    pub fn pointer_move(&mut self, display: Point) -> EditOutcome {
        if let InputState::Dragging(drag) = &self.input {
            let index = drag.index;
            let point = self.native_point(display);
            if self.polygon.get(index) == Some(point) {
                return EditOutcome::Unchanged;
            }
            self.polygon = self.polygon.replace(index, point);
            return EditOutcome::Preview;
        }

        let native = self.space.to_native(display);
        let hovered = self
            .polygon
            .hit_test(native, self.hit_radius(settings::hit::VERTEX));
        let next = match hovered {
            Some(index) => InputState::Hovering(index),
            None => InputState::Idle,
        };
        if next == self.input {
            return EditOutcome::Unchanged;
        }
        self.input = next;
        EditOutcome::Hover
    }

    /// Release (or pointer leave / cancel): commit an in-progress drag
    pub fn pointer_up(&mut self) -> EditOutcome {
        let InputState::Dragging(drag) = std::mem::take(&mut self.input) else {
            return EditOutcome::Unchanged;
        };

        if drag.start == self.polygon {
            // Click on a vertex without moving it
            return EditOutcome::Hover;
        }

        if let Some(point) = self.polygon.get(drag.index) {
            tracing::info!(
                "Moved vertex {} to ({}, {})",
                drag.index + 1,
                point.x,
                point.y
            );
        }
        self.history.push(drag.start);
        EditOutcome::Committed
    }

    // ========================================================================
    // WHOLE-POLYGON OPERATIONS
    // ========================================================================

    /// Restore the most recent snapshot, discarding any in-progress drag
    pub fn undo(&mut self) -> EditOutcome {
        match self.history.pop() {
            Some(previous) => {
                self.polygon = previous;
                self.input = InputState::Idle;
                tracing::debug!("Undo: restored previous polygon");
                EditOutcome::Committed
            }
            None => {
                tracing::debug!("Undo: history empty");
                EditOutcome::Unchanged
            }
        }
    }

    pub fn clear(&mut self) -> EditOutcome {
        if self.polygon.is_empty() {
            return EditOutcome::Unchanged;
        }
        self.history.push(self.polygon.clone());
        self.polygon = Polygon::new();
        self.input = InputState::Idle;
        tracing::info!("Cleared polygon");
        EditOutcome::Committed
    }

    pub fn apply_preset(&mut self, preset: Preset) -> EditOutcome {
        self.history.push(self.polygon.clone());
        self.polygon = preset.polygon();
        self.input = InputState::Idle;
        tracing::info!("Applied preset '{}'", preset.display_name());
        EditOutcome::Committed
    }

    /// Remove vertex `index`; stale indices are ignored
    pub fn remove_vertex(&mut self, index: usize) -> EditOutcome {
        if index >= self.polygon.len() {
            tracing::debug!("Ignoring delete of stale vertex index {}", index);
            return EditOutcome::Unchanged;
        }
        self.history.push(self.polygon.clone());
        self.polygon = self.polygon.remove(index);
        self.input = InputState::Idle;
        tracing::info!("Deleted vertex {}", index + 1);
        EditOutcome::Committed
    }

    /// Apply a command issued outside the canvas. `Save` does not touch the
    /// polygon; the caller turns it into a save request.
    pub fn apply_command(&mut self, command: EditorCommand) -> EditOutcome {
        match command {
            EditorCommand::ApplyPreset(preset) => self.apply_preset(preset),
            EditorCommand::Undo => self.undo(),
            EditorCommand::Clear => self.clear(),
            EditorCommand::RemoveVertex(index) => self.remove_vertex(index),
            EditorCommand::Save => EditOutcome::Unchanged,
        }
    }

    /// Adopt a polygon supplied by the owner. Structurally equal polygons are
    /// ignored so the owner echoing our own updates back is a no-op.
    pub fn set_external_polygon(&mut self, polygon: &Polygon) -> bool {
        if &self.polygon == polygon {
            return false;
        }
        self.polygon = polygon.clone();
        self.input = InputState::Idle;
        true
    }

    /// The vertex list to hand to persistence, if the polygon is complete
    pub fn save_points(&self) -> Result<Vec<Point>, ValidationError> {
        self.polygon.validate_for_save().map(|points| points.to_vec())
    }
}
