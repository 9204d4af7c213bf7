// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! ROI canvas widget - draws the camera frame and the polygon, and turns
//! pointer and keyboard input into polygon edits

mod drawing;
mod keyboard;
mod paint;
mod pointer;
mod view;

pub use view::{QueuedCommand, RoiCanvasView, roi_canvas_view};

use crate::editing::{ClickTracker, EditSession, EditorCommand};
use crate::polygon::Polygon;
use crate::stream::StreamFrame;
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerUpdate, PropertiesMut, PropertiesRef, RegisterCtx,
    TextEvent, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;
use std::sync::Arc;

/// Action emitted after every committed edit and on save requests
#[derive(Debug, Clone)]
pub struct PolygonUpdate {
    pub polygon: Polygon,
    pub can_undo: bool,
    /// If true, persist the polygon
    pub save_requested: bool,
}

/// The ROI editor canvas
pub struct RoiCanvasWidget {
    /// Editor state, history and input state machine
    pub(super) session: EditSession,

    /// Latest camera frame, if any has arrived
    pub(super) frame: Option<Arc<StreamFrame>>,

    /// Double-click detection for primary presses
    pub(super) clicks: ClickTracker,

    /// Update produced outside an event handler (toolbar commands),
    /// delivered on the next animation frame
    pub(super) pending_update: Option<bool>,
}

impl RoiCanvasWidget {
    pub fn new(polygon: Polygon) -> Self {
        Self {
            session: EditSession::new(polygon),
            frame: None,
            clicks: ClickTracker::default(),
            pending_update: None,
        }
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    fn update_action(&self, save_requested: bool) -> PolygonUpdate {
        PolygonUpdate {
            polygon: self.session.polygon.clone(),
            can_undo: self.session.can_undo(),
            save_requested,
        }
    }

    /// Emit a polygon update action
    pub(super) fn emit_update(&self, ctx: &mut EventCtx<'_>, save_requested: bool) {
        ctx.submit_action::<PolygonUpdate>(self.update_action(save_requested));
    }

    /// Apply a toolbar / point-list command. The resulting update is queued
    /// and sent from the render loop.
    pub(super) fn apply_command(&mut self, command: EditorCommand) {
        tracing::debug!("[RoiCanvasWidget] command {:?}", command);
        let outcome = self.session.apply_command(command);
        let save = command == EditorCommand::Save;
        if outcome.is_committed() || save {
            let previous = self.pending_update.unwrap_or(false);
            self.pending_update = Some(previous || save);
        }
    }
}

impl Widget for RoiCanvasWidget {
    type Action = PolygonUpdate;

    fn accepts_focus(&self) -> bool {
        // Keyboard shortcuts are delivered only to the focused widget
        true
    }

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {}

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, _props: &mut PropertiesMut<'_>, event: &Update) {
        if let Update::WidgetAdded = event {
            // Start the render loop
            ctx.request_anim_frame();
        }
    }

    fn on_anim_frame(
        &mut self,
        ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _interval: u64,
    ) {
        if let Some(save_requested) = self.pending_update.take() {
            ctx.submit_action::<PolygonUpdate>(self.update_action(save_requested));
        }
        ctx.request_render();
        ctx.request_anim_frame();
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        let width = bc.max().width;
        self.session
            .set_container_width(if width.is_finite() { width } else { 0.0 });
        bc.constrain(self.session.space.display_size())
    }

    fn paint(&mut self, _ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        let layers = drawing::build_frame(&self.session, self.frame.is_some());
        self.paint_layers(scene, &layers);
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_primary_down(ctx, state);
            }

            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Secondary),
                state,
                ..
            }) => {
                self.handle_secondary_down(ctx, state);
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                self.handle_pointer_move(ctx, current);
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                ..
            }) => {
                self.handle_release(ctx);
            }

            // Leaving the canvas ends a drag the same way a release does
            PointerEvent::Leave(_) | PointerEvent::Cancel(_) => {
                self.handle_release(ctx);
            }

            _ => {}
        }
    }

    fn on_text_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &TextEvent,
    ) {
        if let TextEvent::Keyboard(key_event) = event {
            self.handle_key(ctx, key_event);
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label(format!(
            "ROI editor, {} points",
            self.session.polygon.len()
        ));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Preset;

    #[test]
    fn commands_queue_one_update() {
        let mut widget = RoiCanvasWidget::new(Polygon::new());
        widget.apply_command(EditorCommand::ApplyPreset(Preset::LeftDoor));
        assert_eq!(widget.pending_update, Some(false));
        assert_eq!(widget.session().polygon, Preset::LeftDoor.polygon());

        widget.apply_command(EditorCommand::Save);
        assert_eq!(widget.pending_update, Some(true));

        let update = widget.update_action(true);
        assert!(update.can_undo);
        assert_eq!(update.polygon.len(), 4);
    }

    #[test]
    fn noop_commands_queue_nothing() {
        let mut widget = RoiCanvasWidget::new(Polygon::new());
        widget.apply_command(EditorCommand::Undo);
        widget.apply_command(EditorCommand::Clear);
        widget.apply_command(EditorCommand::RemoveVertex(3));
        assert_eq!(widget.pending_update, None);
    }
}
