// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for RoiCanvasWidget

use super::{PolygonUpdate, RoiCanvasWidget};
use crate::editing::EditorCommand;
use crate::polygon::Polygon;
use crate::stream::{StreamFrame, StreamHealth};
use std::marker::PhantomData;
use std::sync::Arc;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// A command together with the serial it was issued under. The canvas
/// applies each serial at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedCommand {
    pub serial: u64,
    pub command: EditorCommand,
}

/// Create the ROI canvas.
///
/// `polygon` is the owner's copy; when it differs from the editor's, it
/// replaces it. The callback receives every committed edit and save
/// request.
pub fn roi_canvas_view<State, F>(
    polygon: Polygon,
    health: StreamHealth,
    frame: Option<Arc<StreamFrame>>,
    command: Option<QueuedCommand>,
    on_update: F,
) -> RoiCanvasView<State, F>
where
    F: Fn(&mut State, PolygonUpdate),
{
    RoiCanvasView {
        polygon,
        health,
        frame,
        command,
        on_update,
        phantom: PhantomData,
    }
}

/// The Xilem View for RoiCanvasWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct RoiCanvasView<State, F> {
    polygon: Polygon,
    health: StreamHealth,
    frame: Option<Arc<StreamFrame>>,
    command: Option<QueuedCommand>,
    on_update: F,
    phantom: PhantomData<fn() -> State>,
}

fn same_frame(a: &Option<Arc<StreamFrame>>, b: &Option<Arc<StreamFrame>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl<State, F> ViewMarker for RoiCanvasView<State, F> {}

impl<State: 'static, F: Fn(&mut State, PolygonUpdate) + 'static> View<State, (), ViewCtx>
    for RoiCanvasView<State, F>
{
    type Element = Pod<RoiCanvasWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let mut widget = RoiCanvasWidget::new(self.polygon.clone());
        widget.session.set_stream_health(self.health);
        widget.frame = self.frame.clone();
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        let mut widget = element.downcast::<RoiCanvasWidget>();
        let mut changed = false;

        // Only a change on the owner's side counts as an external edit. The
        // owner echoes our own commits back, and lags behind during a drag.
        if self.polygon != prev.polygon
            && widget.widget.session.set_external_polygon(&self.polygon)
        {
            tracing::debug!(
                "[RoiCanvasView::rebuild] external polygon with {} points",
                self.polygon.len()
            );
            changed = true;
        }

        if widget.widget.session.set_stream_health(self.health) {
            changed = true;
        }

        if !same_frame(&self.frame, &prev.frame) {
            widget.widget.frame = self.frame.clone();
            changed = true;
        }

        if let Some(queued) = self.command
            && prev.command.map(|c| c.serial) != Some(queued.serial)
        {
            widget.widget.apply_command(queued.command);
            changed = true;
        }

        if changed {
            widget.ctx.request_render();
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<PolygonUpdate>() {
            Some(update) => {
                tracing::debug!(
                    "[RoiCanvasView::message] {} points, save_requested={}",
                    update.polygon.len(),
                    update.save_requested
                );
                (self.on_update)(app_state, *update);
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
