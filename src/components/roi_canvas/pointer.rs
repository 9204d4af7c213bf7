// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for RoiCanvasWidget

use super::RoiCanvasWidget;
use crate::editing::{EditOutcome, MouseButton};
use masonry::core::{EventCtx, PointerState};
use std::time::Instant;

impl RoiCanvasWidget {
    // ============================================================================
    // POINTER EVENT HANDLERS
    // ============================================================================

    fn finish(&self, ctx: &mut EventCtx<'_>, outcome: EditOutcome) {
        if outcome.is_committed() {
            self.emit_update(ctx, false);
        }
        if outcome.needs_repaint() {
            ctx.request_render();
        }
    }

    pub(super) fn handle_primary_down(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        ctx.request_focus();
        ctx.capture_pointer();

        let local_pos = ctx.local_position(state.position);
        tracing::debug!("[RoiCanvasWidget] primary down at {:?}", local_pos);

        // Second press of a double-click on a vertex deletes it; anywhere
        // else it behaves like a normal press
        if self.clicks.register(local_pos, Instant::now()) {
            let outcome = self.session.double_click(local_pos);
            if outcome.is_committed() {
                self.finish(ctx, outcome);
                return;
            }
        }

        let outcome = self.session.pointer_down(local_pos, MouseButton::Primary);
        self.finish(ctx, outcome);
    }

    pub(super) fn handle_secondary_down(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        ctx.request_focus();

        let local_pos = ctx.local_position(state.position);
        let outcome = self.session.pointer_down(local_pos, MouseButton::Secondary);
        self.finish(ctx, outcome);
    }

    pub(super) fn handle_pointer_move(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        let local_pos = ctx.local_position(state.position);
        let outcome = self.session.pointer_move(local_pos);
        self.finish(ctx, outcome);
    }

    /// Release, leave and cancel all commit an in-progress drag
    pub(super) fn handle_release(&mut self, ctx: &mut EventCtx<'_>) {
        let outcome = self.session.pointer_up();
        self.finish(ctx, outcome);
    }
}
