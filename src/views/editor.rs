// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor page: toolbars, canvas, point list, manual entry and status line

use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::core::one_of::Either;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, flex_col, label, sized_box};

use crate::components::{manual_entry, point_list, preset_toolbar, roi_canvas_view, status_row};
use crate::data::AppState;
use crate::theme;

/// The whole editor, top to bottom
pub fn editor_page(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let canvas = roi_canvas_view(
        state.polygon.clone(),
        state.stream_health,
        state.frame.clone(),
        state.command,
        |state: &mut AppState, update| {
            state.on_polygon_update(update);
        },
    );

    let points = if state.polygon.is_empty() {
        Either::B(label(""))
    } else {
        Either::A(point_list(state))
    };

    sized_box(
        flex_col((
            preset_toolbar(state),
            status_row(state),
            canvas,
            points,
            manual_entry(state),
            status_line(state),
        ))
        .gap(theme::size::ROW_GAP.px())
        .cross_axis_alignment(CrossAxisAlignment::Fill),
    )
    .padding(theme::size::PAGE_PADDING)
    .background_color(theme::app::BACKGROUND)
}

fn status_line(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let (text, color) = match &state.status {
        Some(status) if status.is_error => (status.text.clone(), theme::text::ERROR),
        Some(status) => (status.text.clone(), theme::text::SUCCESS),
        None => (String::new(), theme::text::SECONDARY),
    };
    label(text)
        .text_size(theme::size::BUTTON_TEXT)
        .color(color)
}
