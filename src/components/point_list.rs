// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Point list under the canvas, and the manual coordinate entry field

use masonry::properties::Padding;
use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, button, flex_col, flex_row, label, sized_box, text_input};

use crate::data::AppState;
use crate::editing::EditorCommand;
use crate::model::{format_point, format_points};
use crate::settings;
use crate::theme;

/// Chip text for vertex `index`
pub fn chip_text(index: usize, point: kurbo::Point) -> String {
    format!("P{}: {}", index + 1, format_point(point))
}

/// Clicking a chip deletes that vertex through the editor
fn point_chip(index: usize, point: kurbo::Point) -> impl WidgetView<AppState> + use<> {
    button(
        label(chip_text(index, point))
            .text_size(theme::size::BADGE_TEXT)
            .color(theme::text::PRIMARY),
        move |state: &mut AppState| {
            state.issue(EditorCommand::RemoveVertex(index));
        },
    )
    .background_color(theme::panel::BUTTON)
    .border_color(theme::panel::OUTLINE)
}

/// Heading, compact JSON and one chip per vertex
pub fn point_list(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let heading = format!(
        "ROI points ({}×{})",
        settings::native::WIDTH,
        settings::native::HEIGHT
    );
    let chips: Vec<_> = state
        .polygon
        .points()
        .iter()
        .enumerate()
        .map(|(i, &p)| point_chip(i, p))
        .collect();

    sized_box(
        flex_col((
            label(heading)
                .text_size(theme::size::BUTTON_TEXT)
                .color(theme::text::SECONDARY),
            label(format_points(state.polygon.points()))
                .text_size(theme::size::BADGE_TEXT)
                .color(theme::text::PRIMARY),
            flex_row(chips).gap(4.px()),
        ))
        .gap(6.px())
        .cross_axis_alignment(CrossAxisAlignment::Start),
    )
    .padding(Padding::from_vh(8.0, 10.0))
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(theme::size::BORDER_WIDTH)
    .corner_radius(theme::size::PANEL_RADIUS)
}

/// Free-form `[[x, y], ...]` entry; invalid text leaves the polygon alone
pub fn manual_entry(state: &AppState) -> impl WidgetView<AppState> + use<> {
    flex_col((
        label("Edit coordinates (JSON)")
            .text_size(theme::size::BUTTON_TEXT)
            .color(theme::text::SECONDARY),
        text_input(
            state.manual_text.clone(),
            |state: &mut AppState, new_value: String| {
                state.set_manual_text(new_value);
            },
        )
        .placeholder("[[x, y], ...]"),
    ))
    .gap(4.px())
    .cross_axis_alignment(CrossAxisAlignment::Fill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn chips_are_one_based() {
        assert_eq!(chip_text(0, Point::new(50.0, 50.0)), "P1: [50, 50]");
        assert_eq!(chip_text(3, Point::new(12.5, 7.0)), "P4: [12.5, 7]");
    }
}
