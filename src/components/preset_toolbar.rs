// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Toolbar above the canvas (presets, undo / clear / save) and the status
//! row with the stream and point-count badges

use masonry::properties::Padding;
use masonry::properties::types::AsUnit;
use masonry::vello::peniko::Color;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, button, flex_row, label, sized_box};

use crate::data::AppState;
use crate::editing::EditorCommand;
use crate::polygon::Preset;
use crate::stream::StreamHealth;
use crate::theme;

fn badge_color(health: StreamHealth) -> Color {
    match health {
        StreamHealth::Healthy => theme::panel::BADGE_LIVE,
        StreamHealth::Unavailable => theme::panel::BADGE_OFFLINE,
        StreamHealth::Probing => theme::panel::BADGE_PROBING,
    }
}

/// A toolbar button that issues `command`. Disabled buttons are dimmed and
/// do nothing.
fn command_button(
    text: &'static str,
    command: EditorCommand,
    enabled: bool,
) -> impl WidgetView<AppState> + use<> {
    let (bg, fg) = if enabled {
        (theme::panel::BUTTON, theme::text::PRIMARY)
    } else {
        (theme::panel::BUTTON_DISABLED, theme::text::SECONDARY)
    };

    button(
        label(text).text_size(theme::size::BUTTON_TEXT).color(fg),
        move |state: &mut AppState| {
            if enabled {
                state.issue(command);
            }
        },
    )
    .background_color(bg)
    .border_color(theme::panel::OUTLINE)
}

fn badge(text: String, color: Color) -> impl WidgetView<AppState> + use<> {
    sized_box(
        label(text)
            .text_size(theme::size::BADGE_TEXT)
            .color(theme::text::PRIMARY),
    )
    .padding(Padding::from_vh(3.0, 8.0))
    .background_color(color)
    .corner_radius(theme::size::PANEL_RADIUS)
}

/// The toolbar row
pub fn preset_toolbar(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let presets: Vec<_> = Preset::ALL
        .iter()
        .map(|&preset| {
            command_button(
                preset.display_name(),
                EditorCommand::ApplyPreset(preset),
                true,
            )
        })
        .collect();

    flex_row((
        label("Preset:")
            .text_size(theme::size::BUTTON_TEXT)
            .color(theme::text::SECONDARY),
        flex_row(presets).gap(theme::size::ROW_GAP.px()),
        sized_box(label("")).width(12.px()),
        command_button("Undo", EditorCommand::Undo, state.can_undo),
        command_button("Clear", EditorCommand::Clear, !state.polygon.is_empty()),
        command_button("Save", EditorCommand::Save, true),
    ))
    .gap(theme::size::ROW_GAP.px())
    .cross_axis_alignment(CrossAxisAlignment::Center)
}

/// Stream badge, point count and save state
pub fn status_row(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let health = state.stream_health;
    let save_state = state.save_state_label().unwrap_or_default();

    flex_row((
        badge(health.label().to_string(), badge_color(health)),
        badge(state.point_count_label(), theme::panel::BUTTON),
        label(save_state)
            .text_size(theme::size::BADGE_TEXT)
            .color(theme::text::SECONDARY),
    ))
    .gap(theme::size::ROW_GAP.px())
    .cross_axis_alignment(CrossAxisAlignment::Center)
}
