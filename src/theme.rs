// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x10, 0x10, 0x10);
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_G: Color = Color::from_rgb8(0x70, 0x70, 0x70);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_K: Color = Color::from_rgb8(0xaa, 0xaa, 0xaa);
const BASE_N: Color = Color::from_rgb8(0xdd, 0xdd, 0xdd);
const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);

// ============================================================================
// GLOBAL BACKGROUNDS
// ============================================================================
const APP_BACKGROUND: Color = BASE_B;

// ============================================================================
// UI TEXT AND LABELS
// ============================================================================
const PRIMARY_UI_TEXT: Color = BASE_N;
const SECONDARY_UI_TEXT: Color = BASE_I;
const ERROR_UI_TEXT: Color = Color::from_rgb8(0xff, 0x6b, 0x6b);
const SUCCESS_UI_TEXT: Color = Color::from_rgb8(0x6a, 0xe7, 0x56);

// ============================================================================
// UI PANELS
// ============================================================================
const PANEL_BACKGROUND: Color = BASE_C;
const PANEL_OUTLINE: Color = BASE_F;
const BUTTON_BACKGROUND: Color = Color::from_rgb8(0x50, 0x50, 0x50);
const BUTTON_DISABLED: Color = BASE_A;

// Stream badge
const BADGE_LIVE: Color = Color::from_rgb8(0x20, 0x8e, 0x56);
const BADGE_OFFLINE: Color = Color::from_rgb8(0xb0, 0x30, 0x30);
const BADGE_PROBING: Color = BASE_G;

// ============================================================================
// CANVAS PLACEHOLDER (no camera frame)
// ============================================================================
const PLACEHOLDER_FILL: Color = Color::from_rgb8(0x1a, 0x1a, 0x2e);
const PLACEHOLDER_TEXT: Color = BASE_K;

// ============================================================================
// POLYGON
// ============================================================================
const POLYGON_FILL: Color = Color::from_rgba8(0x00, 0xc8, 0x64, 0x26);
const POLYGON_STROKE: Color = Color::from_rgb8(0x00, 0xe6, 0x76);
const POLYGON_DASH: Color = Color::from_rgba8(0xff, 0xff, 0xff, 0x4c);

// Edge midpoint insertion dots
const MIDPOINT_FILL: Color = Color::from_rgba8(0xff, 0xff, 0xff, 0x4c);
const MIDPOINT_STROKE: Color = Color::from_rgba8(0x00, 0xe6, 0x76, 0x80);

// ============================================================================
// VERTEX COLORS
// ============================================================================
const VERTEX_INNER: Color = Color::from_rgb8(0x00, 0xe6, 0x76);
const VERTEX_OUTER: Color = Color::from_rgba8(0xff, 0xff, 0xff, 0x66);
const VERTEX_HOVERED_INNER: Color = Color::from_rgb8(0xff, 0x52, 0x52);
const VERTEX_HOVERED_OUTER: Color = Color::from_rgba8(0xff, 0x64, 0x64, 0x99);
const VERTEX_DRAGGED_INNER: Color = Color::from_rgb8(0xff, 0xeb, 0x3b);
const VERTEX_DRAGGED_OUTER: Color = Color::from_rgba8(0xff, 0xff, 0x00, 0x99);
const VERTEX_LABEL: Color = WHITE;

// ============================================================================
// OVERLAYS
// ============================================================================
const TOOLTIP_BACKGROUND: Color = Color::from_rgba8(0x00, 0x00, 0x00, 0xbf);
const TOOLTIP_TEXT: Color = WHITE;
const INSTRUCTION_BACKGROUND: Color = Color::from_rgba8(0x00, 0x00, 0x00, 0x8c);
const INSTRUCTION_TEXT: Color = BASE_N;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Global application background color
pub mod app {
    use super::Color;
    pub const BACKGROUND: Color = super::APP_BACKGROUND;
}

/// Colors for UI text
pub mod text {
    use super::Color;
    pub const PRIMARY: Color = super::PRIMARY_UI_TEXT;
    pub const SECONDARY: Color = super::SECONDARY_UI_TEXT;
    pub const ERROR: Color = super::ERROR_UI_TEXT;
    pub const SUCCESS: Color = super::SUCCESS_UI_TEXT;
}

/// Colors for UI panels, buttons and badges
pub mod panel {
    use super::Color;
    pub const BACKGROUND: Color = super::PANEL_BACKGROUND;
    pub const OUTLINE: Color = super::PANEL_OUTLINE;
    pub const BUTTON: Color = super::BUTTON_BACKGROUND;
    pub const BUTTON_DISABLED: Color = super::BUTTON_DISABLED;
    pub const BADGE_LIVE: Color = super::BADGE_LIVE;
    pub const BADGE_OFFLINE: Color = super::BADGE_OFFLINE;
    pub const BADGE_PROBING: Color = super::BADGE_PROBING;
}

/// Placeholder drawn when no camera frame is available
pub mod placeholder {
    use super::Color;
    pub const FILL: Color = super::PLACEHOLDER_FILL;
    pub const TEXT: Color = super::PLACEHOLDER_TEXT;
    pub const FONT_SIZE: f32 = 16.0;
}

/// Colors for the ROI polygon body
pub mod polygon {
    use super::Color;
    pub const FILL: Color = super::POLYGON_FILL;
    pub const STROKE: Color = super::POLYGON_STROKE;
    pub const DASH: Color = super::POLYGON_DASH;
    pub const STROKE_WIDTH: f64 = 2.0;
    /// Dash pattern for the direction overlay [dash_length, gap_length]
    pub const DASH_PATTERN: [f64; 2] = [6.0, 4.0];
}

/// Edge midpoint insertion markers
pub mod midpoint {
    use super::Color;
    pub const FILL: Color = super::MIDPOINT_FILL;
    pub const STROKE: Color = super::MIDPOINT_STROKE;
    pub const RADIUS: f64 = 4.0;
    pub const STROKE_WIDTH: f64 = 1.0;
}

/// Vertex markers
pub mod vertex {
    use super::Color;
    pub const INNER: Color = super::VERTEX_INNER;
    pub const OUTER: Color = super::VERTEX_OUTER;
    pub const HOVERED_INNER: Color = super::VERTEX_HOVERED_INNER;
    pub const HOVERED_OUTER: Color = super::VERTEX_HOVERED_OUTER;
    pub const DRAGGED_INNER: Color = super::VERTEX_DRAGGED_INNER;
    pub const DRAGGED_OUTER: Color = super::VERTEX_DRAGGED_OUTER;
    pub const LABEL: Color = super::VERTEX_LABEL;

    pub const RADIUS: f64 = 6.0;
    pub const HOVERED_RADIUS: f64 = 8.0;
    pub const DRAGGED_RADIUS: f64 = 9.0;
    /// Extra radius of the translucent ring around each marker
    pub const RING_WIDTH: f64 = 2.0;
    pub const LABEL_FONT_SIZE: f32 = 11.0;
}

/// Coordinate tooltip for the hovered vertex
pub mod tooltip {
    use super::Color;
    pub const BACKGROUND: Color = super::TOOLTIP_BACKGROUND;
    pub const TEXT: Color = super::TOOLTIP_TEXT;
    pub const FONT_SIZE: f32 = 12.0;
    /// Offset from the vertex to the tooltip text origin
    pub const OFFSET: (f64, f64) = (14.0, -14.0);
    pub const PADDING: f64 = 4.0;
}

/// Instruction bar along the bottom edge of the canvas
pub mod instruction_bar {
    use super::Color;
    pub const BACKGROUND: Color = super::INSTRUCTION_BACKGROUND;
    pub const TEXT: Color = super::INSTRUCTION_TEXT;
    pub const HEIGHT: f64 = 28.0;
    pub const FONT_SIZE: f32 = 12.0;
}

/// Sizes for page layout
pub mod size {
    /// Outer page padding
    pub const PAGE_PADDING: f64 = 16.0;
    /// Gap between stacked rows
    pub const ROW_GAP: f64 = 8.0;
    /// Rounded corner radius for panels and badges
    pub const PANEL_RADIUS: f64 = 6.0;
    /// Border width for panels
    pub const BORDER_WIDTH: f64 = 1.5;
    /// Text size for toolbar buttons
    pub const BUTTON_TEXT: f32 = 13.0;
    /// Text size for badges and chips
    pub const BADGE_TEXT: f32 = 12.0;
}
