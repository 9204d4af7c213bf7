// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Rasterises the layer list produced by `drawing::build_frame`

use super::RoiCanvasWidget;
use super::drawing::{Background, Layer, VertexStyle};
use crate::theme;
use kurbo::{Affine, BezPath, Circle, Point, Rect, Stroke};
use masonry::core::{BrushIndex, StyleProperty, render_text};
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color, Fill, ImageBrush};
use parley::{FontContext, FontStack, Layout, LayoutContext};

thread_local! {
    static FONT_CX: std::cell::RefCell<FontContext> =
        std::cell::RefCell::new(FontContext::default());
    static LAYOUT_CX: std::cell::RefCell<
        LayoutContext<BrushIndex>,
    > = std::cell::RefCell::new(LayoutContext::new());
}

/// Lay out a single line of sans-serif text
fn text_layout(text: &str, font_size: f32) -> Layout<BrushIndex> {
    FONT_CX.with(|font_cell| {
        LAYOUT_CX.with(|layout_cell| {
            let mut font_cx = font_cell.borrow_mut();
            let mut layout_cx = layout_cell.borrow_mut();

            let mut builder = layout_cx.ranged_builder(&mut font_cx, text, 1.0, false);
            builder.push_default(StyleProperty::FontSize(font_size));
            builder.push_default(StyleProperty::FontStack(FontStack::Single(
                parley::FontFamily::Generic(parley::GenericFamily::SansSerif),
            )));
            builder.push_default(StyleProperty::Brush(BrushIndex(0)));
            let mut layout = builder.build(text);
            layout.break_all_lines(None);
            layout
        })
    })
}

fn draw_layout(scene: &mut Scene, layout: &Layout<BrushIndex>, origin: Point, color: Color) {
    let brushes = vec![Brush::Solid(color)];
    render_text(
        scene,
        Affine::translate((origin.x, origin.y)),
        layout,
        &brushes,
        false,
    );
}

/// Draw `text` centred on `center`
fn draw_centered_text(scene: &mut Scene, text: &str, font_size: f32, center: Point, color: Color) {
    let layout = text_layout(text, font_size);
    let origin = Point::new(
        center.x - layout.width() as f64 / 2.0,
        center.y - layout.height() as f64 / 2.0,
    );
    draw_layout(scene, &layout, origin, color);
}

impl RoiCanvasWidget {
    // ============================================================================
    // PAINT HELPER METHODS
    // ============================================================================

    pub(super) fn paint_layers(&self, scene: &mut Scene, layers: &[Layer]) {
        for layer in layers {
            match layer {
                Layer::Background { rect, kind } => self.paint_background(scene, *rect, kind),
                Layer::PolygonFill(path) => paint_fill(scene, path),
                Layer::EdgeStroke(path) => paint_edges(scene, path),
                Layer::EdgeDash(path) => paint_dash(scene, path),
                Layer::Midpoint(center) => paint_midpoint(scene, *center),
                Layer::Vertex {
                    center,
                    number,
                    style,
                } => paint_vertex(scene, *center, *number, *style),
                Layer::Tooltip { anchor, text } => paint_tooltip(scene, *anchor, text),
                Layer::InstructionBar { rect, text } => paint_instruction_bar(scene, *rect, text),
            }
        }
    }

    fn paint_background(&self, scene: &mut Scene, rect: Rect, kind: &Background) {
        match (kind, &self.frame) {
            (Background::LiveFrame, Some(frame)) if frame.width() > 0 && frame.height() > 0 => {
                let sx = rect.width() / frame.width() as f64;
                let sy = rect.height() / frame.height() as f64;
                let transform =
                    Affine::translate((rect.x0, rect.y0)) * Affine::scale_non_uniform(sx, sy);
                scene.draw_image(&ImageBrush::new(frame.image_data.clone()), transform);
            }
            (Background::Placeholder(message), _) => {
                fill_color(scene, &rect, theme::placeholder::FILL);
                draw_centered_text(
                    scene,
                    message,
                    theme::placeholder::FONT_SIZE,
                    rect.center(),
                    theme::placeholder::TEXT,
                );
            }
            _ => fill_color(scene, &rect, theme::placeholder::FILL),
        }
    }
}

fn paint_fill(scene: &mut Scene, path: &BezPath) {
    scene.fill(
        Fill::NonZero,
        Affine::IDENTITY,
        &Brush::Solid(theme::polygon::FILL),
        None,
        path,
    );
}

fn paint_edges(scene: &mut Scene, path: &BezPath) {
    let stroke = Stroke::new(theme::polygon::STROKE_WIDTH);
    let brush = Brush::Solid(theme::polygon::STROKE);
    scene.stroke(&stroke, Affine::IDENTITY, &brush, None, path);
}

fn paint_dash(scene: &mut Scene, path: &BezPath) {
    let stroke = Stroke::new(theme::polygon::STROKE_WIDTH / 2.0)
        .with_dashes(0.0, theme::polygon::DASH_PATTERN);
    let brush = Brush::Solid(theme::polygon::DASH);
    scene.stroke(&stroke, Affine::IDENTITY, &brush, None, path);
}

fn paint_midpoint(scene: &mut Scene, center: Point) {
    let circle = Circle::new(center, theme::midpoint::RADIUS);
    fill_color(scene, &circle, theme::midpoint::FILL);
    let stroke = Stroke::new(theme::midpoint::STROKE_WIDTH);
    scene.stroke(
        &stroke,
        Affine::IDENTITY,
        &Brush::Solid(theme::midpoint::STROKE),
        None,
        &circle,
    );
}

fn paint_vertex(scene: &mut Scene, center: Point, number: usize, style: VertexStyle) {
    let (inner, outer) = match style {
        VertexStyle::Normal => (theme::vertex::INNER, theme::vertex::OUTER),
        VertexStyle::Hovered => (theme::vertex::HOVERED_INNER, theme::vertex::HOVERED_OUTER),
        VertexStyle::Dragged => (theme::vertex::DRAGGED_INNER, theme::vertex::DRAGGED_OUTER),
    };
    let radius = style.radius();

    // Outer ring first, then the inner fill on top
    let outer_circle = Circle::new(center, radius + theme::vertex::RING_WIDTH);
    fill_color(scene, &outer_circle, outer);
    fill_color(scene, &Circle::new(center, radius), inner);

    draw_centered_text(
        scene,
        &number.to_string(),
        theme::vertex::LABEL_FONT_SIZE,
        center,
        theme::vertex::LABEL,
    );
}

fn paint_tooltip(scene: &mut Scene, anchor: Point, text: &str) {
    let layout = text_layout(text, theme::tooltip::FONT_SIZE);
    let pad = theme::tooltip::PADDING;
    let width = layout.width() as f64;
    let height = layout.height() as f64;

    // Anchor is the bottom-left corner of the text
    let origin = Point::new(anchor.x, anchor.y - height);
    let bubble = Rect::new(
        origin.x - pad,
        origin.y - pad,
        origin.x + width + pad,
        origin.y + height + pad,
    )
    .to_rounded_rect(3.0);
    fill_color(scene, &bubble, theme::tooltip::BACKGROUND);
    draw_layout(scene, &layout, origin, theme::tooltip::TEXT);
}

fn paint_instruction_bar(scene: &mut Scene, rect: Rect, text: &str) {
    fill_color(scene, &rect, theme::instruction_bar::BACKGROUND);
    let layout = text_layout(text, theme::instruction_bar::FONT_SIZE);
    let origin = Point::new(
        rect.x0 + 10.0,
        rect.y0 + (rect.height() - layout.height() as f64) / 2.0,
    );
    draw_layout(scene, &layout, origin, theme::instruction_bar::TEXT);
}
