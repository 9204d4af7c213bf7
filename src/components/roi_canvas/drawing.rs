// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Frame composition for the ROI canvas
//!
//! `build_frame` turns a read-only view of the editor state into an ordered
//! list of layers in display space. The list order is the paint order, so
//! later layers occlude earlier ones.

use crate::editing::EditSession;
use crate::model::format_point;
use crate::stream::StreamHealth;
use crate::theme;
use kurbo::{BezPath, Point, Rect, Size, Vec2};

/// What fills the canvas behind the polygon
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Background {
    /// The latest decoded camera frame, stretched to the canvas
    LiveFrame,
    /// Solid fill with a status message
    Placeholder(&'static str),
}

/// Visual state of a vertex marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum VertexStyle {
    Normal,
    Hovered,
    Dragged,
}

impl VertexStyle {
    pub(super) fn radius(self) -> f64 {
        match self {
            VertexStyle::Normal => theme::vertex::RADIUS,
            VertexStyle::Hovered => theme::vertex::HOVERED_RADIUS,
            VertexStyle::Dragged => theme::vertex::DRAGGED_RADIUS,
        }
    }
}

/// One paint operation, in display coordinates
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Layer {
    Background {
        rect: Rect,
        kind: Background,
    },
    PolygonFill(BezPath),
    EdgeStroke(BezPath),
    EdgeDash(BezPath),
    Midpoint(Point),
    Vertex {
        center: Point,
        /// 1-based label
        number: usize,
        style: VertexStyle,
    },
    Tooltip {
        anchor: Point,
        text: String,
    },
    InstructionBar {
        rect: Rect,
        text: String,
    },
}

fn placeholder_message(health: StreamHealth, has_frame: bool) -> Option<&'static str> {
    match health {
        StreamHealth::Healthy if has_frame => None,
        StreamHealth::Healthy => Some("Loading camera…"),
        StreamHealth::Probing => Some("Checking camera stream…"),
        StreamHealth::Unavailable => Some("Camera stream unavailable"),
    }
}

pub(super) fn instruction_text(count: usize) -> String {
    format!(
        "Click = add point | Drag = move point | Right-click = delete point | Points: {count}"
    )
}

/// Compose one frame from the current editor state
pub(super) fn build_frame(session: &EditSession, has_frame: bool) -> Vec<Layer> {
    let space = session.space;
    let polygon = &session.polygon;
    let size: Size = space.display_size();
    let mut layers = Vec::with_capacity(polygon.len() * 2 + 6);

    // 1. Background
    let kind = match placeholder_message(session.stream_health, has_frame) {
        None => Background::LiveFrame,
        Some(message) => Background::Placeholder(message),
    };
    layers.push(Layer::Background {
        rect: size.to_rect(),
        kind,
    });

    // 2-3. Fill and edges
    if !polygon.is_empty() {
        let path = polygon.to_bezpath(|p| space.to_display(p));
        if polygon.is_closed() {
            layers.push(Layer::PolygonFill(path.clone()));
        }
        if polygon.len() >= 2 {
            layers.push(Layer::EdgeStroke(path.clone()));
            layers.push(Layer::EdgeDash(path));
        }
    }

    // 4. Insertion affordances
    layers.extend(
        polygon
            .midpoints()
            .map(|(_, mid)| Layer::Midpoint(space.to_display(mid))),
    );

    // 5. Vertex markers
    let hovered = session.hovered_index();
    let dragged = session.dragged_index();
    layers.extend(polygon.points().iter().enumerate().map(|(i, &p)| {
        let style = if dragged == Some(i) {
            VertexStyle::Dragged
        } else if hovered == Some(i) {
            VertexStyle::Hovered
        } else {
            VertexStyle::Normal
        };
        Layer::Vertex {
            center: space.to_display(p),
            number: i + 1,
            style,
        }
    }));

    // 6. Tooltip, above every marker
    if let Some(index) = hovered
        && let Some(p) = polygon.get(index)
    {
        let (dx, dy) = theme::tooltip::OFFSET;
        let anchor = space.to_display(p) + Vec2::new(dx, dy);
        let rounded = Point::new(p.x.round(), p.y.round());
        layers.push(Layer::Tooltip {
            anchor,
            text: format_point(rounded),
        });
    }

    // 7. Instruction bar
    let bar = Rect::new(
        0.0,
        size.height - theme::instruction_bar::HEIGHT,
        size.width,
        size.height,
    );
    layers.push(Layer::InstructionBar {
        rect: bar,
        text: instruction_text(polygon.len()),
    });

    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::MouseButton;
    use crate::polygon::{Polygon, Preset};

    fn rank(layer: &Layer) -> u8 {
        match layer {
            Layer::Background { .. } => 0,
            Layer::PolygonFill(_) => 1,
            Layer::EdgeStroke(_) => 2,
            Layer::EdgeDash(_) => 3,
            Layer::Midpoint(_) => 4,
            Layer::Vertex { .. } => 5,
            Layer::Tooltip { .. } => 6,
            Layer::InstructionBar { .. } => 7,
        }
    }

    fn count(layers: &[Layer], wanted: u8) -> usize {
        layers.iter().filter(|l| rank(l) == wanted).count()
    }

    #[test]
    fn layers_are_in_paint_order() {
        let mut session = EditSession::new(Preset::CenterGate.polygon());
        session.set_stream_health(StreamHealth::Healthy);
        session.pointer_move(Point::new(400.0, 150.0));

        let layers = build_frame(&session, true);
        let ranks: Vec<u8> = layers.iter().map(rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);

        assert_eq!(count(&layers, 1), 1);
        assert_eq!(count(&layers, 4), 4);
        assert_eq!(count(&layers, 5), 4);
        assert_eq!(count(&layers, 6), 1);
        assert_eq!(
            layers.first(),
            Some(&Layer::Background {
                rect: Size::new(1280.0, 720.0).to_rect(),
                kind: Background::LiveFrame,
            })
        );
    }

    #[test]
    fn open_path_has_no_fill_and_no_closing_midpoint() {
        let session = EditSession::new(Polygon::from_points(vec![
            Point::new(10.0, 10.0),
            Point::new(300.0, 10.0),
        ]));
        let layers = build_frame(&session, false);
        assert_eq!(count(&layers, 1), 0);
        assert_eq!(count(&layers, 2), 1);
        assert_eq!(count(&layers, 4), 1);
        assert!(layers.contains(&Layer::Midpoint(Point::new(155.0, 10.0))));
    }

    #[test]
    fn empty_polygon_still_has_background_and_bar() {
        let session = EditSession::default();
        let layers = build_frame(&session, false);
        assert_eq!(layers.len(), 2);
        assert!(matches!(
            layers[0],
            Layer::Background {
                kind: Background::Placeholder("Checking camera stream…"),
                ..
            }
        ));
        assert!(matches!(
            &layers[1],
            Layer::InstructionBar { text, .. } if text.ends_with("Points: 0")
        ));
    }

    #[test]
    fn placeholder_follows_stream_health() {
        let mut session = EditSession::default();
        session.set_stream_health(StreamHealth::Unavailable);
        assert!(matches!(
            build_frame(&session, true)[0],
            Layer::Background {
                kind: Background::Placeholder("Camera stream unavailable"),
                ..
            }
        ));

        session.set_stream_health(StreamHealth::Healthy);
        assert!(matches!(
            build_frame(&session, false)[0],
            Layer::Background {
                kind: Background::Placeholder("Loading camera…"),
                ..
            }
        ));
    }

    #[test]
    fn dragged_vertex_is_highlighted_and_scaled() {
        let mut session = EditSession::new(Preset::FullFrame.polygon());
        session.set_container_width(640.0);
        session.pointer_down(Point::new(25.0, 25.0), MouseButton::Primary);

        let layers = build_frame(&session, false);
        assert!(layers.contains(&Layer::Vertex {
            center: Point::new(25.0, 25.0),
            number: 1,
            style: VertexStyle::Dragged,
        }));
        assert!(layers.contains(&Layer::Vertex {
            center: Point::new(615.0, 25.0),
            number: 2,
            style: VertexStyle::Normal,
        }));
        assert!(layers.contains(&Layer::Tooltip {
            anchor: Point::new(39.0, 11.0),
            text: "[50, 50]".to_string(),
        }));
        assert!(matches!(
            layers.last(),
            Some(Layer::InstructionBar { rect, .. }) if rect.y1 == 360.0
        ));
    }
}
