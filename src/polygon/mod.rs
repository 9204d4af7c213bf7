// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! ROI polygon model
//!
//! A polygon is an ordered list of vertices in native space. Edges connect
//! consecutive vertices; the closing edge (last -> first) only exists once
//! the polygon has three or more vertices. Every operation here is total
//! and returns a new polygon instead of mutating in place.

pub mod presets;

pub use hit_test::HitTestResult;
pub use presets::Preset;

use kurbo::{BezPath, Point};

/// Minimum number of vertices for a polygon to be saved
pub const MIN_SAVE_VERTICES: usize = 3;

/// Reasons a polygon cannot be accepted as the final saved shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("ROI needs at least {MIN_SAVE_VERTICES} points, it has {count}")]
    TooFewVertices { count: usize },
}

/// Ordered sequence of native-space vertices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create an empty polygon
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl Into<Vec<Point>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// True once the closing edge exists (three or more vertices)
    pub fn is_closed(&self) -> bool {
        self.points.len() >= MIN_SAVE_VERTICES
    }

    /// Check that the polygon may be handed to persistence.
    ///
    /// No normalisation happens here: coincident points, winding order and
    /// self-intersections are all accepted as drawn.
    pub fn validate_for_save(&self) -> Result<&[Point], ValidationError> {
        if self.points.len() < MIN_SAVE_VERTICES {
            return Err(ValidationError::TooFewVertices {
                count: self.points.len(),
            });
        }
        Ok(&self.points)
    }

    // ========================================================================
    // EDGES AND MIDPOINTS
    // ========================================================================

    /// Indices of edges that currently carry an insertion midpoint.
    ///
    /// Edge `i` runs from vertex `i` to vertex `(i + 1) % n`. With fewer than
    /// three vertices the closing edge is skipped.
    pub fn edge_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let n = self.points.len();
        let count = match n {
            0 | 1 => 0,
            2 => 1,
            _ => n,
        };
        0..count
    }

    /// Midpoint of edge `edge_index`, or `None` if that edge does not exist
    pub fn midpoint(&self, edge_index: usize) -> Option<Point> {
        if !self.edge_indices().any(|i| i == edge_index) {
            return None;
        }
        let start = self.points[edge_index];
        let end = self.points[(edge_index + 1) % self.points.len()];
        Some(start.midpoint(end))
    }

    /// All `(edge_index, midpoint)` pairs in edge order
    pub fn midpoints(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.edge_indices()
            .filter_map(|i| self.midpoint(i).map(|mid| (i, mid)))
    }

    // ========================================================================
    // HIT TESTING
    // ========================================================================

    /// First vertex (insertion order) strictly within `threshold` of `point`
    pub fn hit_test(&self, point: Point, threshold: f64) -> Option<usize> {
        hit_test::find_first(
            point,
            self.points.iter().copied().enumerate(),
            threshold,
        )
        .map(|hit| hit.index)
    }

    /// First edge whose midpoint is strictly within `threshold` of `point`
    pub fn hit_test_midpoint(&self, point: Point, threshold: f64) -> Option<usize> {
        hit_test::find_first(point, self.midpoints(), threshold).map(|hit| hit.index)
    }

    // ========================================================================
    // EDITS
    // ========================================================================

    /// Insert `point` immediately after vertex `edge_index`.
    ///
    /// An index past the end appends.
    pub fn insert_after(&self, edge_index: usize, point: Point) -> Self {
        let mut points = self.points.clone();
        let at = (edge_index + 1).min(points.len());
        points.insert(at, point);
        Self { points }
    }

    /// Remove the vertex at `index`; out-of-range indices return a copy
    pub fn remove(&self, index: usize) -> Self {
        let mut points = self.points.clone();
        if index < points.len() {
            points.remove(index);
        }
        Self { points }
    }

    pub fn append(&self, point: Point) -> Self {
        let mut points = self.points.clone();
        points.push(point);
        Self { points }
    }

    /// Move vertex `index` to `point`; out-of-range indices return a copy
    pub fn replace(&self, index: usize, point: Point) -> Self {
        let mut points = self.points.clone();
        if let Some(slot) = points.get_mut(index) {
            *slot = point;
        }
        Self { points }
    }

    // ========================================================================
    // GEOMETRY
    // ========================================================================

    /// Build the outline in the coordinates produced by `map`.
    ///
    /// The path is closed only when the polygon is closed.
    pub fn to_bezpath(&self, map: impl Fn(Point) -> Point) -> BezPath {
        let mut path = BezPath::new();
        let mut iter = self.points.iter().copied().map(map);
        if let Some(first) = iter.next() {
            path.move_to(first);
            for pt in iter {
                path.line_to(pt);
            }
            if self.is_closed() {
                path.close_path();
            }
        }
        path
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::from_points(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(points: &[(f64, f64)]) -> Polygon {
        Polygon::from_points(
            points
                .iter()
                .map(|&(x, y)| Point::new(x, y))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn empty_polygon_is_incomplete() {
        let p = Polygon::new();
        assert!(!p.is_closed());
        assert_eq!(
            p.validate_for_save(),
            Err(ValidationError::TooFewVertices { count: 0 })
        );
    }

    #[test]
    fn three_points_validate() {
        let p = poly(&[(10.0, 10.0), (20.0, 10.0), (10.0, 20.0)]);
        assert_eq!(p.validate_for_save().unwrap().len(), 3);
    }

    #[test]
    fn coincident_points_are_not_deduplicated() {
        let p = poly(&[(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)]);
        assert_eq!(p.validate_for_save().unwrap(), p.points());
    }

    #[test]
    fn hit_test_prefers_insertion_order() {
        let p = poly(&[(0.0, 0.0), (3.0, 0.0), (1.0, 0.0)]);
        // Query is closest to index 2 but index 0 is scanned first
        assert_eq!(p.hit_test(Point::new(1.0, 0.0), 5.0), Some(0));
    }

    #[test]
    fn hit_test_misses_outside_threshold() {
        let p = poly(&[(0.0, 0.0)]);
        assert_eq!(p.hit_test(Point::new(100.0, 0.0), 12.0), None);
    }

    #[test]
    fn open_path_has_no_closing_edge() {
        let p = poly(&[(0.0, 0.0), (100.0, 0.0)]);
        assert_eq!(p.edge_indices().collect::<Vec<_>>(), vec![0]);
        assert_eq!(p.midpoint(0), Some(Point::new(50.0, 0.0)));
        assert_eq!(p.midpoint(1), None);
    }

    #[test]
    fn single_vertex_has_no_edges() {
        let p = poly(&[(0.0, 0.0)]);
        assert_eq!(p.edge_indices().count(), 0);
        assert_eq!(p.hit_test_midpoint(Point::ZERO, 100.0), None);
    }

    #[test]
    fn closed_polygon_includes_closing_edge() {
        let p = poly(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
        assert_eq!(p.edge_indices().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(p.midpoint(2), Some(Point::new(50.0, 50.0)));
        assert_eq!(p.hit_test_midpoint(Point::new(51.0, 50.0), 5.0), Some(2));
    }

    #[test]
    fn two_point_path_never_hits_closing_midpoint() {
        // The closing edge midpoint would coincide with edge 0's here
        let p = poly(&[(0.0, 0.0), (100.0, 0.0)]);
        assert_eq!(p.hit_test_midpoint(Point::new(50.0, 0.0), 5.0), Some(0));
        let far = poly(&[(0.0, 0.0), (0.0, 100.0)]);
        assert_eq!(far.hit_test_midpoint(Point::new(0.0, 50.0), 5.0), Some(0));
    }

    #[test]
    fn insert_after_places_point_between_edge_ends() {
        let p = poly(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
        let q = p.insert_after(0, Point::new(50.0, 0.0));
        assert_eq!(
            q.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(50.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
            ]
        );
        // Input untouched
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn insert_after_closing_edge_appends() {
        let p = poly(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
        let q = p.insert_after(2, Point::new(50.0, 50.0));
        assert_eq!(q.get(3), Some(Point::new(50.0, 50.0)));
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let p = poly(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(p.remove(7), p);
        assert_eq!(p.remove(0).points(), &[Point::new(1.0, 1.0)]);
    }

    #[test]
    fn replace_moves_single_vertex() {
        let p = poly(&[(0.0, 0.0), (1.0, 1.0)]);
        let q = p.replace(1, Point::new(-5.0, 9.0));
        assert_eq!(q.get(1), Some(Point::new(-5.0, 9.0)));
        assert_eq!(q.get(0), Some(Point::ZERO));
        assert_eq!(p.replace(9, Point::ZERO), p);
    }

    #[test]
    fn append_keeps_order() {
        let p = Polygon::new()
            .append(Point::new(10.0, 10.0))
            .append(Point::new(20.0, 10.0))
            .append(Point::new(10.0, 20.0));
        assert_eq!(
            p.points(),
            &[
                Point::new(10.0, 10.0),
                Point::new(20.0, 10.0),
                Point::new(10.0, 20.0),
            ]
        );
    }

    #[test]
    fn bezpath_closes_only_when_closed() {
        use kurbo::PathEl;

        let open = poly(&[(0.0, 0.0), (10.0, 0.0)]).to_bezpath(|p| p);
        assert!(!open.elements().iter().any(|el| matches!(el, PathEl::ClosePath)));

        let closed = poly(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]).to_bezpath(|p| p);
        assert!(matches!(closed.elements().last(), Some(PathEl::ClosePath)));
    }
}
