// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! ROI persistence as a JSON list of `[x, y]` pairs in native space
//!
//! Whole-pixel coordinates are written as JSON integers so the file reads
//! `[[50,50],[1230,50],...]`, matching what the analytics side consumes.

use kurbo::Point;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum RoiFileError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} is not a list of [x, y] pairs")]
    Shape { path: PathBuf },
}

/// Anything that can accept a finished ROI
pub trait RoiSink {
    fn persist(&mut self, points: &[Point]) -> Result<(), RoiFileError>;
}

/// The ROI JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonRoiFile {
    path: PathBuf,
}

impl JsonRoiFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the polygon from disk. A missing file is an empty ROI.
    pub fn load(&self) -> Result<Vec<Point>, RoiFileError> {
        load_points(&self.path)
    }
}

impl RoiSink for JsonRoiFile {
    /// Write via a sibling temp file and rename, so readers never see a
    /// half-written file
    fn persist(&mut self, points: &[Point]) -> Result<(), RoiFileError> {
        let io_err = |source| RoiFileError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, format_points(points)).map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;

        tracing::info!("Saved {} ROI points to {}", points.len(), self.path.display());
        Ok(())
    }
}

/// Load points from `path`; a missing file yields an empty list
pub fn load_points(path: &Path) -> Result<Vec<Point>, RoiFileError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(RoiFileError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let value: Value = serde_json::from_str(&text).map_err(|source| RoiFileError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    points_from_value(&value).ok_or_else(|| RoiFileError::Shape {
        path: path.to_path_buf(),
    })
}

/// Parse user-entered text such as `[[10, 10], [20, 10], [10, 20]]`.
/// Returns `None` unless every entry is a pair of finite numbers.
pub fn parse_points(text: &str) -> Option<Vec<Point>> {
    let value: Value = serde_json::from_str(text.trim()).ok()?;
    points_from_value(&value)
}

fn points_from_value(value: &Value) -> Option<Vec<Point>> {
    value
        .as_array()?
        .iter()
        .map(|pair| match pair.as_array()?.as_slice() {
            [x, y] => {
                let (x, y) = (x.as_f64()?, y.as_f64()?);
                (x.is_finite() && y.is_finite()).then(|| Point::new(x, y))
            }
            _ => None,
        })
        .collect()
}

fn coordinate(v: f64) -> Value {
    if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Value::from(v as i64)
    } else {
        Value::from(v)
    }
}

/// Compact JSON for a point list
pub fn format_points(points: &[Point]) -> String {
    let pairs: Vec<Value> = points
        .iter()
        .map(|p| Value::Array(vec![coordinate(p.x), coordinate(p.y)]))
        .collect();
    Value::Array(pairs).to_string()
}

/// One point as `[x, y]` for chips and tooltips
pub fn format_point(point: Point) -> String {
    format!("[{}, {}]", coordinate(point.x), coordinate(point.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn scratch_path(name: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir()
            .join(format!("roi-editor-test-{}-{}", std::process::id(), n))
            .join(name)
    }

    #[test]
    fn integers_are_written_without_fraction() {
        let pts = [Point::new(50.0, 50.0), Point::new(1230.5, -3.0)];
        assert_eq!(format_points(&pts), "[[50,50],[1230.5,-3]]");
        assert_eq!(format_points(&[]), "[]");
        assert_eq!(format_point(Point::new(7.0, 8.0)), "[7, 8]");
    }

    #[test]
    fn parse_accepts_pairs_only() {
        assert_eq!(
            parse_points(" [[10, 10], [20.5, 10]] "),
            Some(vec![Point::new(10.0, 10.0), Point::new(20.5, 10.0)])
        );
        assert_eq!(parse_points("[]"), Some(vec![]));
        assert_eq!(parse_points("[[1, 2, 3]]"), None);
        assert_eq!(parse_points("[[1, \"2\"]]"), None);
        assert_eq!(parse_points("{\"x\": 1}"), None);
        assert_eq!(parse_points("[[1, 2],"), None);
    }

    #[test]
    fn persist_then_load() {
        let path = scratch_path("roi.json");
        let mut file = JsonRoiFile::new(&path);
        let pts = vec![
            Point::new(400.0, 150.0),
            Point::new(880.0, 150.0),
            Point::new(880.0, 600.0),
        ];
        file.persist(&pts).expect("persist");
        assert_eq!(file.load().expect("load"), pts);
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            "[[400,150],[880,150],[880,600]]"
        );
    }

    #[test]
    fn missing_file_is_empty_roi() {
        let path = scratch_path("absent.json");
        assert!(load_points(&path).expect("load").is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = scratch_path("bad.json");
        std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");

        std::fs::write(&path, "not json").expect("write");
        assert!(matches!(load_points(&path), Err(RoiFileError::Json { .. })));

        std::fs::write(&path, "[[1]]").expect("write");
        assert!(matches!(load_points(&path), Err(RoiFileError::Shape { .. })));
    }
}
