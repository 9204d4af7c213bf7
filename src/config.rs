// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Deployment configuration (stream URLs, ROI file location)
//!
//! Values come from, in increasing priority: built-in defaults, a TOML file
//! (`roi-editor.toml` in the working directory, or the path given as the
//! first command-line argument), and `ROI_*` environment variables.

use crate::settings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "roi-editor.toml";

const ENV_STREAM_URL: &str = "ROI_STREAM_URL";
const ENV_RAW_STREAM_URL: &str = "ROI_RAW_STREAM_URL";
const ENV_ROI_PATH: &str = "ROI_PATH";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Processed MJPEG feed; its `/health` sibling is probed
    pub stream_url: String,

    /// Unannotated feed drawn behind the polygon. A path starting with `/`
    /// is resolved against `stream_url`'s origin.
    pub raw_stream_url: String,

    /// Where the ROI JSON is read from and saved to
    pub roi_path: PathBuf,

    pub probe_interval_secs: u64,
    pub probe_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stream_url: "http://localhost:5000/video_feed".to_string(),
            raw_stream_url: "/video_feed_raw".to_string(),
            roi_path: PathBuf::from("roi.json"),
            probe_interval_secs: settings::stream::PROBE_INTERVAL_SECS,
            probe_timeout_secs: settings::stream::PROBE_TIMEOUT_SECS,
        }
    }
}

/// Loaded configuration and where it came from
#[derive(Debug)]
pub struct ConfigHandle {
    pub config: Config,
    pub source: Option<PathBuf>,
}

impl Config {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read `path`. `Ok(None)` if the file does not exist.
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text, path).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Apply `ROI_*` overrides using `lookup` (normally `std::env::var`)
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_STREAM_URL) {
            self.stream_url = url;
        }
        if let Some(url) = lookup(ENV_RAW_STREAM_URL) {
            self.raw_stream_url = url;
        }
        if let Some(path) = lookup(ENV_ROI_PATH) {
            self.roi_path = PathBuf::from(path);
        }
    }

    /// Load from `path` (or the default file) plus the environment. A
    /// malformed file is logged and ignored.
    pub fn load(path: Option<&Path>) -> ConfigHandle {
        let path = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        let (mut config, source) = match Self::from_file(path) {
            Ok(Some(config)) => {
                tracing::info!("Loaded config from {}", path.display());
                (config, Some(path.to_path_buf()))
            }
            Ok(None) => {
                tracing::info!("No config at {}, using defaults", path.display());
                (Config::default(), None)
            }
            Err(e) => {
                tracing::error!("{}; using defaults", e);
                (Config::default(), None)
            }
        };
        config.apply_env(|key| std::env::var(key).ok());
        ConfigHandle { config, source }
    }

    /// The raw feed URL, resolving a bare path against the stream origin
    pub fn resolved_raw_stream_url(&self) -> String {
        if !self.raw_stream_url.starts_with('/') {
            return self.raw_stream_url.clone();
        }
        let origin = self
            .stream_url
            .find("://")
            .map(|scheme_end| {
                let rest = &self.stream_url[scheme_end + 3..];
                let host_len = rest.find('/').unwrap_or(rest.len());
                &self.stream_url[..scheme_end + 3 + host_len]
            })
            .unwrap_or(self.stream_url.trim_end_matches('/'));
        format!("{origin}{}", self.raw_stream_url)
    }

    pub fn probe_interval(&self) -> Duration {
        Duration::from_secs(self.probe_interval_secs.max(1))
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_toml(
            "stream_url = \"http://cam:8000/video_feed\"\nprobe_interval_secs = 3\n",
            Path::new("test.toml"),
        )
        .expect("parse");
        assert_eq!(config.stream_url, "http://cam:8000/video_feed");
        assert_eq!(config.probe_interval(), Duration::from_secs(3));
        assert_eq!(config.roi_path, PathBuf::from("roi.json"));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let err = Config::from_toml("stream_url = [", Path::new("bad.toml"));
        assert!(matches!(err, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_file_is_none() {
        let path = std::env::temp_dir().join("roi-editor-no-such-config.toml");
        assert!(Config::from_file(&path).expect("no io error").is_none());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = Config::default();
        config.apply_env(|key| match key {
            "ROI_PATH" => Some("/srv/roi.json".to_string()),
            "ROI_STREAM_URL" => Some("http://10.0.0.2/video_feed".to_string()),
            _ => None,
        });
        assert_eq!(config.roi_path, PathBuf::from("/srv/roi.json"));
        assert_eq!(config.stream_url, "http://10.0.0.2/video_feed");
        assert_eq!(config.raw_stream_url, "/video_feed_raw");
    }

    #[test]
    fn raw_path_resolves_against_stream_origin() {
        let config = Config::default();
        assert_eq!(
            config.resolved_raw_stream_url(),
            "http://localhost:5000/video_feed_raw"
        );

        let absolute = Config {
            raw_stream_url: "http://other/raw".to_string(),
            ..Config::default()
        };
        assert_eq!(absolute.resolved_raw_stream_url(), "http://other/raw");
    }

    #[test]
    fn zero_durations_are_clamped() {
        let config = Config {
            probe_interval_secs: 0,
            probe_timeout_secs: 0,
            ..Config::default()
        };
        assert_eq!(config.probe_interval(), Duration::from_secs(1));
        assert_eq!(config.probe_timeout(), Duration::from_secs(1));
    }
}
