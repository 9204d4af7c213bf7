// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Camera stream health probing
//!
//! The stream server exposes a JSON health endpoint next to its MJPEG feed.
//! A probe succeeds only when the request completes, the status is 2xx and
//! the body is `{"status": "ok"}`; anything else marks the stream
//! unavailable.

use serde::Deserialize;
use std::time::Duration;
use xilem::core::MessageProxy;
use xilem::tokio;

/// Availability of the camera stream as seen by the editor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StreamHealth {
    /// No probe has completed yet
    #[default]
    Probing,
    Healthy,
    Unavailable,
}

impl StreamHealth {
    pub fn is_healthy(self) -> bool {
        self == StreamHealth::Healthy
    }

    /// Short badge label for the toolbar
    pub fn label(self) -> &'static str {
        match self {
            StreamHealth::Probing => "CHECKING",
            StreamHealth::Healthy => "LIVE",
            StreamHealth::Unavailable => "OFFLINE",
        }
    }

    /// Fold a probe outcome into the current state. The previous state does
    /// not matter: every probe fully determines the next one.
    pub fn after_probe(self, result: &Result<(), ProbeError>) -> StreamHealth {
        match result {
            Ok(()) => StreamHealth::Healthy,
            Err(_) => StreamHealth::Unavailable,
        }
    }
}

/// Why a single probe failed
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("health request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("health endpoint returned HTTP {0}")]
    Status(u16),

    #[error("health endpoint reported '{0}'")]
    Payload(String),
}

/// Message sent to the app after every probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport(pub StreamHealth);

#[derive(Debug, Deserialize)]
struct HealthBody {
    #[serde(default)]
    status: Option<String>,
}

/// Derive the health endpoint from a feed URL.
///
/// A trailing `/video_feed` or `/video_feed_raw` segment is swapped for
/// `/health`; otherwise `/health` is appended.
pub fn health_url_for(stream_url: &str) -> String {
    let trimmed = stream_url.trim_end_matches('/');
    for suffix in ["/video_feed_raw", "/video_feed"] {
        if let Some(base) = trimmed.strip_suffix(suffix) {
            return format!("{base}/health");
        }
    }
    format!("{trimmed}/health")
}

/// Classify a completed HTTP exchange
pub fn classify(status: u16, body: &str) -> Result<(), ProbeError> {
    if !(200..300).contains(&status) {
        return Err(ProbeError::Status(status));
    }
    match serde_json::from_str::<HealthBody>(body) {
        Ok(HealthBody {
            status: Some(status),
        }) if status == "ok" => Ok(()),
        Ok(HealthBody {
            status: Some(status),
        }) => Err(ProbeError::Payload(status)),
        Ok(HealthBody { status: None }) => Err(ProbeError::Payload("missing status".into())),
        Err(e) => Err(ProbeError::Payload(e.to_string())),
    }
}

/// Run one probe against `url`
pub async fn probe(client: &reqwest::Client, url: &str) -> Result<(), ProbeError> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    classify(status, &body)
}

/// Probe `stream_url`'s health endpoint forever, reporting each result.
///
/// The first probe runs immediately. Returns when the app drops the proxy.
pub async fn run_probe_loop(
    proxy: MessageProxy<HealthReport>,
    stream_url: String,
    interval: Duration,
    timeout: Duration,
) {
    let url = health_url_for(&stream_url);
    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create HTTP client: {}", e);
            return;
        }
    };

    tracing::info!("Probing stream health at {}", url);

    let mut state = StreamHealth::Probing;
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let result = probe(&client, &url).await;
        let next = state.after_probe(&result);
        if next != state {
            match &result {
                Ok(()) => tracing::info!("Stream is live"),
                Err(e) => tracing::warn!("Stream unavailable: {}", e),
            }
        }
        state = next;

        if proxy.message(HealthReport(state)).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_url_replaces_feed_segment() {
        assert_eq!(
            health_url_for("http://localhost:5000/video_feed"),
            "http://localhost:5000/health"
        );
        assert_eq!(
            health_url_for("http://cam.local/video_feed_raw/"),
            "http://cam.local/health"
        );
        assert_eq!(
            health_url_for("http://cam.local:8080"),
            "http://cam.local:8080/health"
        );
    }

    #[test]
    fn ok_payload_is_healthy() {
        assert!(classify(200, r#"{"status":"ok"}"#).is_ok());
        assert!(classify(200, r#"{"status":"ok","fps":15}"#).is_ok());
    }

    #[test]
    fn bad_status_or_payload_is_unavailable() {
        assert!(matches!(classify(503, r#"{"status":"ok"}"#), Err(ProbeError::Status(503))));
        assert!(matches!(
            classify(200, r#"{"status":"degraded"}"#),
            Err(ProbeError::Payload(s)) if s == "degraded"
        ));
        assert!(matches!(classify(200, "{}"), Err(ProbeError::Payload(_))));
        assert!(matches!(classify(200, "<html>"), Err(ProbeError::Payload(_))));
    }

    #[test]
    fn every_probe_determines_next_state() {
        let ok: Result<(), ProbeError> = Ok(());
        let fail: Result<(), ProbeError> = Err(ProbeError::Status(500));
        for state in [
            StreamHealth::Probing,
            StreamHealth::Healthy,
            StreamHealth::Unavailable,
        ] {
            assert_eq!(state.after_probe(&ok), StreamHealth::Healthy);
            assert_eq!(state.after_probe(&fail), StreamHealth::Unavailable);
        }
    }

    #[test]
    fn labels() {
        assert_eq!(StreamHealth::default().label(), "CHECKING");
        assert_eq!(StreamHealth::Healthy.label(), "LIVE");
        assert_eq!(StreamHealth::Unavailable.label(), "OFFLINE");
    }
}
