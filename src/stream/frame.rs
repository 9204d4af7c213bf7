// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Decoded camera frames and the background frame puller

use super::mjpeg::MjpegSplitter;
use peniko::{Blob, ImageData, ImageFormat};
use std::sync::Arc;
use std::time::Duration;
use xilem::core::MessageProxy;
use xilem::tokio;

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("failed to decode frame: {0}")]
    Decode(#[from] image::ImageError),
}

/// One decoded frame, ready to hand to Vello
#[derive(Debug, Clone)]
pub struct StreamFrame {
    pub image_data: ImageData,
    /// Monotonic frame counter, used to detect a new frame cheaply
    pub serial: u64,
}

impl PartialEq for StreamFrame {
    fn eq(&self, other: &Self) -> bool {
        self.serial == other.serial
    }
}

impl StreamFrame {
    /// Decode JPEG (or any enabled format) bytes to RGBA8
    pub fn decode(bytes: &[u8], serial: u64) -> Result<Self, FrameError> {
        let img = image::load_from_memory(bytes)?;
        let rgba = img.to_rgba8();
        let width = rgba.width();
        let height = rgba.height();
        let pixels: Vec<u8> = rgba.into_raw();

        let image_data = ImageData {
            data: Blob::from(pixels),
            format: ImageFormat::Rgba8,
            alpha_type: peniko::ImageAlphaType::Alpha,
            width,
            height,
        };
        Ok(Self { image_data, serial })
    }

    pub fn width(&self) -> u32 {
        self.image_data.width
    }

    pub fn height(&self) -> u32 {
        self.image_data.height
    }
}

/// Message carrying the newest decoded frame
#[derive(Debug, Clone)]
pub struct FrameReady(pub Arc<StreamFrame>);

/// Pull the raw MJPEG feed and forward decoded frames, reconnecting after
/// `reconnect` whenever the connection drops. Returns when the app drops
/// the proxy.
pub async fn run_frame_loop(
    proxy: MessageProxy<FrameReady>,
    raw_stream_url: String,
    reconnect: Duration,
) {
    let client = reqwest::Client::new();
    let mut serial = 0u64;

    loop {
        match pull_frames(&client, &raw_stream_url, &proxy, &mut serial).await {
            Ok(PullEnd::AppClosed) => break,
            Ok(PullEnd::StreamEnded) => {
                tracing::debug!("Frame stream ended, reconnecting");
            }
            Err(e) => {
                tracing::debug!("Frame stream error: {}", e);
            }
        }
        tokio::time::sleep(reconnect).await;
    }
}

enum PullEnd {
    StreamEnded,
    AppClosed,
}

async fn pull_frames(
    client: &reqwest::Client,
    url: &str,
    proxy: &MessageProxy<FrameReady>,
    serial: &mut u64,
) -> Result<PullEnd, reqwest::Error> {
    let mut response = client.get(url).send().await?.error_for_status()?;
    let mut splitter = MjpegSplitter::default();

    while let Some(chunk) = response.chunk().await? {
        // Only the newest complete frame in a chunk is worth decoding
        let Some(bytes) = splitter.push(&chunk).pop() else {
            continue;
        };
        *serial += 1;
        match StreamFrame::decode(&bytes, *serial) {
            Ok(frame) => {
                if proxy.message(FrameReady(Arc::new(frame))).is_err() {
                    return Ok(PullEnd::AppClosed);
                }
            }
            Err(e) => tracing::debug!("Skipping frame {}: {}", serial, e),
        }
    }
    Ok(PullEnd::StreamEnded)
}
