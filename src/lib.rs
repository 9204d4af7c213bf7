// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! ROI Editor: an interactive counting-zone polygon editor built with Xilem

use std::path::PathBuf;
use std::time::Duration;

use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::core::fork;
use xilem::{EventLoopBuilder, WidgetView, WindowView, Xilem, window};

mod components;
mod config;
mod data;
mod editing;
mod file_watcher;
mod model;
mod polygon;
mod settings;
mod stream;
mod theme;
mod views;

use config::Config;
use data::AppState;
use views::editor_page;

/// Entry point for the ROI editor
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    init_tracing();

    // Optional first argument: path to a TOML config file
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let handle = Config::load(config_path.as_deref());
    match &handle.source {
        Some(path) => tracing::info!("Using config {}", path.display()),
        None => tracing::info!("Using built-in config defaults"),
    }
    tracing::info!(
        "Stream {}, ROI file {}",
        handle.config.stream_url,
        handle.config.roi_path.display()
    );

    let initial_state = AppState::new(handle.config);
    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Tracing subscriber controlled by RUST_LOG, with noisy wgpu/naga
/// shader logs filtered out
fn init_tracing() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in [
        "roi_editor=info",
        "wgpu=warn",
        "naga=warn",
        "wgpu_core=warn",
        "wgpu_hal=warn",
    ] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the single editor window
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let content = editor_with_background_tasks(state);

    let window_size = LogicalSize::new(1280.0, 860.0);
    let window_view = window(state.main_window_id, "ROI Editor", content);
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}

/// The editor page plus its three background tasks: the health probe,
/// the raw frame feed and the ROI file watcher.
fn editor_with_background_tasks(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let stream_url = state.config.stream_url.clone();
    let raw_stream_url = state.config.resolved_raw_stream_url();
    let probe_interval = state.config.probe_interval();
    let probe_timeout = state.config.probe_timeout();
    let reconnect = Duration::from_secs(settings::stream::RECONNECT_SECS);
    let roi_path = state.roi_file.path().to_path_buf();
    let save_flag = state.save_in_progress.clone();
    let page = editor_page(state);

    let with_probe = fork(
        page,
        xilem::view::task_raw(
            move |proxy| {
                let url = stream_url.clone();
                async move {
                    stream::run_probe_loop(proxy, url, probe_interval, probe_timeout).await;
                }
            },
            |state: &mut AppState, report: stream::HealthReport| {
                state.set_stream_health(report.0);
            },
        ),
    );

    let with_frames = fork(
        with_probe,
        xilem::view::task_raw(
            move |proxy| {
                let url = raw_stream_url.clone();
                async move {
                    stream::run_frame_loop(proxy, url, reconnect).await;
                }
            },
            |state: &mut AppState, frame: stream::FrameReady| {
                // Frames that arrive while the probe says offline are dropped
                if state.stream_health.is_healthy() {
                    state.set_frame(frame.0);
                }
            },
        ),
    );

    fork(
        with_frames,
        xilem::view::task_raw(
            move |proxy| {
                let path = roi_path.clone();
                let flag = save_flag.clone();
                async move {
                    file_watcher::watch_roi_file(proxy, path, flag).await;
                }
            },
            |state: &mut AppState, _msg: file_watcher::RoiFileChanged| {
                state.reload_roi_from_disk();
            },
        ),
    )
}
