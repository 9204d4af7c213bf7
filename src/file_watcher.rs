// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Watches the ROI file for edits made outside the editor.
//!
//! The parent directory is watched (editors and our own save both replace
//! the file by rename) and events are filtered down to the ROI file. A
//! 1-second quiet window batches bursts of writes. Saves made by the
//! editor itself set `save_flag` so they are not reloaded.

use notify::{Event, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use xilem::core::MessageProxy;
use xilem::tokio;

/// Message sent when the ROI file changed on disk
#[derive(Debug)]
pub struct RoiFileChanged;

fn is_roi_event(event: &Event, roi_name: Option<&std::ffi::OsStr>) -> bool {
    use notify::EventKind::*;
    matches!(event.kind, Create(_) | Modify(_) | Remove(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some() && p.file_name() == roi_name)
}

pub async fn watch_roi_file(
    proxy: MessageProxy<RoiFileChanged>,
    roi_path: PathBuf,
    save_flag: Arc<AtomicBool>,
) {
    let dir = match roi_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => dir.to_path_buf(),
        None => PathBuf::from("."),
    };
    let roi_name = roi_path.file_name().map(|n| n.to_os_string());

    let (tx, mut rx) = tokio::sync::mpsc::channel::<Event>(64);

    // The watcher lives on this stack frame for as long as the task runs
    let mut watcher = match notify::recommended_watcher(
        move |result: Result<Event, notify::Error>| {
            if let Ok(event) = result
                && is_roi_event(&event, roi_name.as_deref())
            {
                let _ = tx.blocking_send(event);
            }
        },
    ) {
        Ok(w) => w,
        Err(e) => {
            tracing::error!("Failed to create file watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(Path::new(&dir), RecursiveMode::NonRecursive) {
        tracing::error!("Failed to watch {}: {}", dir.display(), e);
        return;
    }
    tracing::info!("Watching for external changes: {}", roi_path.display());

    loop {
        let Some(_first) = rx.recv().await else {
            break;
        };

        // Debounce: wait until 1 second of quiet
        loop {
            match tokio::time::timeout(Duration::from_secs(1), rx.recv()).await {
                Ok(Some(_)) => continue,
                Ok(None) => return,
                Err(_) => break,
            }
        }

        if save_flag.swap(false, Ordering::SeqCst) {
            continue;
        }

        tracing::info!("ROI file changed externally, reloading");

        if proxy.message(RoiFileChanged).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::EventKind;
    use notify::event::{CreateKind, ModifyKind};

    #[test]
    fn only_roi_file_events_pass() {
        let name = std::ffi::OsStr::new("roi.json");
        let roi = Event::new(EventKind::Modify(ModifyKind::Any)).add_path("/data/roi.json".into());
        let tmp =
            Event::new(EventKind::Create(CreateKind::File)).add_path("/data/roi.json.tmp".into());
        let access = Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path("/data/roi.json".into());

        assert!(is_roi_event(&roi, Some(name)));
        assert!(!is_roi_event(&tmp, Some(name)));
        assert!(!is_roi_event(&access, Some(name)));
    }
}
