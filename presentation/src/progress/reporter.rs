//! Model download progress display

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use risklens_application::DownloadProgressObserver;
use risklens_domain::CapabilityKind;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const BAR_LENGTH: u64 = 100;

/// Shows one progress bar per capability whose model is downloading
pub struct DownloadProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<CapabilityKind, ProgressBar>>,
}

impl DownloadProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn download_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn bar_for(&self, kind: CapabilityKind) -> ProgressBar {
        let mut bars = self.bars.lock().unwrap_or_else(|e| e.into_inner());
        bars.entry(kind)
            .or_insert_with(|| {
                let pb = self.multi.add(ProgressBar::new(BAR_LENGTH));
                pb.set_style(Self::download_style());
                pb.set_prefix(format!("{} model", kind.api_name()));
                pb.set_message("downloading");
                pb
            })
            .clone()
    }
}

impl Default for DownloadProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadProgressObserver for DownloadProgressReporter {
    fn on_download_progress(&self, kind: CapabilityKind, loaded: f64) {
        let percent = (loaded.clamp(0.0, 1.0) * BAR_LENGTH as f64).round() as u64;
        self.bar_for(kind).set_position(percent);
    }

    fn on_download_complete(&self, kind: CapabilityKind) {
        let bar = self
            .bars
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&kind);
        if let Some(pb) = bar {
            pb.finish_with_message(format!("{}", "ready".green()));
        }
    }
}

/// Line-based progress for stderr that is not a terminal
pub struct SimpleDownloadProgress;

impl SimpleDownloadProgress {
    fn ready_line(kind: CapabilityKind) -> String {
        format!("  {} {} model ready", "v".green(), kind.api_name())
    }
}

impl DownloadProgressObserver for SimpleDownloadProgress {
    fn on_download_progress(&self, _kind: CapabilityKind, _loaded: f64) {}

    fn on_download_complete(&self, kind: CapabilityKind) {
        eprintln!("{}", Self::ready_line(kind));
    }
}

/// Pick the progress display for the current stderr
pub fn progress_observer(terminal: bool) -> Arc<dyn DownloadProgressObserver> {
    if terminal {
        Arc::new(DownloadProgressReporter::new())
    } else {
        Arc::new(SimpleDownloadProgress)
    }
}
