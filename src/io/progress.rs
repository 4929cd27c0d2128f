//! Batch progress display on stderr

use std::path::Path;
use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many images of a batch have been scored
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress manager; call [`Self::initialize`] to show it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            completed: 0,
        }
    }

    /// Size the bar for a batch and draw it on stderr
    pub fn initialize(&mut self, file_count: usize) {
        self.completed = 0;
        self.bar = ProgressBar::with_draw_target(
            Some(file_count as u64),
            ProgressDrawTarget::stderr(),
        );
        self.bar.set_style(BATCH_STYLE.clone());
    }

    /// Show which file is being scored
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Advance past a scored or failed file
    pub fn complete_file(&mut self) {
        self.completed += 1;
        self.bar.inc(1);
    }

    /// Files completed since the last [`Self::initialize`]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Run output code without tearing the bar
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
