//! Row-level progress display for a conversion

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_MIN_ROWS, PROGRESS_ROW_STRIDE};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static SCAN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the rows of the tiling scan
///
/// Stays hidden for images shorter than `PROGRESS_MIN_ROWS`, and when
/// created disabled.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager that has not started any bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Whether a bar is currently shown
    pub const fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Begin tracking a scan of `rows` rows for the given input
    pub fn start(&mut self, path: &Path, rows: usize) {
        if rows < PROGRESS_MIN_ROWS {
            self.bar = None;
            return;
        }

        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let bar = ProgressBar::new(rows as u64);
        bar.set_style(SCAN_STYLE.clone());
        bar.set_prefix(display_name);
        self.bar = Some(bar);
    }

    /// Report that `rows_done` rows have been swept
    pub fn update(&self, rows_done: usize, rows: usize) {
        if let Some(ref bar) = self.bar {
            if rows_done % PROGRESS_ROW_STRIDE == 0 || rows_done == rows {
                bar.set_position(rows_done as u64);
            }
        }
    }

    /// Mark the scan as done with a short summary message
    pub fn finish(&mut self, message: &str) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message(message.to_string());
        }
    }
}
