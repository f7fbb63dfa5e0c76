//! Progress display for legal-set precomputation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static OFFSET_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks precomputation over an offset neighborhood
///
/// Hidden when quiet so callers can report unconditionally.
pub struct PrecomputeProgress {
    bar: ProgressBar,
}

impl PrecomputeProgress {
    /// Create a bar for `offset_count` offsets
    pub fn new(offset_count: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(offset_count as u64)
        };
        bar.set_style(OFFSET_STYLE.clone());
        bar.set_prefix("Offsets");
        bar.set_length(offset_count as u64);
        Self { bar }
    }

    /// Show the offset currently being processed
    pub fn start_offset(&self, offset: &impl std::fmt::Display) {
        self.bar.set_message(format!("{offset}"));
    }

    /// Mark one offset as done
    pub fn complete_offset(&self) {
        self.bar.inc(1);
    }

    /// Number of offsets completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self, patterns: usize) {
        self.bar
            .finish_with_message(format!("{patterns} patterns cached"));
    }
}
