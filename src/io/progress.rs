//! Progress display for frame rendering

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} frames")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single bar counting rendered frames
pub struct FrameProgress {
    bar: ProgressBar,
}

impl FrameProgress {
    /// Bar over `frame_count` frames labelled with the pattern name
    pub fn new(label: &str, frame_count: usize) -> Self {
        let bar = ProgressBar::new(frame_count as u64);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_message(label.to_string());
        Self { bar }
    }

    /// Bar that draws nothing
    pub fn hidden(frame_count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(frame_count as u64);
        Self { bar }
    }

    /// Record one more rendered frame
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Frames recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
