//! Stage progress display for a reassembly run

use crate::algorithm::pipeline::Stage;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar ticking through the pipeline stages of one input file
///
/// Parsing counts as the first step, followed by every [`Stage`].
pub struct StageProgress {
    bar: ProgressBar,
    completed: u64,
}

impl StageProgress {
    /// Total steps shown: parsing plus every pipeline stage
    pub const STEPS: u64 = Stage::ALL.len() as u64 + 1;

    /// Create a visible progress bar labelled with the input file name
    pub fn new(path: &Path) -> Self {
        let bar = ProgressBar::new(Self::STEPS);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        bar.set_message("parsing tiles");
        Self { bar, completed: 0 }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            completed: 0,
        }
    }

    /// Record that the previous step finished and `stage` is starting
    pub fn start_stage(&mut self, stage: Stage) {
        self.completed = (self.completed + 1).min(Self::STEPS);
        self.bar.set_position(self.completed);
        self.bar.set_message(stage.to_string());
    }

    /// Number of finished steps
    pub const fn completed(&self) -> u64 {
        self.completed
    }

    /// Mark every step complete and remove the bar
    pub fn finish(&mut self) {
        self.completed = Self::STEPS;
        self.bar.set_position(Self::STEPS);
        self.bar.finish_and_clear();
    }

    /// Remove the bar after a failed run, leaving the position where it stopped
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
