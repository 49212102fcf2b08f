//! State machine backing the upload page.
//!
//! The workflow walks Idle -> FilesChosen -> Processing -> Completed.
//! "Analysis" is simulated: triggering a batch only moves counters, and a
//! delayed task owned by the runtime reports completion. There is no
//! failure path; a batch either completes or is aborted by navigation.

use hireview_types::{AnalysisOutcome, SelectedFile};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// Phase of the simulated upload-and-analyze workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    /// No job selected or no files chosen.
    Idle,
    /// Job and at least one file selected; analyze is available.
    FilesChosen,
    /// A batch is in flight.
    Processing,
    /// The last triggered batch finished.
    Completed,
}

/// Ephemeral state of the upload page.
///
/// Counters track the same batch through mutually exclusive phases: at most
/// one of `processing`/`completed` is non-zero for a given triggered batch.
/// Nothing here is persisted.
#[derive(Debug, Default, Clone)]
pub struct UploadState {
    selected_job_id: Option<String>,
    selected_files: Vec<SelectedFile>,
    uploaded: usize,
    completed: usize,
    processing: usize,
    next_batch_id: u64,
    active_batch: Option<u64>,

    /// Cursor of the job-select control (index into the catalog).
    pub job_cursor: Option<usize>,

    // Focus
    pub container_focus: FocusFlag,
    pub f_job_select: FocusFlag,
    pub f_choose_files: FocusFlag,
    pub f_analyze: FocusFlag,
    pub last_area: Rect,
}

impl UploadState {
    /// Records the selected job position.
    pub fn select_job(&mut self, id: Option<String>) {
        self.selected_job_id = id;
    }

    pub fn selected_job_id(&self) -> Option<&str> {
        self.selected_job_id.as_deref()
    }

    /// Replaces the chosen files with a fresh picker selection.
    pub fn set_selected_files(&mut self, files: Vec<SelectedFile>) {
        self.selected_files = files;
    }

    pub fn selected_files(&self) -> &[SelectedFile] {
        &self.selected_files
    }

    pub fn uploaded(&self) -> usize {
        self.uploaded
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn processing(&self) -> usize {
        self.processing
    }

    /// Whether the analyze action is available.
    ///
    /// Both conditions must hold simultaneously; the button is absent from
    /// the rendered tree otherwise (implicit guard, not a disabled state).
    pub fn can_analyze(&self) -> bool {
        self.selected_job_id.is_some() && !self.selected_files.is_empty()
    }

    /// Derives the workflow phase from the counters and selection.
    pub fn phase(&self) -> UploadPhase {
        if self.processing > 0 {
            UploadPhase::Processing
        } else if self.active_batch.is_none() && self.completed > 0 {
            UploadPhase::Completed
        } else if self.can_analyze() {
            UploadPhase::FilesChosen
        } else {
            UploadPhase::Idle
        }
    }

    /// Triggers a batch: `processing := file count`, leaving `uploaded` and
    /// `completed` at their prior values. Returns the batch id and size for
    /// the runtime to schedule the delayed completion.
    pub fn begin_analysis(&mut self) -> Option<(u64, usize)> {
        if !self.can_analyze() || self.active_batch.is_some() {
            return None;
        }
        let file_count = self.selected_files.len();
        self.processing = file_count;
        let batch_id = self.next_batch_id;
        self.next_batch_id += 1;
        self.active_batch = Some(batch_id);
        Some((batch_id, file_count))
    }

    /// Applies a batch completion. Returns `false` for stale outcomes
    /// (superseded or cancelled batches), which leave the counters alone.
    pub fn complete_analysis(&mut self, outcome: &AnalysisOutcome) -> bool {
        if self.active_batch != Some(outcome.batch_id) {
            return false;
        }
        self.uploaded = outcome.file_count;
        self.completed = outcome.file_count;
        self.processing = 0;
        self.active_batch = None;
        true
    }

    /// Aborts the in-flight batch, if any, zeroing `processing`.
    pub fn cancel_analysis(&mut self) {
        if self.active_batch.take().is_some() {
            self.processing = 0;
        }
    }

    /// Whether a batch is currently in flight.
    pub fn is_processing(&self) -> bool {
        self.active_batch.is_some()
    }
}

impl HasFocus for UploadState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_job_select);
        builder.leaf_widget(&self.f_choose_files);
        if self.can_analyze() {
            builder.leaf_widget(&self.f_analyze);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(name: &str, size: u64) -> SelectedFile {
        SelectedFile::new(PathBuf::from(format!("/resumes/{name}")), size)
    }

    #[test]
    fn analyze_requires_job_and_files() {
        let mut state = UploadState::default();
        assert!(!state.can_analyze());
        assert_eq!(state.phase(), UploadPhase::Idle);

        state.set_selected_files(vec![file("a.pdf", 1000)]);
        assert!(!state.can_analyze(), "files alone are not enough");

        state.set_selected_files(Vec::new());
        state.select_job(Some("1".into()));
        assert!(!state.can_analyze(), "a job alone is not enough");

        state.set_selected_files(vec![file("a.pdf", 1000)]);
        assert!(state.can_analyze());
        assert_eq!(state.phase(), UploadPhase::FilesChosen);
    }

    #[test]
    fn counters_walk_the_phases() {
        let mut state = UploadState::default();
        state.select_job(Some("1".into()));
        state.set_selected_files(vec![file("a.pdf", 1000), file("b.doc", 2000)]);

        let (batch_id, count) = state.begin_analysis().expect("batch starts");
        assert_eq!(count, 2);
        assert_eq!(state.processing(), 2);
        assert_eq!(state.completed(), 0);
        assert_eq!(state.phase(), UploadPhase::Processing);
        // Only one batch at a time.
        assert!(state.begin_analysis().is_none());

        assert!(state.complete_analysis(&AnalysisOutcome {
            batch_id,
            file_count: count,
        }));
        assert_eq!(state.processing(), 0);
        assert_eq!(state.completed(), 2);
        assert_eq!(state.uploaded(), 2);
        assert_eq!(state.phase(), UploadPhase::Completed);
    }

    #[test]
    fn cancellation_zeroes_processing() {
        let mut state = UploadState::default();
        state.select_job(Some("2".into()));
        state.set_selected_files(vec![file("resume.pdf", 1_258_291)]);
        let (batch_id, _) = state.begin_analysis().expect("batch starts");

        state.cancel_analysis();
        assert_eq!(state.processing(), 0);
        // The completion for the cancelled batch must be recognized as
        // stale and dropped.
        assert!(!state.complete_analysis(&AnalysisOutcome {
            batch_id,
            file_count: 1,
        }));
        assert_eq!(state.completed(), 0);
        assert_eq!(state.uploaded(), 0);
    }

    #[test]
    fn data_scientist_scenario() {
        // Job id "2" + resume.pdf (1.2 MB): after completion the counters
        // read 1/1/0 and the file list still shows the selection.
        let mut state = UploadState::default();
        state.select_job(Some("2".into()));
        state.set_selected_files(vec![file("resume.pdf", 1_258_291)]);

        let (batch_id, count) = state.begin_analysis().expect("batch starts");
        assert_eq!(state.processing(), 1);
        assert!(state.complete_analysis(&AnalysisOutcome {
            batch_id,
            file_count: count,
        }));

        assert_eq!(state.uploaded(), 1);
        assert_eq!(state.completed(), 1);
        assert_eq!(state.processing(), 0);
        let shown = &state.selected_files()[0];
        assert_eq!(format!("{} — {}", shown.name, shown.size_display()), "resume.pdf — 1.20 MB");
    }
}
