use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// File extensions accepted by the resume file picker.
///
/// The picker filters on extension only; no size or content validation is
/// performed client-side. The "up to 10MB" copy shown in the upload page is
/// display text, not an enforced limit.
pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Top-level screens the application can display.
///
/// This is the primary navigation state for the TUI. Modal overlays (the
/// file picker) are tracked separately so they can appear atop any route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Upload,
    Evaluations,
    Positions,
    Settings,
}

impl Route {
    /// All routes in sidebar order.
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::Upload,
        Route::Evaluations,
        Route::Positions,
        Route::Settings,
    ];

    /// Human-facing page title.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Upload => "Upload Resumes",
            Route::Evaluations => "Evaluations",
            Route::Positions => "Job Positions",
            Route::Settings => "Settings",
        }
    }
}

/// Modal overlays that can be opened atop the current route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// File picker restricted to the given extension allow-list.
    FilePicker(&'static [&'static str]),
}

/// Publication status of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Active,
    Draft,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "Active",
            JobStatus::Draft => "Draft",
            JobStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = ParseJobStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" | "active" => Ok(JobStatus::Active),
            "Draft" | "draft" => Ok(JobStatus::Draft),
            "Closed" | "closed" => Ok(JobStatus::Closed),
            _ => Err(ParseJobStatusError),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid job status; expected 'Active', 'Draft', or 'Closed'")]
pub struct ParseJobStatusError;

/// A static, display-only record describing an open role.
///
/// Positions are loaded once from the embedded catalog and never mutated;
/// the edit/delete controls on the positions page render but are not wired
/// to any mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosition {
    /// Unique identifier within the catalog.
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    /// Salary range as display text (e.g., "$120,000 - $150,000").
    pub salary: String,
    #[serde(default)]
    pub applicants: u32,
    pub status: JobStatus,
    /// Creation date as display text (e.g., "Sep 14, 2025").
    pub created: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A file chosen in the picker, pending simulated analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Display name (final path component).
    pub name: String,
    pub size_bytes: u64,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn new(path: PathBuf, size_bytes: u64) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, size_bytes, path }
    }

    /// Size rendered the way the upload page displays it (e.g., "1.20 MB").
    pub fn size_display(&self) -> String {
        format_size_mb(self.size_bytes)
    }
}

/// Formats a byte count as megabytes with two decimals.
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Result of a finished simulated-analysis batch.
///
/// Carries the batch id so stale completions (from a batch that was
/// superseded or cancelled) can be recognized and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub batch_id: u64,
    pub file_count: usize,
}

/// Messages that update application state.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Periodic UI tick (throbbers, transient hints).
    Tick,
    /// Terminal resized.
    Resize(u16, u16),
    /// A simulated-analysis batch finished its delay.
    AnalysisCompleted(AnalysisOutcome),
}

/// Side effects components report back to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Change the main view.
    SwitchTo(Route),
    /// Display a modal view.
    ShowModal(Modal),
    /// Hide any open modal.
    CloseModal,
    /// Start the simulated analysis over the currently selected files.
    AnalyzeRequested,
    /// Abort the in-flight analysis batch, if any.
    AnalysisAbortRequested,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_status_parse_and_display() {
        for status in [JobStatus::Active, JobStatus::Draft, JobStatus::Closed] {
            let parsed: JobStatus = status.as_str().parse().expect("parse status");
            assert_eq!(parsed, status);
            assert_eq!(parsed.to_string(), status.as_str());
        }
        assert!("Archived".parse::<JobStatus>().is_err());
    }

    #[test]
    fn job_position_deserialize_minimal() {
        let json = r#"{
            "id": "9",
            "title": "Staff Engineer",
            "department": "Engineering",
            "location": "Remote",
            "salary": "$1",
            "status": "Draft",
            "created": "Sep 1, 2025"
        }"#;
        let job: JobPosition = serde_json::from_str(json).expect("deserialize JobPosition");
        assert_eq!(job.id, "9");
        assert_eq!(job.status, JobStatus::Draft);
        assert_eq!(job.applicants, 0);
        assert!(job.skills.is_empty());
        assert!(job.description.is_empty());
    }

    #[test]
    fn size_display_matches_upload_page_format() {
        // 1.2 MB binary, as in the upload scenario.
        let file = SelectedFile::new(PathBuf::from("/tmp/resume.pdf"), 1_258_291);
        assert_eq!(file.name, "resume.pdf");
        assert_eq!(file.size_display(), "1.20 MB");
        assert_eq!(format_size_mb(0), "0.00 MB");
    }

    #[test]
    fn route_titles_are_distinct() {
        let mut titles: Vec<&str> = Route::ALL.iter().map(|r| r.title()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), Route::ALL.len());
    }
}
