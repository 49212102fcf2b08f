//! Terminal user interface for the Hireview screening dashboard.
//!
//! The UI follows a component-based architecture: the sidebar, each page,
//! and the file-picker modal are separate components that handle their own
//! input and rendering, reporting side effects back to the runtime through
//! `Effect` values. All mutable state lives centrally on [`app::App`]; each
//! mutation is a named transition on one of its state containers.

mod app;
mod ui;

use std::time::Duration;

use anyhow::Result;
use hireview_catalog::JobCatalog;

pub use app::App;

/// Options threaded in from the binary's CLI surface.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Preferred theme name; environment and terminal capability may
    /// override it.
    pub theme: Option<String>,
    /// Delay of the simulated analysis before a batch reports completion.
    pub analysis_delay: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            theme: None,
            analysis_delay: ui::runtime::DEFAULT_ANALYSIS_DELAY,
        }
    }
}

/// Runs the main TUI application loop.
///
/// Initializes the terminal, sets up the component tree, and drives the
/// event loop until the user quits.
///
/// # Errors
///
/// Returns an error for terminal setup failures (raw mode, alternate
/// screen) or event-loop runtime issues.
pub async fn run(catalog: JobCatalog, options: RunOptions) -> Result<()> {
    ui::runtime::run_app(catalog, options).await
}
