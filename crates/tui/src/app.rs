//! Application state for the Hireview TUI.
//!
//! `App` is the single owner of all view state: the current route, the
//! per-page state containers, the focus graph, and cross-cutting context
//! (catalog, theme, analysis delay). Components receive `&mut App` and
//! mutate state only through the named transitions the containers expose.

use std::time::Duration;

use hireview_catalog::JobCatalog;
use hireview_types::{Effect, Modal, Msg, Route};
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::common::FilePickerState;
use crate::ui::components::dashboard::DashboardState;
use crate::ui::components::evaluations::EvaluationsState;
use crate::ui::components::nav_bar::NavBarState;
use crate::ui::components::positions::PositionsState;
use crate::ui::components::settings::SettingsState;
use crate::ui::components::upload::UploadState;
use crate::ui::theme::Theme;

/// Cross-cutting shared context owned by the App.
///
/// Keeps runtime-wide objects out of the per-page containers so components
/// do not thread multiple references around.
pub struct SharedCtx {
    /// Immutable job-position catalog loaded at startup.
    pub catalog: JobCatalog,
    /// Active theme.
    pub theme: Box<dyn Theme>,
    /// Delay before a simulated analysis batch reports completion.
    pub analysis_delay: Duration,
}

impl std::fmt::Debug for SharedCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCtx")
            .field("catalog", &self.catalog.len())
            .field("analysis_delay", &self.analysis_delay)
            .finish()
    }
}

/// The central state container for the entire TUI application.
#[derive(Debug)]
pub struct App {
    /// Shared, cross-cutting context.
    pub ctx: SharedCtx,
    /// Current primary route; initial value is the dashboard.
    pub current_route: Route,
    /// Global focus graph, rebuilt before each render.
    pub focus: Focus,
    /// Root focus flag for the whole application.
    pub container_focus: FocusFlag,
    /// Sidebar state.
    pub nav_bar: NavBarState,
    pub dashboard: DashboardState,
    pub upload: UploadState,
    pub evaluations: EvaluationsState,
    pub positions: PositionsState,
    pub settings: SettingsState,
    /// File-picker state, present only while the modal is open.
    pub file_picker: Option<FilePickerState>,
    /// Which modal is currently open, if any.
    pub open_modal_kind: Option<Modal>,
    /// Whether a simulated analysis batch is in flight.
    pub executing: bool,
    /// Animation frame for the processing throbber.
    pub throbber_idx: usize,
}

impl App {
    pub fn new(catalog: JobCatalog, theme: Box<dyn Theme>, analysis_delay: Duration) -> Self {
        let positions = PositionsState::new(&catalog);
        let mut app = Self {
            ctx: SharedCtx {
                catalog,
                theme,
                analysis_delay,
            },
            current_route: Route::default(),
            focus: Focus::default(),
            container_focus: FocusFlag::named("app"),
            nav_bar: NavBarState::for_routes(),
            dashboard: DashboardState::default(),
            upload: UploadState::default(),
            evaluations: EvaluationsState::default(),
            positions,
            settings: SettingsState::default(),
            file_picker: None,
            open_modal_kind: None,
            executing: false,
            throbber_idx: 0,
        };
        app.focus = FocusBuilder::build_for(&app);
        app.focus.first();
        app
    }

    /// Updates cross-component state from an application message.
    ///
    /// Page components receive the message afterwards through the main
    /// view's dispatch and handle anything page-local.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                if self.executing {
                    self.throbber_idx = (self.throbber_idx + 1) % 10;
                }
                self.settings.tick();
            }
            Msg::Resize(_, _) => {}
            Msg::AnalysisCompleted(outcome) => {
                if self.upload.complete_analysis(outcome) {
                    tracing::info!(
                        batch = outcome.batch_id,
                        files = outcome.file_count,
                        "simulated analysis batch completed"
                    );
                } else {
                    tracing::debug!(batch = outcome.batch_id, "dropping stale analysis completion");
                }
                self.executing = false;
                self.throbber_idx = 0;
            }
        }
        Vec::new()
    }
}

impl HasFocus for App {
    /// Builds the focus tree: an open modal traps focus entirely; otherwise
    /// the sidebar and the current page's controls participate.
    fn build(&self, builder: &mut FocusBuilder) {
        if let Some(picker) = self.file_picker.as_ref() {
            builder.widget(picker);
            return;
        }
        let tag = builder.start(self);
        builder.widget(&self.nav_bar);
        match self.current_route {
            Route::Dashboard => builder.widget(&self.dashboard),
            Route::Upload => builder.widget(&self.upload),
            Route::Evaluations => builder.widget(&self.evaluations),
            Route::Positions => builder.widget(&self.positions),
            Route::Settings => builder.widget(&self.settings),
        };
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::slate::SlateTheme;
    use hireview_types::AnalysisOutcome;

    fn test_app() -> App {
        let catalog = JobCatalog::from_embedded().expect("embedded catalog");
        App::new(catalog, Box::new(SlateTheme::new()), Duration::from_millis(5))
    }

    #[test]
    fn initial_route_is_dashboard() {
        let app = test_app();
        assert_eq!(app.current_route, Route::Dashboard);
        assert!(app.open_modal_kind.is_none());
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut app = test_app();
        // No batch in flight: any completion is stale and must not touch
        // the counters.
        app.update(&Msg::AnalysisCompleted(AnalysisOutcome {
            batch_id: 7,
            file_count: 3,
        }));
        assert_eq!(app.upload.completed(), 0);
        assert_eq!(app.upload.uploaded(), 0);
    }
}
