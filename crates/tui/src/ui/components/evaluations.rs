//! Evaluations page: browse previously screened resumes.
//!
//! Without a running backend there is nothing to browse, so the list panel
//! shows its load error and the detail panel stays on its empty prompt. The
//! search box still accepts input so the layout behaves like the real page.

use crossterm::event::{KeyCode, KeyEvent};
use hireview_types::{Effect, Route};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug)]
pub struct EvaluationsState {
    pub search: String,
    pub container_focus: FocusFlag,
    pub f_search: FocusFlag,
    pub f_filter: FocusFlag,
    pub f_export: FocusFlag,
    pub last_area: Rect,
}

impl Default for EvaluationsState {
    fn default() -> Self {
        Self {
            search: String::new(),
            container_focus: FocusFlag::named("evaluations"),
            f_search: FocusFlag::named("evaluations.search"),
            f_filter: FocusFlag::named("evaluations.filter"),
            f_export: FocusFlag::named("evaluations.export"),
            last_area: Rect::default(),
        }
    }
}

impl HasFocus for EvaluationsState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_search);
        builder.leaf_widget(&self.f_filter);
        builder.leaf_widget(&self.f_export);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[derive(Debug, Default)]
pub struct EvaluationsComponent;

impl EvaluationsComponent {
    fn render_toolbar(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let columns = Layout::horizontal([
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(12),
        ])
        .split(area);

        let search_block = th::block(theme, Some("Search"), app.evaluations.f_search.get());
        let inner = search_block.inner(columns[0]);
        frame.render_widget(search_block, columns[0]);
        let content = if app.evaluations.search.is_empty() && !app.evaluations.f_search.get() {
            Line::styled("Search by candidate name...", theme.text_muted_style())
        } else {
            Line::styled(
                app.evaluations.search.clone(),
                th::input_style(theme, app.evaluations.f_search.get()),
            )
        };
        frame.render_widget(Paragraph::new(content), inner);

        th::render_button(
            frame,
            columns[1],
            "Filter",
            theme,
            th::ButtonRenderOptions::new(true, app.evaluations.f_filter.get(), false),
        );
        th::render_button(
            frame,
            columns[2],
            "Export",
            theme,
            th::ButtonRenderOptions::new(true, app.evaluations.f_export.get(), false),
        );
    }

    fn render_upload_card(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("Upload"), false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).split(inner);
        frame.render_widget(
            Paragraph::new("Backend server required for file upload and analysis")
                .style(theme.text_muted_style()),
            rows[0],
        );
        let button = Layout::horizontal([Constraint::Length(28)]).split(rows[1])[0];
        // Permanently disabled; no files can be chosen without a backend.
        th::render_button(
            frame,
            button,
            "Analyze & Store (0 files)",
            theme,
            th::ButtonRenderOptions::new(false, false, false).primary(),
        );
    }

    fn render_list_panel(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("Error Loading Evaluations"), false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .flex(ratatui::layout::Flex::Center)
        .split(inner);
        frame.render_widget(
            Paragraph::new("Backend server is not running")
                .style(theme.status_error())
                .centered(),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new("Start the backend to see evaluation results here.")
                .style(theme.text_muted_style())
                .centered(),
            rows[2],
        );
        let buttons = Layout::horizontal([Constraint::Length(14), Constraint::Length(20)])
            .flex(ratatui::layout::Flex::Center)
            .split(rows[3]);
        th::render_button(
            frame,
            buttons[0],
            "Try Again",
            theme,
            th::ButtonRenderOptions::new(true, false, false),
        );
        th::render_button(
            frame,
            buttons[1],
            "Check Connection",
            theme,
            th::ButtonRenderOptions::new(true, false, false),
        );
    }

    fn render_detail_panel(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("Select an Evaluation"), false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(1)])
            .flex(ratatui::layout::Flex::Center)
            .split(inner);
        frame.render_widget(
            Paragraph::new("Choose an evaluation from the list to view details.")
                .style(theme.text_muted_style())
                .centered(),
            rows[0],
        );
    }
}

impl Component for EvaluationsComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        // Filter and Export are stubs until the backend exists.
        if app.evaluations.f_search.get() {
            match key.code {
                KeyCode::Char(c) => app.evaluations.search.push(c),
                KeyCode::Backspace => {
                    app.evaluations.search.pop();
                }
                _ => {}
            }
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        app.evaluations.last_area = area;
        let theme = &*app.ctx.theme;

        let rows = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(8),
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(
                    Route::Evaluations.title(),
                    theme.text_primary_style().add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    "Browse and review AI screening results.",
                    theme.text_muted_style(),
                ),
            ]),
            rows[0],
        );

        Self::render_upload_card(frame, rows[1], app);
        Self::render_toolbar(frame, rows[2], app);

        let columns =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(rows[3]);
        Self::render_list_panel(frame, columns[0], app);
        Self::render_detail_panel(frame, columns[1], app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" Tab", " Next control "), ("Type", " Search ")],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_starts_empty() {
        let state = EvaluationsState::default();
        assert!(state.search.is_empty());
    }
}
