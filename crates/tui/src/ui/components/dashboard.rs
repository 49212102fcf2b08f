//! Dashboard page: stat cards, the recent-evaluations panel, and quick
//! actions.
//!
//! The evaluation backend is not wired up, so the recent-evaluations panel
//! always shows its load error and the stat counters stay at their zero
//! values except for active jobs, which come from the embedded catalog.

use crossterm::event::{KeyCode, KeyEvent};
use hireview_types::{Effect, Route};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// Focusable controls on the dashboard.
#[derive(Debug)]
pub struct DashboardState {
    pub container_focus: FocusFlag,
    pub f_try_again: FocusFlag,
    pub f_upload_button: FocusFlag,
    pub last_area: Rect,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            container_focus: FocusFlag::named("dashboard"),
            f_try_again: FocusFlag::named("dashboard.try_again"),
            f_upload_button: FocusFlag::named("dashboard.upload"),
            last_area: Rect::default(),
        }
    }
}

impl HasFocus for DashboardState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_try_again);
        builder.leaf_widget(&self.f_upload_button);
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
pub struct DashboardComponent;

impl DashboardComponent {
    fn render_stat_cards(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let columns = Layout::horizontal([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

        let active_jobs = app.ctx.catalog.active_count().to_string();
        let cards = [
            ("Total Resumes", "0".to_string(), "+12% from last month"),
            ("Daily Evaluations", "0".to_string(), "+8% from yesterday"),
            ("Average Score", "0%".to_string(), "+2% from last week"),
            ("Active Jobs", active_jobs, "3 closing this week"),
        ];
        for (idx, (label, value, trend)) in cards.into_iter().enumerate() {
            let card = th::block(theme, Some(label), false);
            let inner = card.inner(columns[idx]);
            frame.render_widget(card, columns[idx]);
            let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
            frame.render_widget(
                Paragraph::new(value).style(theme.text_primary_style().add_modifier(Modifier::BOLD)),
                rows[0],
            );
            frame.render_widget(Paragraph::new(trend).style(th::trend_style(theme)), rows[1]);
        }
    }

    fn render_recent_evaluations(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("Recent Evaluations"), false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(inner);
        frame.render_widget(
            Paragraph::new("Latest resume screening results").style(theme.text_muted_style()),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new("Error loading evaluations: HTTP error! status: 500")
                .style(theme.status_error())
                .centered(),
            rows[2],
        );
        let button = Layout::horizontal([Constraint::Length(14)])
            .flex(ratatui::layout::Flex::Center)
            .split(rows[3])[0];
        th::render_button(
            frame,
            button,
            "Try Again",
            theme,
            th::ButtonRenderOptions::new(true, app.dashboard.f_try_again.get(), false),
        );
    }

    fn render_quick_actions(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("Quick Actions"), false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        th::render_button(
            frame,
            rows[0],
            "Upload New Resume",
            theme,
            th::ButtonRenderOptions::new(true, app.dashboard.f_upload_button.get(), false).primary(),
        );

        frame.render_widget(
            Paragraph::new("Processing Queue").style(theme.text_secondary_style()),
            rows[1],
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(th::gauge_color(theme, true))
                .ratio(0.0)
                .label("0 / 10"),
            rows[2],
        );
        frame.render_widget(
            Paragraph::new("Storage Used").style(theme.text_secondary_style()),
            rows[3],
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(th::gauge_color(theme, true))
                .ratio(0.0)
                .label("0.0 GB / 10 GB"),
            rows[4],
        );
        frame.render_widget(
            Line::from(vec![
                Span::styled("● ", theme.status_success()),
                Span::styled("Backend connected", theme.text_muted_style()),
            ]),
            rows[5],
        );
    }
}

impl Component for DashboardComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Enter && app.dashboard.f_upload_button.get() {
            return vec![Effect::SwitchTo(Route::Upload)];
        }
        // Try Again is a stub; there is no backend to retry against.
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        app.dashboard.last_area = area;
        let theme = &*app.ctx.theme;

        let rows = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(8),
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(Route::Dashboard.title(), theme.text_primary_style().add_modifier(Modifier::BOLD)),
                Line::styled(
                    "Overview of your resume screening activity.",
                    theme.text_muted_style(),
                ),
            ]),
            rows[0],
        );

        Self::render_stat_cards(frame, rows[1], app);

        let columns =
            Layout::horizontal([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)]).split(rows[2]);
        Self::render_recent_evaluations(frame, columns[0], app);
        Self::render_quick_actions(frame, columns[1], app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" Tab", " Next control "), ("Enter", " Activate ")],
        )
    }
}
