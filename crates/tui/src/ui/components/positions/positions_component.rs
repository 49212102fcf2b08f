use crossterm::event::{KeyCode, KeyEvent};
use hireview_types::{Effect, JobPosition, Route};
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

/// Height of one job card including its border rows.
const CARD_HEIGHT: u16 = 8;

/// The job-positions page: toolbar, filter selectors, and a card per
/// catalog entry.
#[derive(Debug, Default)]
pub struct PositionsComponent;

impl PositionsComponent {
    fn render_header(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let columns = Layout::horizontal([
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(16),
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(
                    Route::Positions.title(),
                    theme.text_primary_style().add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    "Manage the roles you're screening candidates for.",
                    theme.text_muted_style(),
                ),
            ]),
            columns[0],
        );
        th::render_button(
            frame,
            columns[1],
            "Upload JD",
            theme,
            th::ButtonRenderOptions::new(true, app.positions.f_upload_jd.get(), false),
        );
        th::render_button(
            frame,
            columns[2],
            "Create Job",
            theme,
            th::ButtonRenderOptions::new(true, app.positions.f_create.get(), false).primary(),
        );
    }

    fn render_filters(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let columns = Layout::horizontal([
            Constraint::Min(20),
            Constraint::Length(22),
            Constraint::Length(14),
        ])
        .split(area);

        let search_block = th::block(theme, Some("Search"), app.positions.f_search.get());
        let inner = search_block.inner(columns[0]);
        frame.render_widget(search_block, columns[0]);
        let content = if app.positions.search.is_empty() && !app.positions.f_search.get() {
            Line::styled("Search positions...", theme.text_muted_style())
        } else {
            Line::styled(
                app.positions.search.clone(),
                th::input_style(theme, app.positions.f_search.get()),
            )
        };
        frame.render_widget(Paragraph::new(content), inner);

        let dept_block = th::block(theme, Some("Department"), app.positions.f_department.get());
        let dept_inner = dept_block.inner(columns[1]);
        frame.render_widget(dept_block, columns[1]);
        frame.render_widget(
            Paragraph::new(app.positions.department_label().to_string())
                .style(theme.text_primary_style()),
            dept_inner,
        );

        let status_block = th::block(theme, Some("Status"), app.positions.f_status.get());
        let status_inner = status_block.inner(columns[2]);
        frame.render_widget(status_block, columns[2]);
        frame.render_widget(
            Paragraph::new(app.positions.status_label().to_string())
                .style(theme.text_primary_style()),
            status_inner,
        );
    }

    fn render_card(frame: &mut Frame, area: Rect, app: &App, job: &JobPosition, selected: bool) {
        let theme = &*app.ctx.theme;
        let focused = app.positions.f_list.get() && selected;
        let card = th::block(theme, None, focused);
        let inner = card.inner(area);
        frame.render_widget(card, area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        frame.render_widget(
            Line::from(vec![
                Span::styled(
                    job.title.clone(),
                    theme.text_primary_style().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!(" {} ", job.status.as_str()),
                    th::status_badge_style(theme, job.status),
                ),
            ]),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(format!(
                "{} · {} · {} · {} applicants · created {}",
                job.department, job.location, job.salary, job.applicants, job.created
            ))
            .style(theme.text_muted_style()),
            rows[1],
        );
        let description = textwrap::fill(&job.description, inner.width.max(1) as usize);
        frame.render_widget(
            Paragraph::new(description).style(theme.text_secondary_style()),
            rows[2],
        );
        let mut skill_spans: Vec<Span> = Vec::new();
        for skill in &job.skills {
            skill_spans.push(Span::styled(format!(" {skill} "), th::badge_style(theme)));
            skill_spans.push(Span::raw(" "));
        }
        frame.render_widget(Line::from(skill_spans), rows[3]);
        frame.render_widget(
            Line::from(vec![
                Span::styled("[Edit]", theme.text_muted_style()),
                Span::raw("  "),
                Span::styled("[Delete]", theme.text_muted_style()),
            ]),
            rows[4],
        );
    }
}

impl Component for PositionsComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        // Upload JD, Create Job, Edit, and Delete are stubs; positions are
        // read-only until the backend exists.
        if app.positions.f_search.get() {
            match key.code {
                KeyCode::Char(c) => app.positions.search.push(c),
                KeyCode::Backspace => {
                    app.positions.search.pop();
                }
                _ => {}
            }
        } else if app.positions.f_department.get() {
            match key.code {
                KeyCode::Left => app.positions.cycle_department(false),
                KeyCode::Right | KeyCode::Enter => app.positions.cycle_department(true),
                _ => {}
            }
        } else if app.positions.f_status.get() {
            match key.code {
                KeyCode::Left => app.positions.cycle_status(false),
                KeyCode::Right | KeyCode::Enter => app.positions.cycle_status(true),
                _ => {}
            }
        } else if app.positions.f_list.get() {
            match key.code {
                KeyCode::Up => app.positions.move_selection(&app.ctx.catalog, false),
                KeyCode::Down => app.positions.move_selection(&app.ctx.catalog, true),
                _ => {}
            }
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        app.positions.last_area = area;

        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(CARD_HEIGHT),
        ])
        .split(area);

        Self::render_header(frame, rows[0], app);
        Self::render_filters(frame, rows[1], app);

        let jobs = app.positions.visible_positions(&app.ctx.catalog).to_vec();
        let list_area = rows[2];
        // Keep the selected card in view by scrolling whole cards.
        let visible = (list_area.height / CARD_HEIGHT).max(1) as usize;
        let first = app
            .positions
            .selected
            .saturating_sub(visible.saturating_sub(1));
        for (slot, (idx, job)) in jobs.iter().enumerate().skip(first).take(visible).enumerate() {
            let card_area = Rect {
                x: list_area.x,
                y: list_area.y + slot as u16 * CARD_HEIGHT,
                width: list_area.width,
                height: CARD_HEIGHT.min(list_area.height.saturating_sub(slot as u16 * CARD_HEIGHT)),
            };
            if card_area.height == 0 {
                break;
            }
            Self::render_card(frame, card_area, app, job, idx == app.positions.selected);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[
                (" Tab", " Next control "),
                ("←/→", " Cycle filter "),
                ("↑/↓", " Browse "),
            ],
        )
    }
}
