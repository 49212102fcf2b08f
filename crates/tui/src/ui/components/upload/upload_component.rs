use crossterm::event::{KeyCode, KeyEvent};
use hireview_types::{Effect, Modal, RESUME_EXTENSIONS, Route};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

use super::state::UploadPhase;

const THROBBER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// The upload page: job selection, file picking, counters, and the
/// analyze trigger.
#[derive(Debug, Default)]
pub struct UploadComponent;

impl UploadComponent {
    /// Moves the job-select cursor and records the catalog id it lands on.
    fn cycle_job(app: &mut App, forward: bool) {
        let len = app.ctx.catalog.len();
        if len == 0 {
            return;
        }
        let next = match (app.upload.job_cursor, forward) {
            (None, true) => Some(0),
            (None, false) => Some(len - 1),
            (Some(idx), true) => Some((idx + 1) % len),
            (Some(idx), false) => Some((idx + len - 1) % len),
        };
        app.upload.job_cursor = next;
        let id = next.and_then(|idx| app.ctx.catalog.positions().get(idx)).map(|job| job.id.clone());
        app.upload.select_job(id);
    }

    fn render_job_select(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.upload.f_job_select.get();
        let block = th::block(theme, Some("Select Job Position"), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let label = match app.upload.selected_job_id().and_then(|id| app.ctx.catalog.find(id)) {
            Some(job) => Line::from(vec![
                Span::styled(job.title.clone(), theme.text_primary_style()),
                Span::styled(format!(" - {}", job.department), theme.text_muted_style()),
            ]),
            None => Line::from(Span::styled("Select a job position...", theme.text_muted_style())),
        };
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
        frame.render_widget(Paragraph::new(label), rows[0]);
        frame.render_widget(
            Paragraph::new("Choose the position you're hiring for to ensure accurate matching.")
                .style(theme.text_muted_style()),
            rows[1],
        );
    }

    fn render_files(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("Upload Files"), app.upload.f_choose_files.get());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut rows: Vec<Constraint> = vec![Constraint::Length(1), Constraint::Length(3)];
        if !app.upload.selected_files().is_empty() {
            rows.push(Constraint::Length(1));
            rows.push(Constraint::Min(1));
        }
        let rows = Layout::vertical(rows).split(inner);

        frame.render_widget(
            Paragraph::new("Supports PDF, DOC, and DOCX files up to 10MB.").style(theme.text_muted_style()),
            rows[0],
        );

        if app.upload.selected_job_id().is_none() {
            frame.render_widget(
                Paragraph::new("Select a job position first").style(theme.text_muted_style()).centered(),
                rows[1],
            );
        } else {
            th::render_button(
                frame,
                rows[1],
                "Choose files...",
                theme,
                th::ButtonRenderOptions::new(true, app.upload.f_choose_files.get(), false),
            );
        }

        if !app.upload.selected_files().is_empty() {
            frame.render_widget(
                Paragraph::new("Selected Files:").style(theme.text_secondary_style().add_modifier(Modifier::BOLD)),
                rows[2],
            );
            let lines: Vec<Line> = app
                .upload
                .selected_files()
                .iter()
                .map(|file| {
                    Line::from(vec![
                        Span::styled(file.name.clone(), theme.text_primary_style()),
                        Span::styled(format!(" — {}", file.size_display()), theme.text_muted_style()),
                    ])
                })
                .collect();
            frame.render_widget(Paragraph::new(lines), rows[3]);
        }
    }

    fn render_counters(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let columns = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

        let throbber = if app.upload.phase() == UploadPhase::Processing {
            format!(" {}", THROBBER_FRAMES[app.throbber_idx % THROBBER_FRAMES.len()])
        } else {
            String::new()
        };
        let cards = [
            ("Total Uploaded", app.upload.uploaded().to_string(), theme.status_info()),
            ("Completed", app.upload.completed().to_string(), theme.status_success()),
            ("Processing", format!("{}{throbber}", app.upload.processing()), theme.status_warning()),
        ];
        for (idx, (label, value, value_style)) in cards.into_iter().enumerate() {
            let card = th::block(theme, None, false);
            let inner = card.inner(columns[idx]);
            frame.render_widget(card, columns[idx]);
            let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
            frame.render_widget(
                Paragraph::new(value).style(value_style.add_modifier(Modifier::BOLD)).centered(),
                rows[0],
            );
            frame.render_widget(Paragraph::new(label).style(theme.text_muted_style()).centered(), rows[1]);
        }
    }
}

impl Component for UploadComponent {
    fn on_route_exit(&mut self, app: &mut App) -> Vec<Effect> {
        // Leaving the page aborts the in-flight batch so a late completion
        // cannot mutate state the user no longer sees.
        if app.upload.is_processing() {
            return vec![Effect::AnalysisAbortRequested];
        }
        Vec::new()
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        if app.upload.f_job_select.get() {
            match key.code {
                KeyCode::Left => Self::cycle_job(app, false),
                KeyCode::Right | KeyCode::Enter => Self::cycle_job(app, true),
                _ => {}
            }
        } else if app.upload.f_choose_files.get() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) && app.upload.selected_job_id().is_some() {
                effects.push(Effect::ShowModal(Modal::FilePicker(RESUME_EXTENSIONS)));
            }
        } else if app.upload.f_analyze.get()
            && key.code == KeyCode::Enter
            && app.upload.can_analyze()
        {
            effects.push(Effect::AnalyzeRequested);
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        app.upload.last_area = area;
        let theme_muted = app.ctx.theme.text_muted_style();

        let mut rows = vec![
            Constraint::Length(2), // heading
            Constraint::Length(5), // job select
            Constraint::Min(9),    // files
            Constraint::Length(4), // counters
        ];
        // Implicit guard: the analyze action is only part of the tree when
        // a job and at least one file are selected.
        if app.upload.can_analyze() {
            rows.push(Constraint::Length(3));
        }
        let rows = Layout::vertical(rows).split(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(Route::Upload.title(), app.ctx.theme.text_primary_style().add_modifier(Modifier::BOLD)),
                Line::styled("Upload candidate resumes for AI-powered analysis and scoring.", theme_muted),
            ])
            .wrap(Wrap { trim: true }),
            rows[0],
        );

        Self::render_job_select(frame, rows[1], app);
        Self::render_files(frame, rows[2], app);
        Self::render_counters(frame, rows[3], app);

        if app.upload.can_analyze() {
            let label = format!("Analyze & Store ({} files)", app.upload.selected_files().len());
            th::render_button(
                frame,
                rows[4],
                &label,
                &*app.ctx.theme,
                th::ButtonRenderOptions::new(true, app.upload.f_analyze.get(), false).primary(),
            );
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hints = vec![(" Tab", " Next control "), ("←/→", " Pick job ")];
        if app.upload.can_analyze() {
            hints.push(("Enter", " Analyze "));
        }
        th::build_hint_spans(&*app.ctx.theme, &hints)
    }
}
