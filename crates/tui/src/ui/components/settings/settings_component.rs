use crossterm::event::{KeyCode, KeyEvent};
use hireview_types::{Effect, Route};
use rat_focus::FocusFlag;
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

use super::state::Weight;

/// The settings page: scoring-weight sliders, numeric limits, and Save.
#[derive(Debug, Default)]
pub struct SettingsComponent;

impl SettingsComponent {
    fn render_slider(
        frame: &mut Frame,
        area: Rect,
        app: &App,
        label: &str,
        value: u8,
        flag: &FocusFlag,
    ) {
        let theme = &*app.ctx.theme;
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);
        frame.render_widget(
            Line::from(vec![
                Span::styled(label, theme.text_secondary_style()),
                Span::styled(format!("  {value}%"), theme.text_primary_style()),
            ]),
            rows[0],
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(if flag.get() {
                    theme.roles().focus
                } else {
                    theme.roles().accent_primary
                })
                .ratio(f64::from(value) / 100.0)
                .label(""),
            rows[1],
        );
    }

    fn render_number(
        frame: &mut Frame,
        area: Rect,
        app: &App,
        label: &str,
        text: &str,
        flag: &FocusFlag,
    ) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some(label), flag.get());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(text.to_string()).style(th::input_style(theme, flag.get())),
            inner,
        );
    }
}

impl Component for SettingsComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let slider = [
            (Weight::HardMatch, app.settings.f_hard_match.get()),
            (Weight::SoftMatch, app.settings.f_soft_match.get()),
            (Weight::MinimumPassing, app.settings.f_passing_score.get()),
            (Weight::AutoApprove, app.settings.f_auto_approve.get()),
        ]
        .into_iter()
        .find_map(|(weight, focused)| focused.then_some(weight));

        if let Some(weight) = slider {
            match key.code {
                KeyCode::Left => app.settings.adjust(weight, -5),
                KeyCode::Right => app.settings.adjust(weight, 5),
                _ => {}
            }
        } else if app.settings.f_max_file_size.get() {
            match key.code {
                KeyCode::Char(c) => app.settings.max_file_size_mb.push(c),
                KeyCode::Backspace => app.settings.max_file_size_mb.backspace(),
                _ => {}
            }
        } else if app.settings.f_retention.get() {
            match key.code {
                KeyCode::Char(c) => app.settings.data_retention_days.push(c),
                KeyCode::Backspace => app.settings.data_retention_days.backspace(),
                _ => {}
            }
        } else if app.settings.f_save.get() && key.code == KeyCode::Enter {
            // Nothing is persisted; Save only acknowledges the click.
            app.settings.mark_saved();
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        app.settings.last_area = area;
        let theme = &*app.ctx.theme;

        let rows = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(11),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(
                    Route::Settings.title(),
                    theme.text_primary_style().add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    "Tune scoring weights and screening limits.",
                    theme.text_muted_style(),
                ),
            ]),
            rows[0],
        );

        let weights_block = th::block(theme, Some("Scoring Weights"), false);
        let weights_inner = weights_block.inner(rows[1]);
        frame.render_widget(weights_block, rows[1]);
        let slider_rows = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .spacing(0)
        .split(weights_inner);
        Self::render_slider(
            frame,
            slider_rows[0],
            app,
            "Hard Match Weight",
            app.settings.hard_match_weight,
            &app.settings.f_hard_match,
        );
        Self::render_slider(
            frame,
            slider_rows[1],
            app,
            "Soft Match Weight",
            app.settings.soft_match_weight,
            &app.settings.f_soft_match,
        );
        Self::render_slider(
            frame,
            slider_rows[2],
            app,
            "Minimum Passing Score",
            app.settings.minimum_passing_score,
            &app.settings.f_passing_score,
        );
        Self::render_slider(
            frame,
            slider_rows[3],
            app,
            "Auto-Approve Threshold",
            app.settings.auto_approve_threshold,
            &app.settings.f_auto_approve,
        );

        let number_columns =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(rows[2]);
        Self::render_number(
            frame,
            number_columns[0],
            app,
            "Max File Size (MB)",
            app.settings.max_file_size_mb.text(),
            &app.settings.f_max_file_size,
        );
        Self::render_number(
            frame,
            number_columns[1],
            app,
            "Data Retention (days)",
            app.settings.data_retention_days.text(),
            &app.settings.f_retention,
        );

        let save_columns =
            Layout::horizontal([Constraint::Length(16), Constraint::Min(1)]).split(rows[3]);
        th::render_button(
            frame,
            save_columns[0],
            "Save Changes",
            theme,
            th::ButtonRenderOptions::new(true, app.settings.f_save.get(), false).primary(),
        );
        if app.settings.save_hint_visible() {
            frame.render_widget(
                Paragraph::new("Settings saved.").style(theme.status_success()),
                save_columns[1],
            );
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[
                (" Tab", " Next control "),
                ("←/→", " Adjust slider "),
                ("Enter", " Save "),
            ],
        )
    }
}
