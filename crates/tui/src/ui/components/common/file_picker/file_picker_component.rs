use crossterm::event::{KeyCode, KeyEvent};
use hireview_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// Modal for picking resume files to upload.
///
/// Space toggles the highlighted file, Enter descends into directories or
/// toggles files, and Confirm hands the picked set to the upload page.
#[derive(Debug, Default)]
pub struct FilePickerComponent;

impl FilePickerComponent {
    fn confirm(app: &mut App) -> Vec<Effect> {
        if let Some(picker) = app.file_picker.as_mut() {
            let files = picker.take_picked();
            if !files.is_empty() {
                app.upload.set_selected_files(files);
            }
        }
        vec![Effect::CloseModal]
    }

    fn render_shortcuts(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let Some(picker) = app.file_picker.as_ref() else {
            return;
        };
        let rows = Layout::vertical(vec![Constraint::Length(3); picker.shortcuts().len()]).split(area);
        for (idx, shortcut) in picker.shortcuts().iter().enumerate() {
            let focused = picker
                .shortcuts_focus
                .get(idx)
                .map(|flag| flag.get())
                .unwrap_or(false);
            th::render_button(
                frame,
                rows[idx],
                &shortcut.name,
                theme,
                th::ButtonRenderOptions::new(true, focused, false),
            );
        }
    }

    fn render_listing(frame: &mut Frame, area: Rect, app: &mut App) {
        let Some(picker) = app.file_picker.as_mut() else {
            return;
        };
        let theme = &*app.ctx.theme;

        let title = picker
            .cur_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "Files".to_string());
        let block = th::block(theme, Some(&title), picker.f_list.get());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if let Some(error) = picker.read_error() {
            frame.render_widget(
                Paragraph::new(error.to_string()).style(theme.status_error()),
                inner,
            );
            return;
        }

        let items: Vec<ListItem> = picker
            .entries()
            .iter()
            .map(|entry| {
                let line = if entry.is_dir {
                    Line::styled(format!("/{}", entry.name), theme.text_secondary_style())
                } else {
                    let marker = if picker.is_picked(&entry.path) { "[x] " } else { "[ ] " };
                    Line::from(vec![
                        Span::styled(marker, theme.status_success()),
                        Span::styled(entry.name.clone(), theme.text_primary_style()),
                        Span::styled(
                            format!("  {}", hireview_types::format_size_mb(entry.size_bytes)),
                            theme.text_muted_style(),
                        ),
                    ])
                };
                ListItem::new(line)
            })
            .collect();
        let list = List::new(items)
            .highlight_style(theme.selection_style().add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, inner, picker.list_state_mut());
    }
}

impl Component for FilePickerComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Esc {
            return vec![Effect::CloseModal];
        }
        let (on_confirm, on_cancel) = match app.file_picker.as_ref() {
            Some(picker) => (picker.f_confirm.get(), picker.f_cancel.get()),
            None => return Vec::new(),
        };
        if on_confirm && key.code == KeyCode::Enter {
            return Self::confirm(app);
        }
        if on_cancel && key.code == KeyCode::Enter {
            return vec![Effect::CloseModal];
        }

        let Some(picker) = app.file_picker.as_mut() else {
            return Vec::new();
        };
        if let Some(idx) = picker.shortcuts_focus.iter().position(|flag| flag.get()) {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                picker.shortcut_pressed(idx);
            }
        } else if picker.f_list.get() {
            match key.code {
                KeyCode::Up => picker.select_previous(),
                KeyCode::Down => picker.select_next(),
                KeyCode::Enter => picker.activate_selected(),
                KeyCode::Char(' ') => {
                    if let Some(entry) = picker.selected_entry().cloned() {
                        picker.toggle_picked(&entry);
                    }
                }
                _ => {}
            }
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme_block = {
            let theme = &*app.ctx.theme;
            th::block(theme, Some("Select Resume Files"), true)
        };
        let inner = theme_block.inner(area);
        frame.render_widget(theme_block, area);
        if let Some(picker) = app.file_picker.as_mut() {
            picker.last_area = area;
        }

        let rows = Layout::vertical([
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(inner);

        let columns =
            Layout::horizontal([Constraint::Length(18), Constraint::Min(20)]).split(rows[0]);
        Self::render_shortcuts(frame, columns[0], app);
        Self::render_listing(frame, columns[1], app);

        let picked_count = app
            .file_picker
            .as_ref()
            .map(|picker| picker.picked().len())
            .unwrap_or(0);
        frame.render_widget(
            Paragraph::new(format!("{picked_count} file(s) selected"))
                .style(app.ctx.theme.text_muted_style()),
            rows[1],
        );

        let buttons =
            Layout::horizontal([Constraint::Length(12), Constraint::Length(12)]).split(rows[2]);
        let (cancel_focused, confirm_focused) = app
            .file_picker
            .as_ref()
            .map(|picker| (picker.f_cancel.get(), picker.f_confirm.get()))
            .unwrap_or((false, false));
        th::render_button(
            frame,
            buttons[0],
            "Cancel",
            &*app.ctx.theme,
            th::ButtonRenderOptions::new(true, cancel_focused, false),
        );
        th::render_button(
            frame,
            buttons[1],
            "Confirm",
            &*app.ctx.theme,
            th::ButtonRenderOptions::new(picked_count > 0, confirm_focused, false).primary(),
        );
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[
                (" Space", " Toggle file "),
                ("Enter", " Open "),
                ("Esc", " Cancel "),
            ],
        )
    }
}
