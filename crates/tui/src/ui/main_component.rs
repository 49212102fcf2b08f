use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use hireview_types::{Effect, Modal, Msg, Route};
use rat_focus::FocusBuilder;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::app::App;
use crate::ui::components::common::{FilePickerComponent, FilePickerState};
use crate::ui::components::nav_bar::NavBarComponent;
use crate::ui::components::{
    Component, DashboardComponent, EvaluationsComponent, PositionsComponent, SettingsComponent,
    UploadComponent,
};
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::centered_rect;

/// Top-level view: the sidebar, the active page, the hint bar, and any
/// open modal.
#[derive(Debug, Default)]
pub struct MainView {
    /// Active page component.
    pub content_view: Option<Box<dyn Component>>,
    /// Sidebar component.
    pub nav_bar_view: NavBarComponent,
    /// Open modal component, if any.
    pub modal_view: Option<Box<dyn Component>>,
    /// The widget_id of the focus just before a modal is opened.
    transient_focus_id: Option<usize>,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the active page. Not intended to be called directly;
    /// components request this through `Effect::SwitchTo`.
    pub fn set_current_route(&mut self, app: &mut App, route: Route) {
        let view: Box<dyn Component> = match route {
            Route::Dashboard => Box::new(DashboardComponent),
            Route::Upload => Box::new(UploadComponent),
            Route::Evaluations => Box::new(EvaluationsComponent),
            Route::Positions => Box::new(PositionsComponent),
            Route::Settings => Box::new(SettingsComponent),
        };

        app.current_route = app.nav_bar.set_route(route);
        self.content_view = Some(view);

        app.focus = FocusBuilder::build_for(app);
        match route {
            Route::Dashboard => app.focus.focus(&app.dashboard),
            Route::Upload => app.focus.focus(&app.upload),
            Route::Evaluations => app.focus.focus(&app.evaluations),
            Route::Positions => app.focus.focus(&app.positions),
            Route::Settings => app.focus.focus(&app.settings),
        };
    }

    /// Opens or clears the modal overlay (use None to clear).
    pub fn set_open_modal_kind(&mut self, app: &mut App, modal: Option<Modal>) {
        if let Some(modal_kind) = modal.as_ref() {
            match modal_kind {
                Modal::FilePicker(extensions) => {
                    app.file_picker = Some(FilePickerState::new(*extensions));
                    self.modal_view = Some(Box::new(FilePickerComponent));
                }
            }
            // Save the current focus to restore when the modal closes.
            self.transient_focus_id = app.focus.focused().map(|focus| focus.widget_id());
        } else {
            self.modal_view = None;
            app.file_picker = None;
        }
        app.open_modal_kind = modal;
        app.focus = FocusBuilder::build_for(app);
        if app.open_modal_kind.is_some() {
            app.focus.first();
        }
    }

    pub fn restore_focus(&mut self, app: &mut App) {
        if let Some(id) = self.transient_focus_id
            && app.open_modal_kind.is_none()
        {
            app.focus.by_widget_id(id);
            self.transient_focus_id = None;
        } else {
            app.focus.first();
        }
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        let mut effects = app.update(msg);
        // Messages go to the modal when one is open, otherwise to the page.
        if let Some(modal) = self.modal_view.as_mut() {
            effects.append(&mut modal.handle_message(app, msg));
        } else if let Some(content) = self.content_view.as_mut() {
            effects.append(&mut content.handle_message(app, msg));
        }
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if let Some(modal) = self.modal_view.as_mut() {
            let effects = modal.handle_key_events(app, key);
            if !effects.is_empty() {
                return effects;
            }
            match key.code {
                KeyCode::Tab => {
                    app.focus.next();
                }
                KeyCode::BackTab => {
                    app.focus.prev();
                }
                _ => {}
            }
            return Vec::new();
        }

        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.focus.prev();
                return Vec::new();
            }
            _ => {}
        }

        if app.nav_bar.container_focus.get()
            || app.nav_bar.item_focus_flags.iter().any(|flag| flag.get())
        {
            return self.nav_bar_view.handle_key_events(app, key);
        }

        if let Some(content) = self.content_view.as_mut() {
            return content.handle_key_events(app, key);
        }

        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if let Some(modal) = self.modal_view.as_mut() {
            return modal.handle_mouse_events(app, mouse);
        }

        let mut effects = self.nav_bar_view.handle_mouse_events(app, mouse);
        effects.extend(
            self.content_view
                .as_mut()
                .map(|c| c.handle_mouse_events(app, mouse))
                .unwrap_or_default(),
        );
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Fill the whole background so page layouts can leave gaps.
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let outer = Layout::horizontal([
            Constraint::Length(22), // Nav bar width
            Constraint::Min(1),
        ])
        .split(area);
        let content = Layout::vertical([
            Constraint::Percentage(100),
            Constraint::Min(1), // Hints bar
        ])
        .split(outer[1]);

        self.nav_bar_view.render(frame, outer[0], app);
        if let Some(current) = self.content_view.as_mut() {
            current.render(frame, content[0], app);
        }

        let hint_spans: Vec<Span> = self.get_hint_spans(app);
        let hints_widget = Paragraph::new(Line::from(hint_spans)).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints_widget, content[1]);

        if let Some(modal) = self.modal_view.as_mut() {
            frame.render_widget(
                Block::default().style(app.ctx.theme.modal_background_style()),
                frame.area(),
            );
            let modal_area = centered_rect(70, 80, area);
            frame.render_widget(Clear, modal_area);
            modal.render(frame, modal_area, app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];

        if let Some(modal) = self.modal_view.as_ref() {
            hint_spans.extend(modal.get_hint_spans(app));
            return hint_spans;
        }

        if app.nav_bar.container_focus.get()
            || app.nav_bar.item_focus_flags.iter().any(|flag| flag.get())
        {
            hint_spans.extend(self.nav_bar_view.get_hint_spans(app));
            return hint_spans;
        }

        if let Some(content) = self.content_view.as_ref() {
            hint_spans.extend(content.get_hint_spans(app));
        }

        hint_spans.extend(th::build_hint_spans(&*app.ctx.theme, &[(" Ctrl+C", " Quit ")]));
        hint_spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::slate::SlateTheme;
    use hireview_catalog::JobCatalog;
    use std::time::Duration;

    fn test_app() -> App {
        let catalog = JobCatalog::from_embedded().expect("embedded catalog");
        App::new(catalog, Box::new(SlateTheme::new()), Duration::from_millis(5))
    }

    #[test]
    fn every_route_selects_a_content_view() {
        let mut app = test_app();
        let mut view = MainView::new();
        for route in Route::ALL {
            view.set_current_route(&mut app, route);
            assert_eq!(app.current_route, route);
            assert!(view.content_view.is_some());
            assert_eq!(app.nav_bar.items[app.nav_bar.selected_index].route, route);
        }
    }

    #[test]
    fn file_picker_modal_owns_state_while_open() {
        let mut app = test_app();
        let mut view = MainView::new();
        let initial_route = app.current_route;
        view.set_current_route(&mut app, initial_route);

        view.set_open_modal_kind(&mut app, Some(Modal::FilePicker(hireview_types::RESUME_EXTENSIONS)));
        assert!(view.modal_view.is_some());
        assert!(app.file_picker.is_some());

        view.set_open_modal_kind(&mut app, None);
        assert!(view.modal_view.is_none());
        assert!(app.file_picker.is_none());
        assert!(app.open_modal_kind.is_none());
    }
}
