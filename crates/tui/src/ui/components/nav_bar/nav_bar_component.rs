use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use hireview_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::find_target_index_by_mouse_position;

/// The navigation sidebar component.
///
/// Renders a vertical column of page buttons with selection and focus
/// styling. Activation maps directly to `Effect::SwitchTo`.
#[derive(Debug, Default)]
pub struct NavBarComponent;

impl NavBarComponent {
    fn any_item_focused(app: &App) -> bool {
        app.nav_bar.item_focus_flags.iter().any(|flag| flag.get())
    }

    fn item_line<'a>(app: &'a App, index: usize) -> Line<'a> {
        let item = &app.nav_bar.items[index];
        let is_selected = index == app.nav_bar.selected_index;
        let theme = &*app.ctx.theme;

        let label_style = if is_selected {
            theme.text_primary_style().add_modifier(Modifier::BOLD)
        } else {
            theme.text_secondary_style()
        };
        let mut spans = vec![Span::styled(item.label.as_str(), label_style)];
        if let Some(badge) = item.badge {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {badge} "), th::badge_style(theme)));
        }
        Line::from(spans)
    }

    fn preferred_layout(app: &App, area: Rect) -> Vec<Rect> {
        let row_count = app.nav_bar.items.len();
        let mut constraints = vec![Constraint::Length(3); row_count];
        constraints.push(Constraint::Min(0));
        let mut layout = Layout::vertical(constraints).margin(1).split(area).to_vec();
        layout.pop();
        layout
    }
}

impl Component for NavBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match key.code {
            KeyCode::Down => {
                if let Some(flag) = app.nav_bar.cycle_focus(true) {
                    app.focus.by_widget_id(flag.widget_id());
                }
            }
            KeyCode::Up => {
                if let Some(flag) = app.nav_bar.cycle_focus(false) {
                    app.focus.by_widget_id(flag.widget_id());
                }
            }
            KeyCode::Enter => {
                if let Some((item, idx)) = app.nav_bar.focused_item() {
                    let route = item.route;
                    app.nav_bar.selected_index = idx;
                    effects.push(Effect::SwitchTo(route));
                }
            }
            _ => {}
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return effects;
        }
        let maybe_idx = find_target_index_by_mouse_position(
            &app.nav_bar.last_area,
            &app.nav_bar.per_item_areas,
            mouse.column,
            mouse.row,
        );
        if let Some(idx) = maybe_idx {
            if let Some(item) = app.nav_bar.items.get(idx) {
                let route = item.route;
                app.nav_bar.selected_index = idx;
                effects.push(Effect::SwitchTo(route));
            }
            if let Some(flag) = app.nav_bar.item_focus_flags.get(idx) {
                app.focus.focus(flag);
            }
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("Hireview"), Self::any_item_focused(app)).borders(Borders::ALL);
        frame.render_widget(block, area);

        if app.nav_bar.items.is_empty() {
            return;
        }

        let item_rects = Self::preferred_layout(app, area);
        for index in 0..app.nav_bar.items.len() {
            let Some(row_area) = item_rects.get(index).copied() else {
                continue;
            };
            let is_focused = app
                .nav_bar
                .item_focus_flags
                .get(index)
                .map(|flag| flag.get())
                .unwrap_or_default();
            let is_selected = index == app.nav_bar.selected_index;

            let mut row = Paragraph::new(Self::item_line(app, index));
            if is_selected {
                row = row.style(app.ctx.theme.selection_style());
            }
            let borders = if is_focused { Borders::ALL } else { Borders::NONE };
            let row_block = Block::default()
                .borders(borders)
                .border_style(app.ctx.theme.border_style(true));
            frame.render_widget(row.block(row_block), row_area);
        }

        app.nav_bar.last_area = area;
        app.nav_bar.per_item_areas = item_rects;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" Enter", " Open page "), ("↑/↓", " Navigate ")])
    }
}
