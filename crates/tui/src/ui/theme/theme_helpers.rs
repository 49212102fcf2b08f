use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::roles::{Theme, ThemeRoles};
use hireview_types::JobStatus;

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers.
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Filled badge style (skill tags, counters).
pub fn badge_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default().bg(theme.roles().accent_primary).fg(theme.roles().text)
}

/// Badge style keyed to a job posting's status.
pub fn status_badge_style<T: Theme + ?Sized>(theme: &T, status: JobStatus) -> Style {
    let roles = theme.roles();
    match status {
        JobStatus::Active => Style::default().fg(roles.success).bg(roles.surface_muted),
        JobStatus::Draft => Style::default().fg(roles.warning).bg(roles.surface_muted),
        JobStatus::Closed => Style::default().fg(roles.text_muted).bg(roles.surface_muted),
    }
}

/// Style for input fields; caller sets the block border based on focus.
pub fn input_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    let mut style = Style::default().bg(background).fg(text);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// Secondary button style (outline-like; the border carries focus color).
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, enabled: bool, selected: bool) -> Style {
    if enabled {
        let style = Style::default().fg(theme.roles().accent_secondary);
        if selected {
            return style.bg(theme.roles().selection_bg);
        }
        style
    } else {
        theme.text_muted_style()
    }
}

/// Primary button style (filled accent background).
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T, enabled: bool) -> Style {
    if enabled {
        Style::default()
            .bg(theme.roles().accent_primary)
            .fg(theme.roles().text)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(theme.roles().surface_muted).fg(theme.roles().text_muted)
    }
}

/// How a button should be rendered.
#[derive(Debug, Clone, Copy)]
pub struct ButtonRenderOptions {
    pub enabled: bool,
    pub focused: bool,
    pub selected: bool,
    pub primary: bool,
}

impl ButtonRenderOptions {
    pub fn new(enabled: bool, focused: bool, selected: bool) -> Self {
        Self {
            enabled,
            focused,
            selected,
            primary: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }
}

/// Renders a standard button.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, theme: &T, options: ButtonRenderOptions) {
    let border_style = if options.enabled {
        theme.border_style(options.focused)
    } else {
        theme.text_muted_style()
    };

    let button_style = if options.primary {
        button_primary_style(theme, options.enabled)
    } else {
        button_secondary_style(theme, options.enabled, options.selected)
    };

    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(Block::bordered().border_style(border_style))
            .style(button_style),
        area,
    );
}

/// Builds alternating key/description hint spans for the hint bar.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let key_style = Style::default().fg(theme.roles().accent_secondary).add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}

/// Trend-line style used by the dashboard stat cards.
pub fn trend_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default().fg(theme.roles().success)
}

/// Fill color for progress gauges.
pub fn gauge_color<T: Theme + ?Sized>(theme: &T, ok: bool) -> Color {
    if ok { theme.roles().success } else { theme.roles().accent_primary }
}
