//! Fallback palette for terminals without truecolor support, using only
//! indexed ANSI-256 colors.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

fn build_ansi_roles() -> ThemeRoles {
    ThemeRoles {
        background: Color::Indexed(234),
        surface: Color::Indexed(236),
        surface_muted: Color::Indexed(238),
        border: Color::Indexed(240),

        text: Color::Indexed(255),
        text_secondary: Color::Indexed(252),
        text_muted: Color::Indexed(245),

        accent_primary: Color::Indexed(27),
        accent_secondary: Color::Indexed(33),

        info: Color::Indexed(33),
        success: Color::Indexed(77),
        warning: Color::Indexed(214),
        error: Color::Indexed(203),

        selection_bg: Color::Indexed(240),
        selection_fg: Color::Indexed(255),
        focus: Color::Indexed(33),
        modal_bg: Color::Indexed(233),
    }
}

/// ANSI-256 fallback theme.
#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: build_ansi_roles(),
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
