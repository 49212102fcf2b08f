//! Default truecolor theme, mapping the product's slate/blue palette onto
//! the application's theme roles.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Slate surfaces
pub const SLATE_950: Color = Color::Rgb(0x0B, 0x10, 0x1A); // modal backdrop
pub const SLATE_900: Color = Color::Rgb(0x11, 0x18, 0x27); // app background
pub const SLATE_800: Color = Color::Rgb(0x1F, 0x29, 0x37); // panels/cards
pub const SLATE_700: Color = Color::Rgb(0x37, 0x41, 0x51); // muted surfaces, borders
pub const SLATE_600: Color = Color::Rgb(0x4B, 0x55, 0x63); // selection background

// Foregrounds
pub const TEXT_BRIGHT: Color = Color::Rgb(0xF9, 0xFA, 0xFB);
pub const TEXT_DIMMED: Color = Color::Rgb(0xD1, 0xD5, 0xDB);
pub const TEXT_FAINT: Color = Color::Rgb(0x9C, 0xA3, 0xAF);

// Accents
pub const BLUE_PRIMARY: Color = Color::Rgb(0x25, 0x63, 0xEB);
pub const BLUE_SOFT: Color = Color::Rgb(0x3B, 0x82, 0xF6);

// Status
pub const GREEN_OK: Color = Color::Rgb(0x4A, 0xDE, 0x80);
pub const ORANGE_WARN: Color = Color::Rgb(0xFB, 0x92, 0x3C);
pub const RED_ERROR: Color = Color::Rgb(0xF8, 0x71, 0x71);

fn build_slate_roles() -> ThemeRoles {
    ThemeRoles {
        background: SLATE_900,
        surface: SLATE_800,
        surface_muted: SLATE_700,
        border: SLATE_700,

        text: TEXT_BRIGHT,
        text_secondary: TEXT_DIMMED,
        text_muted: TEXT_FAINT,

        accent_primary: BLUE_PRIMARY,
        accent_secondary: BLUE_SOFT,

        info: BLUE_SOFT,
        success: GREEN_OK,
        warning: ORANGE_WARN,
        error: RED_ERROR,

        selection_bg: SLATE_600,
        selection_fg: TEXT_BRIGHT,
        focus: BLUE_SOFT,
        modal_bg: SLATE_950,
    }
}

/// Default dark theme tuned to the product's slate/blue look.
#[derive(Debug, Clone)]
pub struct SlateTheme {
    roles: ThemeRoles,
}

impl SlateTheme {
    pub fn new() -> Self {
        Self {
            roles: build_slate_roles(),
        }
    }
}

impl Default for SlateTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for SlateTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
