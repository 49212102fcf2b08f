//! Theme styling for the UI layer.
//!
//! Defines semantic color roles, the default truecolor Slate palette, an
//! ANSI-256 fallback, and helper builders for Ratatui widgets. Prefer these
//! helpers over hard-coding colors so the pages stay visually consistent.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod roles;
pub mod slate;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use roles::Theme;
pub use slate::SlateTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from the CLI preference, environment, and terminal
/// capability. ANSI-only terminals always get the fallback palette.
pub fn load(preferred_theme: Option<&str>) -> Box<dyn Theme> {
    if matches!(detect_color_capability(), ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; forcing fallback palette");
        return Box::new(Ansi256Theme::new());
    }

    let name = env::var("HIREVIEW_THEME")
        .ok()
        .or_else(|| preferred_theme.map(str::to_owned));
    match name.as_deref().map(str::trim) {
        Some("ansi256" | "ansi") => Box::new(Ansi256Theme::new()),
        Some("slate") | None => Box::new(SlateTheme::new()),
        Some(other) => {
            debug!(theme = other, "unknown theme name; using slate");
            Box::new(SlateTheme::new())
        }
    }
}

fn detect_color_capability() -> ColorCapability {
    if env::var("HIREVIEW_FORCE_TRUECOLOR")
        .ok()
        .map(|value| is_truthy(value.trim()))
        .unwrap_or(false)
    {
        return ColorCapability::Truecolor;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
