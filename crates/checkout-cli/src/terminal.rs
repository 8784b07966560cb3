//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and capability detection used by the CLI
//! renderers. Detection follows the `NO_COLOR` and `TERM=dumb` conventions.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    // Tag colors (bold reverse video for badges)
    /// Bold reverse cyan for setup darts.
    pub const TAG_SETUP: &str = "\x1b[1;7;36m";
    /// Bold reverse magenta for the finishing double.
    pub const TAG_FINISH: &str = "\x1b[1;7;35m";

    /// Bright bold white for emphasis (scores).
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements (ranks, hints).
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for values.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for preferred finishes.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow for warnings.
    pub const YELLOW: &str = "\x1b[33m";
    /// Orange (256-color) for the banner.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Red for impossible checkouts.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_setup: &'static str,
    pub tag_finish: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub orange: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_setup: colors::TAG_SETUP,
            tag_finish: colors::TAG_FINISH,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            orange: colors::ORANGE,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_setup: "",
            tag_finish: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            yellow: "",
            orange: "",
            red: "",
        }
    }

    /// `colored()` when the terminal supports ANSI colors, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check if the terminal supports Unicode characters.
///
/// Looks for a UTF hint in `LANG` or `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    for key in ["LANG", "LC_ALL"] {
        if let Ok(value) = std::env::var(key) {
            if value.to_uppercase().contains("UTF") {
                return true;
            }
        }
    }
    // On Windows, assume Unicode support unless TERM suggests otherwise
    #[cfg(windows)]
    {
        if let Ok(term) = std::env::var("TERM") {
            return !term.eq_ignore_ascii_case("dumb");
        }
        return true;
    }
    #[cfg(not(windows))]
    {
        false
    }
}

/// Separator placed between darts of a route.
#[must_use]
pub fn route_separator() -> &'static str {
    if supports_unicode() {
        " › "
    } else {
        " > "
    }
}
