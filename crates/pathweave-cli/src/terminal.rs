//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and color detection for text output.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for node identifiers.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for arrows and secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for finite weights.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow for unreachable targets.
    pub const YELLOW: &str = "\x1b[33m";
    /// Red for negative cycles.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            green: "",
            yellow: "",
            red: "",
        }
    }

    /// Create a palette based on terminal capabilities.
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

/// Format a path weight, spelling out the two infinite sentinels.
///
/// ```
/// # use pathweave_cli::terminal::format_weight;
/// assert_eq!(format_weight(20.0), "20");
/// assert_eq!(format_weight(0.5), "0.5");
/// assert_eq!(format_weight(f64::INFINITY), "unreachable");
/// assert_eq!(format_weight(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn format_weight(weight: f64) -> String {
    if weight == f64::INFINITY {
        "unreachable".to_string()
    } else if weight == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        weight.to_string()
    }
}
