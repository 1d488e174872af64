//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and color detection
//! for rendering grids and summaries. It abstracts terminal capabilities
//! and provides a consistent interface for styled text output.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    /// Bold reverse green for the start cell.
    pub const START: &str = "\x1b[1;7;32m";
    /// Bold reverse magenta for the finish cell.
    pub const FINISH: &str = "\x1b[1;7;35m";
    /// Reverse gray for walls.
    pub const WALL: &str = "\x1b[7;90m";
    /// Cyan for visited cells.
    pub const VISITED: &str = "\x1b[36m";
    /// Bold yellow for path cells.
    pub const PATH: &str = "\x1b[1;33m";

    /// Bright bold white for emphasis (headers).
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements.
    pub const GRAY: &str = "\x1b[90m";
}

/// Cursor control sequences used by the animated grid.
pub mod cursor {
    /// Clear the screen and move the cursor home.
    pub const CLEAR: &str = "\x1b[2J\x1b[H";
    /// Move the cursor home without clearing.
    pub const HOME: &str = "\x1b[H";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub start: &'static str,
    pub finish: &'static str,
    pub wall: &'static str,
    pub visited: &'static str,
    pub path: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            start: colors::START,
            finish: colors::FINISH,
            wall: colors::WALL,
            visited: colors::VISITED,
            path: colors::PATH,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            start: "",
            finish: "",
            wall: "",
            visited: "",
            path: "",
            white_bold: "",
            gray: "",
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

    /// Whether this palette emits any escape codes.
    pub fn is_colored(&self) -> bool {
        !self.reset.is_empty()
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
