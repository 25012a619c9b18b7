//! Style types and the static style table
//!
//! Styles are looked up by `(TokenType, DisplayMode)` in a fixed table.
//! Adding a palette means adding a column, not another branch.

use super::tokens::TokenType;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
    /// Reverse video (swap fg/bg)
    pub reverse: bool,
}

impl Style {
    /// The neutral style used for plain text
    pub const PLAIN: Style = Style {
        fg: Color::Default,
        bg: Color::Default,
        bold: false,
        italic: false,
        underline: false,
        reverse: false,
    };

    /// Create a style with just foreground color
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Self::PLAIN
        }
    }

    /// Builder: set bold
    pub const fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub const fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub const fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::PLAIN
    }
}

/// Palette selector.
///
/// Only affects style lookup, never tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// All modes, in table column order
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Light, DisplayMode::Dark];

    fn column(self) -> usize {
        match self {
            DisplayMode::Light => 0,
            DisplayMode::Dark => 1,
        }
    }

    /// Parse a mode name from config or the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(DisplayMode::Light),
            "dark" => Some(DisplayMode::Dark),
            _ => None,
        }
    }
}

/// `true` selects the dark palette.
impl From<bool> for DisplayMode {
    fn from(dark: bool) -> Self {
        if dark {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        }
    }
}

/// One row per highlighted category, columns are `[Light, Dark]`.
const STYLE_TABLE: [(TokenType, [Style; 2]); 5] = [
    (
        TokenType::Comment,
        [
            Style::fg(Color::BrightBlack).with_italic(),
            Style::fg(Color::BrightBlack).with_italic(),
        ],
    ),
    (
        TokenType::String,
        [Style::fg(Color::Green), Style::fg(Color::BrightGreen)],
    ),
    (
        TokenType::Keyword,
        [
            Style::fg(Color::Magenta).with_bold(),
            Style::fg(Color::BrightMagenta).with_bold(),
        ],
    ),
    (
        TokenType::Type,
        [Style::fg(Color::Blue), Style::fg(Color::BrightYellow)],
    ),
    (
        TokenType::Modifier,
        [
            Style::fg(Color::Cyan).with_underline(),
            Style::fg(Color::BrightCyan).with_underline(),
        ],
    ),
];

/// Look up the style for a category in the given mode.
///
/// Categories without a row (plain text) get [`Style::PLAIN`].
pub fn style_for(token_type: TokenType, mode: DisplayMode) -> Style {
    STYLE_TABLE
        .iter()
        .find(|(row, _)| *row == token_type)
        .map(|(_, styles)| styles[mode.column()])
        .unwrap_or(Style::PLAIN)
}
