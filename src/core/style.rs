use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const PURPLE: Self = Self::rgb(255, 0, 255);

    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Maps a single-letter color code (`r g b y c p`) to its color.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'r' => Some(Self::RED),
            'g' => Some(Self::GREEN),
            'b' => Some(Self::BLUE),
            'y' => Some(Self::YELLOW),
            'c' => Some(Self::CYAN),
            'p' => Some(Self::PURPLE),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(self) -> Option<char> {
        ['r', 'g', 'b', 'y', 'c', 'p']
            .into_iter()
            .find(|&c| Self::from_code(c) == Some(self))
    }
}

/// How consecutive samples of an entry are meant to be joined.
///
/// The rasterizers always draw a connected path; the flag is carried so
/// style tokens round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connector {
    Marker,
    Line,
}

/// Color plus connector mode for one plotted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    pub connector: Connector,
}

impl Style {
    #[must_use]
    pub const fn new(color: Color, connector: Connector) -> Self {
        Self { color, connector }
    }

    #[must_use]
    pub const fn marker(color: Color) -> Self {
        Self::new(color, Connector::Marker)
    }

    #[must_use]
    pub const fn line(color: Color) -> Self {
        Self::new(color, Connector::Line)
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Self::marker(color)
    }
}

/// Parses tokens like `"r"` (marker) or `"-g"` (line).
impl FromStr for Style {
    type Err = PlotError;

    fn from_str(token: &str) -> PlotResult<Self> {
        let (connector, code) = match token.strip_prefix('-') {
            Some(rest) => (Connector::Line, rest),
            None => (Connector::Marker, token),
        };

        let mut chars = code.chars();
        let color = match (chars.next(), chars.next()) {
            (Some(c), None) => Color::from_code(c),
            _ => None,
        }
        .ok_or_else(|| PlotError::InvalidData(format!("unknown style token `{token}`")))?;

        Ok(Self::new(color, connector))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.connector == Connector::Line {
            f.write_str("-")?;
        }
        match self.color.code() {
            Some(code) => write!(f, "{code}"),
            None => write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.color.red, self.color.green, self.color.blue, self.color.alpha
            ),
        }
    }
}

/// Default styles handed out to entries registered without one.
pub const PALETTE: [Style; 12] = [
    Style::marker(Color::RED),
    Style::marker(Color::GREEN),
    Style::marker(Color::BLUE),
    Style::marker(Color::YELLOW),
    Style::marker(Color::CYAN),
    Style::marker(Color::PURPLE),
    Style::line(Color::RED),
    Style::line(Color::GREEN),
    Style::line(Color::BLUE),
    Style::line(Color::YELLOW),
    Style::line(Color::CYAN),
    Style::line(Color::PURPLE),
];

/// Round-robin cursor over [`PALETTE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleCursor {
    index: usize,
}

impl StyleCursor {
    #[must_use]
    pub fn peek(self) -> Style {
        PALETTE[self.index % PALETTE.len()]
    }

    /// Returns the current style and advances to the next palette entry.
    pub fn advance(&mut self) -> Style {
        let style = self.peek();
        self.index = (self.index + 1) % PALETTE.len();
        style
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
