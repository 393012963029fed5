//! Per-request identifiers and their colour-coded rendering in logs.

use nanoid::nanoid;
use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};
use std::fmt;

/// Palette request ids are spread over; standard and bright variants.
const PALETTE: [AnsiColors; 12] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Blue,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
    AnsiColors::BrightRed,
    AnsiColors::BrightGreen,
    AnsiColors::BrightYellow,
    AnsiColors::BrightBlue,
    AnsiColors::BrightMagenta,
    AnsiColors::BrightCyan,
];

/// Short random id attached to a request for the length of its lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    pub fn generate() -> Self {
        Self(nanoid!(5))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stable colour for this id, identical across runs.
    pub fn color(&self) -> AnsiColors {
        let hash = self
            .0
            .chars()
            .fold(0u32, |acc, c| acc.wrapping_mul(31).wrapping_add(c as u32));
        PALETTE[(hash % PALETTE.len() as u32) as usize]
    }

    /// `[id]` wrapped in the id's ANSI colour.
    pub fn colored(&self) -> String {
        let style = Style::new().color(DynColors::Ansi(self.color()));
        format!("[{}]", self.0).style(style).to_string()
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.colored())
    }
}

/// Which handler produced a response, shown in the closing log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Served {
    Static,
    Route,
    Api,
}

impl fmt::Display for Served {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Served::Static => write!(f, "{}", "STATIC".green()),
            Served::Route => write!(f, "{}", "ROUTE".cyan()),
            Served::Api => write!(f, "{}", "API".yellow()),
        }
    }
}
