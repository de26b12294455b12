//! Terminal color theme for CLI output
//!
//! Colors live in a `Theme` value passed to whatever renders, rather than in
//! process-wide constants, so tests and the prompt loop can construct their
//! own (including a disabled one for non-tty output).

use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

#[derive(Debug, Clone)]
pub struct Theme {
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub heading: Color,
    enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

impl Theme {
    /// Theme wired to whether stdout wants color: a tty with `NO_COLOR`
    /// unset.
    pub fn detect() -> Self {
        let enabled =
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::new(enabled)
    }

    pub fn new(enabled: bool) -> Self {
        Self {
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,
            heading: Color::Magenta,
            enabled,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn ok(&self, text: &str) -> String {
        self.paint(text, self.success)
    }

    pub fn warn(&self, text: &str) -> String {
        self.paint(text, self.warning)
    }

    pub fn err(&self, text: &str) -> String {
        self.paint(text, self.error)
    }

    pub fn note(&self, text: &str) -> String {
        self.paint(text, self.info)
    }

    pub fn title(&self, text: &str) -> String {
        if self.enabled {
            text.with(self.heading).bold().to_string()
        } else {
            text.to_string()
        }
    }
}
