//! CLI styling utilities
//!
//! Provides semantic styling via the [`Stylize`] trait with automatic
//! terminal color support detection (delegated to `owo-colors`).
//!
//! | Method       | Color  | Stream | Semantic Use                 |
//! |--------------|--------|--------|------------------------------|
//! | `.accent()`  | Cyan   | stderr | Epic keys, counts            |
//! | `.error()`   | Red    | stderr | Failures, error messages     |
//! | `.muted()`   | Dim    | stderr | Secondary progress text      |
//!
//! Stdout carries the diagram only, so every style targets stderr.

use std::fmt::{self, Display};
use std::sync::OnceLock;

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream, Style};

const ACCENT: Style = Style::new().cyan();
const ERROR: Style = Style::new().red().bold();
const MUTED: Style = Style::new().dimmed();

/// A value with semantic styling applied.
///
/// Implements [`Display`] to render with ANSI codes when stderr supports
/// them (respects `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE` and TTY detection).
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    style: Style,
}

impl<T> Styled<T> {
    const fn new(value: T, style: Style) -> Self {
        Self { value, style }
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(Stream::Stderr, |v| v.style(self.style))
        )
    }
}

/// Extension trait for semantic terminal styling.
pub trait Stylize: Display {
    /// Accent color (cyan) for primary information.
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, ACCENT)
    }

    /// Error color (bold red) for failures.
    fn error(&self) -> Styled<&Self> {
        Styled::new(self, ERROR)
    }

    /// Muted style (dim) for secondary information.
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, MUTED)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Default spinner style - cyan dots.
///
/// Template validated once on first call via `OnceLock`.
pub fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("hardcoded spinner template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}
