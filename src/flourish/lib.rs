//! # Flourish - Truecolor Styles and ANSI-Aware Wrapping
//!
//! A small toolkit for printing decorated text to a terminal.
//!
//! ## The Problem
//!
//! Decorated terminal output mixes two kinds of characters: the ones a user sees and the
//! escape sequences that color them. Anything that measures or wraps such text has to tell
//! them apart, otherwise every colored indent eats into the available width and wrapped
//! lines drift narrower than intended.
//!
//! ## The Solution
//!
//! Flourish keeps the two apart:
//! - **Paints** ([`Paint`]) describe a style as a 24-bit foreground color plus bold
//! - **Themes** ([`Theme`]) name those paints so callers refer to `"accent"`, not to codes
//! - **Painters** ([`Painter`]) bind a theme to a decision about emitting color
//! - **Wrapping** ([`wrap_styled`]) lays out plain text and only measures indents by
//!   their [`visible_width`]
//!
//! ## Quick Example
//!
//! ```rust
//! use flourish::{wrap_styled, Paint, Painter, Rgb, Theme};
//!
//! let theme = Theme::new()
//!     .add("accent", Paint::new().fg(Rgb::from(0xcc513b)))
//!     .add("body", Paint::new().bold());
//!
//! let painter = Painter::with_color(&theme, true);
//! let indent = format!("{}> ", painter.open("accent"));
//! let lines = wrap_styled("some words to wrap", 10, &indent, "  ");
//! assert_eq!(flourish::strip_ansi(&lines[0]), "> some");
//! ```
//!
//! ## Color Detection
//!
//! [`stdout_supports_color`] asks `console` whether stdout understands color escapes.
//! Callers feed that (or a forced choice) to [`Painter::with_color`]; a painter without
//! color returns plain text from every operation.

use console::Term;
use std::borrow::Cow;
use std::collections::HashMap;
use textwrap::{Options, WordSplitter};
use unicode_width::UnicodeWidthStr;

/// Resets every color and attribute.
pub const RESET: &str = "\x1b[0m";

/// Turns on bold.
pub const BOLD: &str = "\x1b[1m";

/// A 24-bit color.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Truecolor escape sequence selecting this color as foreground.
    pub fn foreground(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl From<u32> for Rgb {
    fn from(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

/// A text style: optional truecolor foreground, optional bold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paint {
    foreground: Option<Rgb>,
    bold: bool,
}

impl Paint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: impl Into<Rgb>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// The escape sequences that switch this style on, empty for a blank paint.
    pub fn opening(&self) -> String {
        let mut opening = String::new();
        if self.bold {
            opening.push_str(BOLD);
        }
        if let Some(fg) = self.foreground {
            opening.push_str(&fg.foreground());
        }
        opening
    }

    /// Wraps `text` in this style, followed by a reset.
    pub fn apply(&self, text: &str) -> String {
        let opening = self.opening();
        if opening.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", opening, text, RESET)
        }
    }
}

/// A collection of named paints. Unknown names leave text unstyled.
#[derive(Clone, Debug, Default)]
pub struct Styles {
    styles: HashMap<String, Paint>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named paint, replacing any paint already registered under that name.
    pub fn add(mut self, name: &str, paint: Paint) -> Self {
        self.styles.insert(name.to_string(), paint);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Paint> {
        self.styles.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Applies a named paint to text.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.get(name) {
            Some(paint) => paint.apply(text),
            None => text.to_string(),
        }
    }
}

/// A named collection of styles used when painting output.
#[derive(Clone, Debug, Default)]
pub struct Theme {
    styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named paint, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, paint: Paint) -> Self {
        self.styles = self.styles.add(name, paint);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }
}

/// A theme bound to a decision about whether to emit color.
///
/// [`Painter::open`] and [`Painter::paint`] agree on every name: a name with no paint, or
/// a painter without color, yields no escape sequences from either.
pub struct Painter<'a> {
    styles: &'a Styles,
    use_color: bool,
}

impl<'a> Painter<'a> {
    pub fn with_color(theme: &'a Theme, use_color: bool) -> Self {
        Self {
            styles: theme.styles(),
            use_color,
        }
    }

    /// The opening escape sequences of a named style, left unterminated so the
    /// style carries over whatever follows.
    pub fn open(&self, name: &str) -> String {
        if !self.use_color {
            return String::new();
        }
        self.styles.get(name).map(Paint::opening).unwrap_or_default()
    }

    /// `text` in the named style, terminated by a reset.
    pub fn paint(&self, name: &str, text: &str) -> String {
        if self.use_color {
            self.styles.apply(name, text)
        } else {
            text.to_string()
        }
    }

    pub fn reset(&self) -> &'static str {
        if self.use_color {
            RESET
        } else {
            ""
        }
    }
}

/// Whether stdout is a terminal that understands color escapes.
pub fn stdout_supports_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// Removes every ANSI escape sequence from `s`.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    console::strip_ansi_codes(s)
}

/// Number of terminal columns `s` occupies, ignoring escape sequences.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Wraps `text` so that no line is wider than `width` visible columns.
///
/// The indents may carry escape sequences: they are measured by [`visible_width`] and
/// emitted verbatim, while the wrapping itself only ever sees plain text. Words longer than
/// a line are broken, and hyphenated words may be split after a hyphen. Whitespace in
/// `text` (including newlines) is treated as plain spaces.
///
/// The effective width is never smaller than the widest indent plus one column, so each
/// line always makes progress.
pub fn wrap_styled(
    text: &str,
    width: usize,
    initial_indent: &str,
    subsequent_indent: &str,
) -> Vec<String> {
    let text: String = text
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    if text.is_empty() {
        return vec![initial_indent.to_string()];
    }

    let first_width = visible_width(initial_indent);
    let rest_width = visible_width(subsequent_indent);
    let width = width.max(first_width.max(rest_width) + 1);

    // Placeholders with the indents' visible widths stand in while textwrap lays out.
    let first_pad = " ".repeat(first_width);
    let rest_pad = " ".repeat(rest_width);
    let options = Options::new(width)
        .initial_indent(&first_pad)
        .subsequent_indent(&rest_pad)
        .break_words(true)
        .word_splitter(WordSplitter::HyphenSplitter);

    textwrap::wrap(&text, &options)
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let (pad, indent) = if i == 0 {
                (first_pad.as_str(), initial_indent)
            } else {
                (rest_pad.as_str(), subsequent_indent)
            };
            let body = line.strip_prefix(pad).unwrap_or(line.as_ref());
            format!("{}{}", indent, body)
        })
        .collect()
}
