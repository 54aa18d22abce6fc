//! # Rendering Module
//!
//! Turns a [`QuoteRecord`] into the decorated quote card:
//!
//! ```text
//!
//!   · · ·
//!   🌟 "Do or do not. There is no try, and the quote keeps going until it
//!       needs a second line."
//!       ✧ Yoda (Star Wars)
//!   · · ·
//!
//! ```
//!
//! Layout math stays on plain text: the indents that open each block carry color codes,
//! but [`flourish::wrap_styled`] measures them by their visible width, so colored and
//! uncolored renderings break at exactly the same places.

use crate::model::QuoteRecord;
use crate::styles::names;
use crate::terminal::Layout;
use flourish::{visible_width, wrap_styled, Painter};
use std::io::{self, Write};

pub const DIVIDER: &str = "· · ·";
pub const ATTRIBUTION_GLYPH: &str = "✧";

const QUOTE_MARK: char = '"';
const DIVIDER_INDENT: &str = "  ";
const ATTRIBUTION_INDENT: &str = "      ";

/// Renders the full card, dividers and surrounding blank lines included.
pub fn render_quote(record: &QuoteRecord, layout: &Layout, painter: &Painter<'_>) -> String {
    let width = layout.wrap_width();
    let divider = format!("{}{}", DIVIDER_INDENT, painter.paint(names::ACCENT, DIVIDER));

    let mut lines = vec![String::new(), divider.clone()];
    lines.extend(quote_block(record, width, painter));
    lines.extend(attribution_block(record, width, painter));
    lines.push(divider);
    lines.push(String::new());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Writes the rendered card to stdout.
pub fn print_quote(
    record: &QuoteRecord,
    layout: &Layout,
    painter: &Painter<'_>,
) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render_quote(record, layout, painter).as_bytes())?;
    stdout.flush()
}

/// Emoji and quoted body. Continuation lines line up under the opening quote mark's
/// text, not under the emoji.
fn quote_block(record: &QuoteRecord, width: usize, painter: &Painter<'_>) -> Vec<String> {
    let first = format!(
        "{}{} {}{}",
        DIVIDER_INDENT,
        painter.paint(names::EMOJI, &record.emoji),
        painter.open(names::QUOTE),
        QUOTE_MARK
    );
    let rest = format!(
        "{}{}",
        " ".repeat(visible_width(&first)),
        painter.open(names::QUOTE)
    );

    // The closing mark wraps with the last word so it never lands past the width.
    let body = format!("{}{}", record.quote.trim(), QUOTE_MARK);
    let mut lines = wrap_styled(&body, width, &first, &rest);
    if let Some(last) = lines.last_mut() {
        last.push_str(painter.reset());
    }
    lines
}

fn attribution_block(record: &QuoteRecord, width: usize, painter: &Painter<'_>) -> Vec<String> {
    let first = format!(
        "{}{} {}",
        ATTRIBUTION_INDENT,
        painter.paint(names::GLYPH, ATTRIBUTION_GLYPH),
        painter.open(names::ATTRIBUTION)
    );
    let rest = format!(
        "{}{}",
        " ".repeat(visible_width(&first)),
        painter.open(names::ATTRIBUTION)
    );

    let mut lines = wrap_styled(&record.attribution_line(), width, &first, &rest);
    if let Some(last) = lines.last_mut() {
        last.push_str(painter.reset());
    }
    lines
}
