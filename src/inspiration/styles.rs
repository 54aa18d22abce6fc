//! Styles for the quote card.
//!
//! Rendering code refers to semantic names (the emoji, the quote body, the attribution)
//! and never to color values. The palette below is the only place that knows what those
//! names look like, and `INSPIRATION_THEME` registers them once through
//! `once_cell::sync::Lazy`.

use flourish::{Paint, Theme};
use once_cell::sync::Lazy;

/// Style identifiers used by the renderer.
pub mod names {
    pub const ACCENT: &str = "accent";
    pub const EMOJI: &str = "emoji";
    pub const QUOTE: &str = "quote";
    pub const GLYPH: &str = "glyph";
    pub const ATTRIBUTION: &str = "attribution";
}

pub mod palette {
    use flourish::Rgb;

    pub const ORANGE: Rgb = Rgb::new(0xcc, 0x51, 0x3b);
    pub const MAGENTA: Rgb = Rgb::new(0x7f, 0x3c, 0x75);
    pub const PINK: Rgb = Rgb::new(0x66, 0x30, 0x62);
}

pub static INSPIRATION_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    let accent = Paint::new().fg(palette::ORANGE);
    let emoji = accent.clone().bold();
    let quote = Paint::new().bold().fg(palette::MAGENTA);
    let glyph = Paint::new().bold().fg(palette::PINK);
    let attribution = accent.clone();

    Theme::new()
        .add(names::ACCENT, accent)
        .add(names::EMOJI, emoji)
        .add(names::QUOTE, quote)
        .add(names::GLYPH, glyph)
        .add(names::ATTRIBUTION, attribution)
}
