//! Terminal width detection and the layout derived from it.

use console::Term;
use log::debug;

/// Narrowest width the card is laid out for, even on smaller terminals.
pub const MIN_WIDTH: usize = 80;

/// Columns kept free on the right of the wrapped text.
pub const MARGIN: usize = 5;

/// Column count of the terminal attached to stdout, if there is one.
pub fn terminal_columns() -> Option<usize> {
    match Term::stdout().size_checked() {
        Some((_, columns)) => Some(columns as usize),
        None => {
            debug!("Terminal size unavailable, assuming {} columns", MIN_WIDTH);
            None
        }
    }
}

/// Width of the card for a terminal of `columns` columns: 80% of the terminal, never
/// below [`MIN_WIDTH`]. Saturates instead of overflowing on absurd widths.
pub fn display_width(columns: Option<usize>) -> usize {
    let columns = columns.map_or(MIN_WIDTH, |c| c.max(MIN_WIDTH));
    (columns.saturating_mul(4) / 5).max(MIN_WIDTH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub text_width: usize,
}

impl Layout {
    pub fn from_columns(columns: Option<usize>) -> Self {
        Self {
            text_width: display_width(columns),
        }
    }

    /// Visible columns available to a wrapped line, indent included.
    pub fn wrap_width(&self) -> usize {
        self.text_width.saturating_sub(MARGIN).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_terminal_falls_back() {
        assert_eq!(display_width(None), 80);
    }

    #[test]
    fn test_narrow_terminal_is_floored() {
        assert_eq!(display_width(Some(0)), 80);
        assert_eq!(display_width(Some(40)), 80);
        assert_eq!(display_width(Some(100)), 80);
    }

    #[test]
    fn test_wide_terminal_is_scaled() {
        assert_eq!(display_width(Some(120)), 96);
        assert_eq!(display_width(Some(200)), 160);
        assert_eq!(display_width(Some(203)), 162);
    }

    #[test]
    fn test_huge_width_saturates() {
        assert_eq!(display_width(Some(usize::MAX)), usize::MAX / 5);
        let layout = Layout::from_columns(Some(usize::MAX));
        assert_eq!(layout.wrap_width(), usize::MAX / 5 - MARGIN);
    }

    #[test]
    fn test_terminal_columns_without_tty() {
        // Test runners usually pipe stdout; only a real terminal reports a size.
        let columns = terminal_columns();
        if !Term::stdout().is_term() {
            assert_eq!(columns, None);
            assert_eq!(Layout::from_columns(columns).text_width, MIN_WIDTH);
        } else if let Some(columns) = columns {
            assert!(display_width(Some(columns)) >= MIN_WIDTH);
        }
    }

    #[test]
    fn test_wrap_width_leaves_margin() {
        assert_eq!(Layout::from_columns(Some(120)).wrap_width(), 91);
        assert_eq!(Layout::from_columns(None).wrap_width(), 75);
    }

    #[test]
    fn test_wrap_width_never_zero() {
        let layout = Layout { text_width: 3 };
        assert_eq!(layout.wrap_width(), 1);
    }
}
