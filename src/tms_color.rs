// Display configuration: glyphs and colors for the board, resolved once at startup

use ratatui::style::{Color, Modifier, Style};
use term_color_support::ColorSupport;

use crate::tms_game::CellView;

/// How many colors the terminal can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    TrueColor,
    Ansi256,
    Basic,
}

impl ColorDepth {
    /// Detect terminal color support (TrueColor, 256, or Basic)
    pub fn detect() -> ColorDepth {
        let support = ColorSupport::stdout();
        if support.has_16m {
            ColorDepth::TrueColor
        } else if support.has_256 {
            ColorDepth::Ansi256
        } else {
            ColorDepth::Basic
        }
    }

    /// Pin an ANSI color to the Windows Terminal (Campbell) look so the board
    /// reads the same across terminals. Other colors are returned as-is.
    pub fn resolve(self, color: Color) -> Color {
        // Format: ((R, G, B), ANSI_256_Index)
        let mapping = match color {
            Color::Black =>         Some(((12, 12, 12),   232)),
            Color::Red =>           Some(((197, 15, 31),  160)),
            Color::Green =>         Some(((19, 161, 14),  28)),
            Color::Yellow =>        Some(((193, 156, 0),  178)),
            Color::Blue =>          Some(((0, 55, 218),   20)),
            Color::Magenta =>       Some(((136, 23, 152), 90)),
            Color::Cyan =>          Some(((58, 150, 221), 38)),
            Color::Gray =>          Some(((204, 204, 204), 250)),
            Color::DarkGray =>      Some(((118, 118, 118), 243)),
            Color::LightRed =>      Some(((231, 72, 86),  203)),
            Color::LightGreen =>    Some(((22, 198, 12),  46)),
            Color::LightBlue =>     Some(((59, 120, 255), 63)),
            Color::White =>         Some(((242, 242, 242), 255)),
            _ => None,
        };
        match (mapping, self) {
            (Some(((r, g, b), _)), ColorDepth::TrueColor) => Color::Rgb(r, g, b),
            (Some((_, idx)), ColorDepth::Ansi256) => Color::Indexed(idx),
            _ => color,
        }
    }
}

/// Everything the renderer needs to turn a `CellView` into a styled glyph
#[derive(Debug, Clone)]
pub struct Theme {
    pub board_bg: Color,
    pub cursor_bg: Color,
    pub hidden: (&'static str, Color),
    pub flag: (&'static str, Color),
    pub mine: (&'static str, Color),
    pub wrong_flag: (&'static str, Color),
    pub detonated_bg: Color,
    pub numbers: [Color; 8],
    pub title: Color,
    pub won: Color,
    pub lost: Color,
    pub key: Color,
}

impl Theme {
    pub fn new(ascii: bool, depth: ColorDepth) -> Theme {
        let c = |color| depth.resolve(color);
        Theme {
            board_bg: c(Color::DarkGray),
            cursor_bg: c(Color::LightBlue),
            hidden: (if ascii { "#" } else { "■" }, c(Color::Yellow)),
            flag: (if ascii { "F" } else { "⚑" }, c(Color::Red)),
            mine: (if ascii { "*" } else { "☼" }, c(Color::Black)),
            wrong_flag: ("X", c(Color::LightRed)),
            detonated_bg: c(Color::Red),
            numbers: [
                c(Color::Cyan),
                c(Color::Green),
                c(Color::LightRed),
                c(Color::Blue),
                c(Color::Magenta),
                c(Color::Cyan),
                c(Color::Black),
                c(Color::Gray),
            ],
            title: c(Color::Green),
            won: c(Color::LightGreen),
            lost: c(Color::LightRed),
            key: c(Color::Yellow),
        }
    }

    /// Glyph and style for one cell
    pub fn cell(&self, view: CellView, under_cursor: bool) -> (String, Style) {
        let base = Style::default().bg(if under_cursor { self.cursor_bg } else { self.board_bg });
        match view {
            CellView::Hidden => (self.hidden.0.to_string(), base.fg(self.hidden.1)),
            CellView::Flagged => (self.flag.0.to_string(), base.fg(self.flag.1)),
            CellView::Blank => (" ".to_string(), base),
            CellView::Count(n) => {
                let fg = self.numbers[(n as usize).clamp(1, 8) - 1];
                (n.to_string(), base.fg(fg).add_modifier(Modifier::BOLD))
            }
            CellView::Mine => (self.mine.0.to_string(), base.fg(self.mine.1)),
            CellView::Detonated => (
                self.mine.0.to_string(),
                base.fg(self.mine.1).bg(self.detonated_bg),
            ),
            CellView::WrongFlag => (
                self.wrong_flag.0.to_string(),
                base.fg(self.wrong_flag.1).add_modifier(Modifier::BOLD),
            ),
        }
    }
}
