// Terminal UI: draws the game projection and feeds key presses to the session

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use rand::Rng;
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Span, Spans, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::io;
use tracing::{debug, info};
use unicode_width::UnicodeWidthStr;

use crate::tms_color::Theme;
use crate::tms_game::{Command, Difficulty, Game, Status};
use crate::tms_input::{HELP_KEYS, command_for};

/// Static presentation settings handed to the renderer
pub struct View {
    pub theme: Theme,
    pub show_help: bool,
}

impl View {
    fn status_height(&self) -> u16 {
        if self.show_help { 4 } else { 3 }
    }

    /// Smallest terminal that fits the board and the status block
    pub fn min_size(&self, game: &Game) -> (u16, u16) {
        let (bw, bh) = board_dims(game);
        (bw.max(MIN_STATUS_WIDTH), bh + self.status_height())
    }
}

const MIN_STATUS_WIDTH: u16 = 64;

/// Board title: the preset name, or just the dimensions for a hand-built board
fn board_title(game: &Game) -> String {
    match Difficulty::from_size(game.size()) {
        Ok(d) => d.to_string(),
        Err(_) => format!("{0}x{0}", game.size()),
    }
}

/// Board block size: two columns per cell, a padding column and the borders
fn board_dims(game: &Game) -> (u16, u16) {
    let size = game.size() as u16;
    (size * 2 + 3, size + 2)
}

/// Enter the alternate screen, play until the player quits, restore the terminal
pub fn run<R: Rng + ?Sized>(game: &mut Game, rng: &mut R, view: &View) -> Result<()> {
    enable_raw_mode().context("cannot switch terminal to raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, game, rng, view);

    // Always try to restore terminal state
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen);
    let _ = terminal.show_cursor();
    result
}

fn event_loop<B: Backend, R: Rng + ?Sized>(
    terminal: &mut Terminal<B>,
    game: &mut Game,
    rng: &mut R,
    view: &View,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, game, view))?;

        // Block until the next key; resizes just fall through to a redraw
        let key = match event::read()? {
            Event::Key(key) => key,
            Event::Resize(w, h) => {
                debug!(w, h, "terminal resized");
                continue;
            }
            _ => continue,
        };
        let Some(command) = command_for(key) else {
            continue;
        };
        if command == Command::Quit {
            info!(status = ?game.status(), "quit");
            return Ok(());
        }
        let before = game.status();
        let after = game.apply(command, rng)?;
        if after != before {
            info!(?before, ?after, remaining = game.remaining(), "status changed");
        }
    }
}

/// Render the whole screen for the current game state
pub fn draw<B: Backend>(f: &mut Frame<B>, game: &Game, view: &View) {
    let size = f.size();
    let (min_w, min_h) = view.min_size(game);
    // If terminal too small, render a centered warning and skip normal UI
    if size.width < min_w || size.height < min_h {
        let warn_lines = vec![
            Spans::from(Span::raw("Terminal size too small.")),
            Spans::from(Span::raw(format!("Minimum required: {} x {}", min_w, min_h))),
        ];
        let warn = Paragraph::new(Text::from(warn_lines))
            .block(Block::default().borders(Borders::ALL).title("Resize Terminal"))
            .alignment(Alignment::Center);
        f.render_widget(Clear, size);
        let w = 40u16.min(size.width);
        let h = 4u16.min(size.height);
        f.render_widget(warn, center_rect(w, h, size));
        return;
    }

    let (bw, bh) = board_dims(game);
    let status_w = bw.max(MIN_STATUS_WIDTH);
    let total_h = bh + view.status_height();
    let top = size.y + (size.height - total_h) / 2;
    let board_area = Rect::new(size.x + (size.width - bw) / 2, top, bw, bh);
    let status_area = Rect::new(
        size.x + (size.width - status_w) / 2,
        top + bh,
        status_w,
        view.status_height(),
    );

    let board = Paragraph::new(Text::from(board_lines(game, &view.theme))).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", board_title(game)),
                Style::default().fg(view.theme.title).add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center),
    );
    f.render_widget(board, board_area);

    let inner_w = status_area.width.saturating_sub(2) as usize;
    let mut lines = vec![status_spans(game, view, inner_w)];
    if view.show_help {
        lines.push(help_spans(view));
    }
    let status = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, status_area);
}

/// One line of spans per board row, two columns per cell
fn board_lines(game: &Game, theme: &Theme) -> Vec<Spans<'static>> {
    let size = game.size();
    (0..size)
        .map(|row| {
            let mut spans: Vec<Span<'static>> = (0..size)
                .map(|col| {
                    let (glyph, style) = theme.cell(game.cell_view(row, col), game.cursor() == (row, col));
                    Span::styled(format!(" {}", glyph), style)
                })
                .collect();
            // padding column so the right edge uses the board background
            spans.push(Span::styled(" ", Style::default().bg(theme.board_bg)));
            Spans::from(spans)
        })
        .collect()
}

/// Text of the status line message for the current state
pub fn status_message(game: &Game) -> &'static str {
    match game.status() {
        Status::InProgress => "Clear every safe cell.",
        Status::Lost => "You stepped on a mine! Game Over!",
        Status::Won => "You won!",
    }
}

/// Left: mine counter and message. Right: cells still to open.
fn status_spans(game: &Game, view: &View, inner_w: usize) -> Spans<'static> {
    let theme = &view.theme;
    let left = format!(" Mines: {:<4} ", game.mines_left());
    let msg = status_message(game);
    let right = format!("Left: {} ", game.remaining());
    let used = left.as_str().width() + msg.width() + right.as_str().width();
    let pad = inner_w.saturating_sub(used).max(1);
    let msg_style = match game.status() {
        Status::InProgress => Style::default(),
        Status::Won => Style::default().fg(theme.won).add_modifier(Modifier::BOLD),
        Status::Lost => Style::default().fg(theme.lost).add_modifier(Modifier::BOLD),
    };
    Spans::from(vec![
        Span::raw(left),
        Span::styled(msg, msg_style),
        Span::raw(" ".repeat(pad)),
        Span::raw(right),
    ])
}

fn help_spans(view: &View) -> Spans<'static> {
    let key_style = Style::default().fg(view.theme.key).add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in HELP_KEYS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(format!(": {}", action)));
    }
    Spans::from(spans)
}

fn center_rect(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
