// Key mapping: crossterm key events to game commands

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tms_game::Command;

/// Map a key press to a command. Releases, repeats and unknown keys map to None.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Right),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char(' ') => Some(Command::Reveal),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(Command::ToggleFlag),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::F(2) => Some(Command::NewGame),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Key hints shown under the board
pub const HELP_KEYS: [(&str, &str); 5] = [
    ("wasd/arrows", "move"),
    ("r/space", "reveal"),
    ("f", "flag"),
    ("n", "new"),
    ("q", "quit"),
];
