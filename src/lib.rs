// Terminal Minesweeper: board generation, reveal engine, game session and TUI

pub mod tms_board;  // Mine layout and random board generator
pub mod tms_color;  // Glyphs, colors and terminal color matching
pub mod tms_config; // Persisted user preferences
pub mod tms_error;  // Error types
pub mod tms_game;   // Game session, difficulty presets, commands
pub mod tms_grid;   // Square grid container
pub mod tms_input;  // Key to command mapping
pub mod tms_log;    // File logging setup
pub mod tms_reveal; // Reveal engine and flood fill
pub mod tms_ui;     // Terminal UI rendering and event loop
