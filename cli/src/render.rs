use std::fmt::Write as _;
use std::io::{self, Write};

use sapper_core::{Board, Cell, CellCount, CellState, FlagReport, GameStatus, RevealReport};
use serde::Serialize;

pub fn glyph(cell: Cell) -> char {
    match (cell.state(), cell.adjacent_mines()) {
        (CellState::Hidden, _) => '#',
        (CellState::Flagged, _) => 'F',
        (CellState::Revealed, None) => '*',
        (CellState::Revealed, Some(0)) => '.',
        (CellState::Revealed, Some(count)) => char::from(b'0' + count),
    }
}

/// Text grid with column digits on top and row numbers on the left.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    ");
    for col in 0..board.width() {
        out.push(char::from(b'0' + col % 10));
    }
    out.push('\n');

    for row in 0..board.height() {
        let _ = write!(out, "{row:>3} ");
        for col in 0..board.width() {
            out.push(glyph(board[(row, col)]));
        }
        out.push('\n');
    }
    out
}

pub fn status_line(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won => Some("All mines flagged, you won!"),
        GameStatus::Lost => Some("Boom! Game over."),
    }
}

/// Machine-readable line emitted per command in `--json` mode.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event<'a> {
    Reveal(&'a RevealReport),
    Flag(&'a FlagReport),
    NewGame {
        remaining_flags: CellCount,
        status: GameStatus,
    },
    Help {
        text: &'a str,
    },
    /// Command that could not be parsed or applied.
    Error {
        message: String,
    },
}

pub fn write_json_line(out: &mut impl Write, event: &Event) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    writeln!(out)
}
