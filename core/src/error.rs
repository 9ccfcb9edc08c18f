use serde::Serialize;
use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),
    #[error("Coordinates {coords:?} are outside the {}x{} board", .size.1, .size.0)]
    OutOfBounds { coords: Coord2, size: Coord2 },
    #[error("Operation rejected: {0}")]
    InvalidOperation(#[from] InvalidOperation),
}

/// What made a [`GameConfig`](crate::GameConfig) or a mine layout unusable.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("board width must be positive")]
    ZeroWidth,
    #[error("board height must be positive")]
    ZeroHeight,
    #[error("at least one mine is required")]
    NoMines,
    #[error("{mines} mines do not leave a safe cell on a board of {total_cells}")]
    TooManyMines {
        mines: CellCount,
        total_cells: CellCount,
    },
    #[error("mine index {index} is outside a board of {total_cells} cells")]
    MineOutOfRange {
        index: CellCount,
        total_cells: CellCount,
    },
    #[error("layout has {actual} mines but {expected} were requested")]
    MineCountMismatch {
        expected: CellCount,
        actual: CellCount,
    },
}

/// Why a session ignored a mutation. Reported alongside the unchanged state.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum InvalidOperation {
    #[error("game already ended, no new moves are accepted")]
    GameOver,
    #[error("cell is already revealed")]
    AlreadyRevealed,
    #[error("cell is flagged, remove the flag first")]
    Flagged,
    #[error("every available flag is already placed")]
    FlagBudgetExhausted,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn out_of_bounds_names_width_then_height() {
        let err = GameError::OutOfBounds {
            coords: (4, 0),
            size: (3, 5),
        };
        assert_eq!(
            err.to_string(),
            "Coordinates (4, 0) are outside the 5x3 board"
        );
    }

    #[test]
    fn config_issue_converts_into_game_error() {
        let err: GameError = ConfigIssue::TooManyMines {
            mines: 9,
            total_cells: 9,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: 9 mines do not leave a safe cell on a board of 9"
        );
    }

    #[test]
    fn invalid_operation_display() {
        let err = GameError::from(InvalidOperation::GameOver);
        assert_eq!(
            err.to_string(),
            "Operation rejected: game already ended, no new moves are accepted"
        );
    }
}
