#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use reveal::*;
pub use session::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod reveal;
mod session;
mod types;

/// Board dimensions and mine count of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines);
        config.validate()?;
        Ok(config)
    }

    /// Requires a non-empty board that keeps at least one mine and one safe cell.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(ConfigIssue::ZeroWidth.into());
        }
        if self.height == 0 {
            return Err(ConfigIssue::ZeroHeight.into());
        }
        validate_mine_count(self.total_cells(), self.mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    /// Board shape as `(rows, cols)`.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        row < self.height && col < self.width
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                coords,
                size: self.size(),
            })
        }
    }

    /// Flattened `row * width + col` index of in-bounds coordinates.
    pub fn index_of(&self, coords: Coord2) -> Result<CellCount> {
        let (row, col) = self.validate_coords(coords)?;
        Ok(mult(row, self.width) + CellCount::from(col))
    }

    /// Inverse of [`index_of`](Self::index_of), `None` past the last cell.
    pub fn coords_of(&self, index: CellCount) -> Option<Coord2> {
        if self.width == 0 || index >= self.total_cells() {
            return None;
        }
        let width = CellCount::from(self.width);
        // both quotient and remainder are bounded by a `Coord` axis
        Some(((index / width) as Coord, (index % width) as Coord))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 10, 20)
    }
}

pub(crate) fn validate_mine_count(total_cells: CellCount, mines: CellCount) -> Result<()> {
    if mines == 0 {
        Err(ConfigIssue::NoMines.into())
    } else if mines >= total_cells {
        Err(ConfigIssue::TooManyMines { mines, total_cells }.into())
    } else {
        Ok(())
    }
}
