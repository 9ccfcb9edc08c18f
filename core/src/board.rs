use hashbrown::HashSet;
use ndarray::Array2;

use crate::*;

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Hidden,
    Revealed,
    Flagged,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    is_mine: bool,
    adjacent_mines: u8,
    state: CellState,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    /// Number of mines around this cell, `None` for mines.
    pub const fn adjacent_mines(self) -> Option<u8> {
        if self.is_mine {
            None
        } else {
            Some(self.adjacent_mines)
        }
    }

    pub const fn state(self) -> CellState {
        self.state
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self.state, CellState::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self.state, CellState::Flagged)
    }

    /// Safe cell with no mine around it, the only kind a reveal spreads from.
    pub const fn is_empty(self) -> bool {
        !self.is_mine && self.adjacent_mines == 0
    }
}

/// Grid of cells with a fixed mine layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    mines: HashSet<Coord2>,
}

impl Board {
    /// Lays out mines at flattened indices and derives every adjacency count.
    pub fn from_mine_indices(config: GameConfig, mines: &MineIndices) -> Result<Self> {
        config.validate()?;
        let mine_count = mines.len() as CellCount;
        if mine_count != config.mines {
            return Err(ConfigIssue::MineCountMismatch {
                expected: config.mines,
                actual: mine_count,
            }
            .into());
        }

        let mut board = Self {
            config,
            cells: Array2::default(config.size().to_nd_index()),
            mines: HashSet::with_capacity(mines.len()),
        };
        let total_cells = config.total_cells();
        for &index in mines {
            let coords = config
                .coords_of(index)
                .ok_or(ConfigIssue::MineOutOfRange { index, total_cells })?;
            board.cells[coords.to_nd_index()].is_mine = true;
            board.mines.insert(coords);
        }
        board.compute_adjacency_counts();
        Ok(board)
    }

    /// Hand-built layout, `config.mines` must match the number of distinct coordinates.
    pub fn from_mine_coords(config: GameConfig, mines: &[Coord2]) -> Result<Self> {
        let indices = mines
            .iter()
            .map(|&coords| config.index_of(coords))
            .collect::<Result<MineIndices>>()?;
        Self::from_mine_indices(config, &indices)
    }

    /// Runs once, right after the mines are placed.
    fn compute_adjacency_counts(&mut self) {
        let size = self.size();
        for ((row, col), cell) in self.cells.indexed_iter_mut() {
            if cell.is_mine {
                continue;
            }
            // indices come from a `Coord`-sized array
            let coords = (row as Coord, col as Coord);
            cell.adjacent_mines = NeighborIter::new(coords, size)
                .filter(|neighbor| self.mines.contains(neighbor))
                .count() as u8;
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn width(&self) -> Coord {
        self.config.width
    }

    pub fn height(&self) -> Coord {
        self.config.height
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.config.contains(coords)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.config.validate_coords(coords)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mines.contains(&coords)
    }

    /// Coordinates of every mine, in no particular order.
    pub fn mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mines.iter().copied()
    }

    /// Up to eight in-bounds neighbors of `coords`.
    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn count_in_state(&self, state: CellState) -> CellCount {
        self.cells.iter().filter(|cell| cell.state == state).count() as CellCount
    }

    /// Row-major iteration over every cell with its coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub(crate) fn set_state(&mut self, coords: Coord2, state: CellState) {
        self.cells[coords.to_nd_index()].state = state;
    }
}

impl core::ops::Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
