use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of a reveal request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RevealReport {
    /// Cells that changed to revealed, in the order they were reached.
    pub revealed: Vec<Coord2>,
    pub status: GameStatus,
    /// Set when the request was ignored.
    pub rejected: Option<InvalidOperation>,
}

impl RevealReport {
    fn rejected(status: GameStatus, reason: InvalidOperation) -> Self {
        Self {
            revealed: Vec::new(),
            status,
            rejected: Some(reason),
        }
    }

    /// Turns an ignored request into [`GameError::InvalidOperation`].
    pub fn into_result(self) -> Result<Self> {
        match self.rejected {
            Some(reason) => Err(reason.into()),
            None => Ok(self),
        }
    }
}

/// Result of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlagReport {
    /// Whether the cell carries a flag after the call.
    pub flagged: bool,
    pub remaining_flags: CellCount,
    pub status: GameStatus,
    /// Set when the request was ignored.
    pub rejected: Option<InvalidOperation>,
}

impl FlagReport {
    /// Turns an ignored request into [`GameError::InvalidOperation`].
    pub fn into_result(self) -> Result<Self> {
        match self.rejected {
            Some(reason) => Err(reason.into()),
            None => Ok(self),
        }
    }
}

/// A single game from layout generation to win or loss, restartable with [`GameSession::reset`].
#[derive(Clone, Debug)]
pub struct GameSession<G = RandomLayoutGenerator> {
    generator: G,
    board: Board,
    flags_placed: CellCount,
    status: GameStatus,
}

impl GameSession {
    /// New game with an OS-seeded random layout.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_generator(config, RandomLayoutGenerator::from_os_rng())
    }

    /// New game whose layouts (including the ones after [`reset`](Self::reset)) derive from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomLayoutGenerator::from_seed(seed))
    }
}

impl<G: LayoutGenerator> GameSession<G> {
    pub fn with_generator(config: GameConfig, mut generator: G) -> Result<Self> {
        let board = Self::build_board(config, &mut generator)?;
        log::debug!(
            "New game: {}x{} with {} mines",
            config.width,
            config.height,
            config.mines
        );
        Ok(Self {
            generator,
            board,
            flags_placed: 0,
            status: GameStatus::InProgress,
        })
    }

    fn build_board(config: GameConfig, generator: &mut G) -> Result<Board> {
        config.validate()?;
        let mines = generator.generate(config.total_cells(), config.mines)?;
        Board::from_mine_indices(config, &mines)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn flags_placed(&self) -> CellCount {
        self.flags_placed
    }

    /// How many flags can still be placed
    pub fn remaining_flags(&self) -> CellCount {
        self.board.mine_count() - self.flags_placed
    }

    /// Reveals a cell. Hitting a mine ends the game and exposes every mine.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealReport> {
        let cell = self.board.cell_at(coords)?;

        if self.status.is_finished() {
            return Ok(RevealReport::rejected(self.status, InvalidOperation::GameOver));
        }
        match cell.state() {
            CellState::Revealed => {
                return Ok(RevealReport::rejected(
                    self.status,
                    InvalidOperation::AlreadyRevealed,
                ));
            }
            CellState::Flagged => {
                return Ok(RevealReport::rejected(self.status, InvalidOperation::Flagged));
            }
            CellState::Hidden => {}
        }

        if cell.is_mine() {
            let revealed = self.reveal_all_mines();
            self.end_game(GameStatus::Lost);
            return Ok(RevealReport {
                revealed,
                status: self.status,
                rejected: None,
            });
        }

        let revealed = reveal(&mut self.board, coords)?;
        self.check_win();
        Ok(RevealReport {
            revealed,
            status: self.status,
            rejected: None,
        })
    }

    /// Places or removes a flag, never exceeding one flag per mine.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagReport> {
        let cell = self.board.cell_at(coords)?;

        let rejected = if self.status.is_finished() {
            Some(InvalidOperation::GameOver)
        } else {
            match cell.state() {
                CellState::Revealed => Some(InvalidOperation::AlreadyRevealed),
                CellState::Flagged => {
                    self.board.set_state(coords, CellState::Hidden);
                    self.flags_placed -= 1;
                    None
                }
                CellState::Hidden if self.flags_placed >= self.board.mine_count() => {
                    Some(InvalidOperation::FlagBudgetExhausted)
                }
                CellState::Hidden => {
                    self.board.set_state(coords, CellState::Flagged);
                    self.flags_placed += 1;
                    self.check_win();
                    None
                }
            }
        };

        Ok(FlagReport {
            flagged: self.board[coords].is_flagged(),
            remaining_flags: self.remaining_flags(),
            status: self.status,
            rejected,
        })
    }

    /// Discards the board and starts over with a fresh layout of the same configuration.
    pub fn reset(&mut self) -> Result<()> {
        self.board = Self::build_board(self.board.config(), &mut self.generator)?;
        self.flags_placed = 0;
        self.status = GameStatus::InProgress;
        log::debug!("Game reset");
        Ok(())
    }

    /// Won iff the flagged cells are exactly the mine cells.
    fn check_win(&mut self) {
        // equal sizes plus every mine flagged means the two sets are equal
        let all_mines_flagged = self.flags_placed == self.board.mine_count()
            && self.board.mines().all(|coords| self.board[coords].is_flagged());
        if all_mines_flagged {
            self.end_game(GameStatus::Won);
        }
    }

    fn reveal_all_mines(&mut self) -> Vec<Coord2> {
        let mut mines: Vec<_> = self.board.mines().collect();
        mines.sort_unstable();
        for &coords in &mines {
            if self.board[coords].is_flagged() {
                self.flags_placed -= 1;
            }
            self.board.set_state(coords, CellState::Revealed);
        }
        mines
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }
        log::debug!("Game ended: {:?}", status);
        self.status = status;
    }
}
