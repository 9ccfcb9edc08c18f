use super::*;

/// Replays a preset layout, for scripted games and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedLayoutGenerator {
    mines: MineIndices,
}

impl FixedLayoutGenerator {
    pub fn new(mines: impl IntoIterator<Item = CellCount>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }

    /// Preset layout given as `(row, col)` coordinates on `config`'s board.
    pub fn from_coords(config: &GameConfig, coords: &[Coord2]) -> Result<Self> {
        let mines = coords
            .iter()
            .map(|&coords| config.index_of(coords))
            .collect::<Result<_>>()?;
        Ok(Self { mines })
    }
}

impl LayoutGenerator for FixedLayoutGenerator {
    fn generate(&mut self, total_cells: CellCount, mine_count: CellCount) -> Result<MineIndices> {
        validate_mine_count(total_cells, mine_count)?;

        if let Some(&index) = self.mines.iter().find(|&&index| index >= total_cells) {
            return Err(ConfigIssue::MineOutOfRange { index, total_cells }.into());
        }
        let actual = self.mines.len() as CellCount;
        if actual != mine_count {
            return Err(ConfigIssue::MineCountMismatch {
                expected: mine_count,
                actual,
            }
            .into());
        }
        Ok(self.mines.clone())
    }
}
