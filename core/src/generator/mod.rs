use alloc::collections::BTreeSet;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Flattened `row * width + col` indices of the cells holding a mine.
pub type MineIndices = BTreeSet<CellCount>;

pub trait LayoutGenerator {
    /// Picks exactly `mine_count` distinct indices in `0..total_cells`.
    ///
    /// Fails with [`GameError::InvalidConfiguration`] unless `0 < mine_count < total_cells`.
    fn generate(&mut self, total_cells: CellCount, mine_count: CellCount) -> Result<MineIndices>;
}
