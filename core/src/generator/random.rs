use alloc::vec;
use rand::prelude::*;

use super::*;

/// Uniform layout generator: shuffles a labelled cell array with Fisher-Yates.
#[derive(Clone, Debug)]
pub struct RandomLayoutGenerator {
    rng: SmallRng,
}

impl RandomLayoutGenerator {
    /// Reproducible layouts for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(&mut self, total_cells: CellCount, mine_count: CellCount) -> Result<MineIndices> {
        validate_mine_count(total_cells, mine_count)?;

        let mut labels = vec![false; usize::from(total_cells)];
        labels[..usize::from(mine_count)].fill(true);

        for i in (1..labels.len()).rev() {
            let j = self.rng.random_range(0..=i);
            labels.swap(i, j);
        }

        let mines: MineIndices = labels
            .iter()
            .zip(0..total_cells)
            .filter_map(|(&is_mine, index)| is_mine.then_some(index))
            .collect();
        log::trace!(
            "Generated {} mines over {} cells",
            mines.len(),
            total_cells
        );
        Ok(mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_exact_number_of_distinct_mines() {
        let mut generator = RandomLayoutGenerator::from_seed(7);

        for _ in 0..50 {
            let mines = generator.generate(100, 20).unwrap();
            assert_eq!(mines.len(), 20);
            assert!(mines.iter().all(|&index| index < 100));
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let first = RandomLayoutGenerator::from_seed(42).generate(81, 10).unwrap();
        let second = RandomLayoutGenerator::from_seed(42).generate(81, 10).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn rejects_empty_or_full_layouts() {
        let mut generator = RandomLayoutGenerator::from_seed(1);

        assert_eq!(
            generator.generate(10, 0),
            Err(GameError::InvalidConfiguration(ConfigIssue::NoMines))
        );
        assert_eq!(
            generator.generate(10, 10),
            Err(GameError::InvalidConfiguration(ConfigIssue::TooManyMines {
                mines: 10,
                total_cells: 10
            }))
        );
    }

    #[test]
    fn every_cell_is_picked_with_near_uniform_frequency() {
        const TRIALS: u32 = 30_000;
        let mut generator = RandomLayoutGenerator::from_seed(0x5eed);
        let mut hits = [0u32; 10];

        for _ in 0..TRIALS {
            for index in generator.generate(10, 3).unwrap() {
                hits[usize::from(index)] += 1;
            }
        }

        // each cell is a mine with probability 3/10
        let expected = TRIALS * 3 / 10;
        let tolerance = expected / 20;
        for (index, &count) in hits.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < tolerance,
                "cell {index} hit {count} times, expected about {expected}"
            );
        }
    }
}
