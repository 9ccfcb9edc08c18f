use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::*;

/// Reveals `start` and floods outward across empty cells.
///
/// Breadth-first: every popped cell that is still hidden gets revealed, and only cells without adjacent mines queue
/// their neighbors, so the fill covers the connected empty region plus its ring of numbered cells. Flagged cells are
/// never touched and a mine is only revealed when it is `start` itself.
///
/// Returns the newly revealed coordinates in discovery order.
pub fn reveal(board: &mut Board, start: Coord2) -> Result<Vec<Coord2>> {
    let start = board.validate_coords(start)?;

    let mut revealed = Vec::new();
    let mut to_visit = VecDeque::from([start]);

    while let Some(coords) = to_visit.pop_front() {
        let cell = board[coords];
        if cell.state() != CellState::Hidden {
            continue;
        }

        board.set_state(coords, CellState::Revealed);
        revealed.push(coords);

        if cell.is_empty() {
            to_visit.extend(
                board
                    .neighbors(coords)
                    .filter(|&pos| board[pos].state() == CellState::Hidden),
            );
        }
    }

    log::trace!("Revealed {} cells from {:?}", revealed.len(), start);
    Ok(revealed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::vec;

    fn board(width: Coord, height: Coord, mines: &[Coord2]) -> Board {
        let config = GameConfig::new(width, height, mines.len() as CellCount).unwrap();
        Board::from_mine_coords(config, mines).unwrap()
    }

    fn revealed_set(board: &Board) -> BTreeSet<Coord2> {
        board
            .iter()
            .filter(|(_, cell)| cell.is_revealed())
            .map(|(coords, _)| coords)
            .collect()
    }

    #[test]
    fn numbered_cell_does_not_propagate() {
        let mut board = board(3, 3, &[(1, 1)]);

        let revealed = reveal(&mut board, (0, 0)).unwrap();

        assert_eq!(revealed, vec![(0, 0)]);
        assert_eq!(board[(0, 0)].adjacent_mines(), Some(1));
        assert_eq!(board.count_in_state(CellState::Revealed), 1);
    }

    #[test]
    fn zero_region_floods_up_to_numbered_ring() {
        let mut board = board(4, 4, &[(3, 3)]);

        let revealed = reveal(&mut board, (0, 0)).unwrap();

        // twelve empty cells plus the three cells touching the mine
        assert_eq!(revealed.len(), 15);
        assert_eq!(revealed[0], (0, 0));
        for coords in [(2, 2), (2, 3), (3, 2)] {
            assert_eq!(board[coords].adjacent_mines(), Some(1));
            assert!(board[coords].is_revealed());
        }
        assert_eq!(board[(3, 3)].state(), CellState::Hidden);
    }

    #[test]
    fn flood_does_not_leak_past_numbered_cells() {
        // . . * . .
        // . . * . .
        // . . * . .
        let mut board = board(5, 3, &[(0, 2), (1, 2), (2, 2)]);

        let revealed: BTreeSet<_> = reveal(&mut board, (1, 0)).unwrap().into_iter().collect();

        let left: BTreeSet<_> = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)].into();
        assert_eq!(revealed, left);
        assert_eq!(revealed_set(&board), left);
    }

    #[test]
    fn reveal_skips_flagged_cells_and_routes_around_them() {
        let mut board = board(4, 4, &[(3, 3)]);
        board.set_state((0, 1), CellState::Flagged);

        assert!(reveal(&mut board, (0, 1)).unwrap().is_empty());

        let revealed = reveal(&mut board, (0, 0)).unwrap();
        assert_eq!(revealed.len(), 14);
        assert_eq!(board[(0, 1)].state(), CellState::Flagged);
    }

    #[test]
    fn revealing_twice_is_a_no_op() {
        let mut board = board(4, 4, &[(3, 3)]);
        reveal(&mut board, (0, 0)).unwrap();
        let snapshot = board.clone();

        assert!(reveal(&mut board, (1, 1)).unwrap().is_empty());
        assert_eq!(board, snapshot);
    }

    #[test]
    fn only_the_targeted_mine_is_revealed() {
        let mut board = board(3, 3, &[(0, 0), (2, 2)]);

        assert_eq!(reveal(&mut board, (0, 0)).unwrap(), vec![(0, 0)]);
        assert_eq!(board[(2, 2)].state(), CellState::Hidden);
    }

    #[test]
    fn revealed_cells_are_unique() {
        let mut board = board(30, 16, &[(15, 29)]);

        let revealed = reveal(&mut board, (0, 0)).unwrap();
        let unique: BTreeSet<_> = revealed.iter().copied().collect();

        assert_eq!(revealed.len(), unique.len());
        assert_eq!(revealed.len(), 30 * 16 - 1);
    }

    #[test]
    fn out_of_bounds_start_leaves_board_untouched() {
        let mut board = board(3, 3, &[(1, 1)]);
        let snapshot = board.clone();

        assert!(matches!(
            reveal(&mut board, (3, 0)),
            Err(GameError::OutOfBounds { .. })
        ));
        assert_eq!(board, snapshot);
    }
}
