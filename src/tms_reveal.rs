// Reveal engine: opens cells and flood-fills zero regions

use crate::tms_board::{Board, Cell};
use crate::tms_grid::Grid;

/// Per-cell player state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Hidden,
    Revealed,
    Flagged,
}

/// What a single reveal call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealOutcome {
    pub hit_mine: bool,
    pub opened: usize, // Safe cells newly revealed
}

/// Reveal (row, col) and, if it has no adjacent mines, every connected
/// zero-count region around it.
///
/// Out-of-range, already revealed and flagged cells are left alone.
/// `remaining` is decremented once per safe cell opened; mines never
/// decrement it. The flood uses an explicit stack and only ever opens
/// hidden safe cells, so each cell is visited at most once.
pub fn reveal(
    board: &Board,
    marks: &mut Grid<Mark>,
    row: usize,
    col: usize,
    remaining: &mut usize,
) -> RevealOutcome {
    let mut outcome = RevealOutcome::default();
    let Some(cell) = board.get(row, col) else {
        return outcome;
    };
    match marks.get_mut(row, col) {
        Some(mark @ Mark::Hidden) => *mark = Mark::Revealed,
        _ => return outcome,
    }
    let adj = match cell {
        Cell::Mine => {
            outcome.hit_mine = true;
            return outcome;
        }
        Cell::Safe(adj) => adj,
    };
    outcome.opened = 1;
    *remaining = remaining.saturating_sub(1);
    if adj != 0 {
        return outcome;
    }

    let mut stack = vec![(row, col)];
    while let Some((r, c)) = stack.pop() {
        for (nr, nc) in board.neighbors(r, c) {
            let Some(Cell::Safe(nadj)) = board.get(nr, nc) else {
                continue;
            };
            match marks.get_mut(nr, nc) {
                Some(mark @ Mark::Hidden) => *mark = Mark::Revealed,
                _ => continue,
            }
            outcome.opened += 1;
            *remaining = remaining.saturating_sub(1);
            if nadj == 0 {
                stack.push((nr, nc));
            }
        }
    }
    outcome
}

/// Flip a hidden cell to flagged and back. Revealed cells are left alone.
pub fn toggle_flag(marks: &mut Grid<Mark>, row: usize, col: usize) {
    if let Some(mark) = marks.get_mut(row, col) {
        *mark = match *mark {
            Mark::Hidden => Mark::Flagged,
            Mark::Flagged => Mark::Hidden,
            Mark::Revealed => Mark::Revealed,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fresh(board: &Board) -> (Grid<Mark>, usize) {
        (Grid::filled(board.size(), Mark::Hidden), board.safe_cells())
    }

    fn revealed(marks: &Grid<Mark>) -> usize {
        marks.iter().filter(|m| **m == Mark::Revealed).count()
    }

    #[test]
    fn mine_hit_keeps_remaining() {
        let board = Board::from_mines(3, &[(1, 1)]).unwrap();
        let (mut marks, mut remaining) = fresh(&board);
        let out = reveal(&board, &mut marks, 1, 1, &mut remaining);
        assert!(out.hit_mine);
        assert_eq!(out.opened, 0);
        assert_eq!(remaining, 8);
        assert_eq!(marks.get(1, 1), Some(&Mark::Revealed));
    }

    #[test]
    fn numbered_cell_does_not_propagate() {
        let board = Board::from_mines(3, &[(1, 1)]).unwrap();
        let (mut marks, mut remaining) = fresh(&board);
        let out = reveal(&board, &mut marks, 0, 0, &mut remaining);
        assert!(!out.hit_mine);
        assert_eq!(out.opened, 1);
        assert_eq!(remaining, 7);
        assert_eq!(revealed(&marks), 1);
    }

    #[test]
    fn flood_opens_zero_region_and_its_border() {
        // mine in the bottom-right corner of a 4x4 board
        let board = Board::from_mines(4, &[(3, 3)]).unwrap();
        let (mut marks, mut remaining) = fresh(&board);
        let out = reveal(&board, &mut marks, 0, 0, &mut remaining);
        assert!(!out.hit_mine);
        assert_eq!(out.opened, 15);
        assert_eq!(remaining, 0);
        assert_eq!(marks.get(3, 3), Some(&Mark::Hidden));
    }

    #[test]
    fn flood_stops_at_numbers() {
        // column of mines splits the board; the right side stays hidden
        let board = Board::from_mines(5, &[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]).unwrap();
        let (mut marks, mut remaining) = fresh(&board);
        let out = reveal(&board, &mut marks, 2, 0, &mut remaining);
        assert_eq!(out.opened, 10);
        assert_eq!(remaining, 10);
        for r in 0..5 {
            assert_eq!(marks.get(r, 3), Some(&Mark::Hidden));
            assert_eq!(marks.get(r, 1), Some(&Mark::Revealed));
        }
    }

    #[test]
    fn hand_built_zero_board_leaves_mine_hidden() {
        let mut cells = vec![Cell::Safe(0); 9];
        cells[4] = Cell::Mine;
        let board = Board::from_cells(3, cells).unwrap();
        let (mut marks, mut remaining) = fresh(&board);
        let out = reveal(&board, &mut marks, 0, 0, &mut remaining);
        assert!(!out.hit_mine);
        assert_eq!(out.opened, 8);
        assert_eq!(remaining, 0);
        assert_eq!(marks.get(1, 1), Some(&Mark::Hidden));
    }

    #[test]
    fn second_reveal_is_noop() {
        let board = Board::from_mines(4, &[(3, 3)]).unwrap();
        let (mut marks, mut remaining) = fresh(&board);
        reveal(&board, &mut marks, 0, 0, &mut remaining);
        let before = marks.clone();
        let out = reveal(&board, &mut marks, 0, 0, &mut remaining);
        assert_eq!(out, RevealOutcome::default());
        assert_eq!(marks, before);
        assert_eq!(remaining, 0);
    }

    #[test]
    fn out_of_range_is_noop() {
        let board = Board::from_mines(3, &[(1, 1)]).unwrap();
        let (mut marks, mut remaining) = fresh(&board);
        let out = reveal(&board, &mut marks, 3, 0, &mut remaining);
        assert_eq!(out, RevealOutcome::default());
        assert_eq!(remaining, 8);
        assert_eq!(revealed(&marks), 0);
    }

    #[test]
    fn flags_block_reveal_and_flood() {
        let board = Board::from_mines(4, &[(3, 3)]).unwrap();
        let (mut marks, mut remaining) = fresh(&board);
        toggle_flag(&mut marks, 0, 0);
        assert_eq!(reveal(&board, &mut marks, 0, 0, &mut remaining).opened, 0);
        toggle_flag(&mut marks, 1, 1);
        let out = reveal(&board, &mut marks, 0, 0, &mut remaining);
        assert_eq!(out.opened, 0);
        toggle_flag(&mut marks, 0, 0);
        let out = reveal(&board, &mut marks, 0, 0, &mut remaining);
        assert_eq!(out.opened, 14);
        assert_eq!(marks.get(1, 1), Some(&Mark::Flagged));
        assert_eq!(remaining, 1);
    }

    #[test]
    fn toggle_flag_rules() {
        let board = Board::from_mines(3, &[(1, 1)]).unwrap();
        let (mut marks, mut remaining) = fresh(&board);
        toggle_flag(&mut marks, 2, 2);
        assert_eq!(marks.get(2, 2), Some(&Mark::Flagged));
        toggle_flag(&mut marks, 2, 2);
        assert_eq!(marks.get(2, 2), Some(&Mark::Hidden));

        reveal(&board, &mut marks, 0, 0, &mut remaining);
        toggle_flag(&mut marks, 0, 0);
        assert_eq!(marks.get(0, 0), Some(&Mark::Revealed));

        // out of range does nothing
        toggle_flag(&mut marks, 9, 9);
    }

    #[test]
    fn extreme_board_flood_does_not_recurse() {
        // one mine in a 40x40 board: a single reveal opens everything else
        let board = Board::from_mines(40, &[(39, 39)]).unwrap();
        let (mut marks, mut remaining) = fresh(&board);
        let out = reveal(&board, &mut marks, 0, 0, &mut remaining);
        assert_eq!(out.opened, 1599);
        assert_eq!(remaining, 0);
    }

    proptest! {
        #[test]
        fn remaining_drops_by_opened(seed in any::<u64>(), row in 0usize..8, col in 0usize..8) {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = crate::tms_board::generate(8, 10, &mut rng).unwrap();
            let (mut marks, mut remaining) = fresh(&board);
            let out = reveal(&board, &mut marks, row, col, &mut remaining);
            if out.hit_mine {
                prop_assert_eq!(remaining, board.safe_cells());
                prop_assert_eq!(out.opened, 0);
            } else {
                prop_assert!(out.opened >= 1);
                prop_assert_eq!(remaining + out.opened, board.safe_cells());
                prop_assert_eq!(revealed(&marks), out.opened);
            }
        }
    }
}
