use rand::SeedableRng;
use rand::rngs::StdRng;

use tmines::tms_board::{Board, Cell, generate};
use tmines::tms_game::{CellView, Command, Difficulty, Game, Status};
use tmines::tms_reveal::Mark;

fn center_mine_zero_board() -> Board {
    let mut cells = vec![Cell::Safe(0); 9];
    cells[4] = Cell::Mine;
    Board::from_cells(3, cells).unwrap()
}

#[test]
fn corner_reveal_floods_to_a_win() {
    let mut game = Game::from_board(center_mine_zero_board());
    assert_eq!(game.reveal(0, 0), Status::Won);
    assert_eq!(game.remaining(), 0);
    assert_eq!(game.mark(1, 1), Some(Mark::Hidden));
    for (row, col) in [(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)] {
        assert_eq!(game.mark(row, col), Some(Mark::Revealed));
        assert_eq!(game.cell_view(row, col), CellView::Blank);
    }
}

#[test]
fn center_reveal_loses() {
    let mut game = Game::from_board(center_mine_zero_board());
    assert_eq!(game.reveal(1, 1), Status::Lost);
    assert_eq!(game.remaining(), 8);
    assert_eq!(game.cell_view(1, 1), CellView::Detonated);
}

#[test]
fn easy_board_counts_match_mine_pairs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let board = generate(8, 10, &mut rng).unwrap();
    let mut count_sum = 0usize;
    let mut pairs = 0usize;
    for ((row, col), cell) in board.positions() {
        match cell {
            Cell::Safe(adj) => count_sum += adj as usize,
            Cell::Mine => {
                pairs += board
                    .neighbors(row, col)
                    .filter(|&(r, c)| board.get(r, c) != Some(Cell::Mine))
                    .count()
            }
        }
    }
    assert_eq!(count_sum, pairs);
}

/// Walk the cursor over every cell and reveal the safe ones
fn play_perfectly(game: &mut Game, rng: &mut StdRng) {
    let size = game.size();
    for row in 0..size {
        for col in 0..size {
            if game.status().is_over() {
                return;
            }
            if game.board().get(row, col) == Some(Cell::Mine) {
                continue;
            }
            while game.cursor().0 < row {
                game.apply(Command::Down, rng).unwrap();
            }
            while game.cursor().1 < col {
                game.apply(Command::Right, rng).unwrap();
            }
            while game.cursor().1 > col {
                game.apply(Command::Left, rng).unwrap();
            }
            game.apply(Command::Reveal, rng).unwrap();
        }
    }
}

#[test]
fn perfect_play_wins_every_preset() {
    let mut rng = StdRng::seed_from_u64(99);
    for difficulty in Difficulty::ALL {
        let mut game = Game::new(difficulty, &mut rng).unwrap();
        play_perfectly(&mut game, &mut rng);
        assert_eq!(game.status(), Status::Won, "{difficulty}");
        assert_eq!(game.remaining(), 0);

        // won is final: flags and reveals are ignored
        game.toggle_flag(0, 0);
        assert_eq!(game.apply(Command::Reveal, &mut rng), Ok(Status::Won));

        // a new game starts over with fresh grids
        assert_eq!(game.apply(Command::NewGame, &mut rng), Ok(Status::InProgress));
        let (size, mines) = difficulty.params();
        assert_eq!(game.remaining(), size * size - mines);
        assert_eq!(game.mines_left(), mines as isize);
    }
}
