//! Move resolution, legal-move recomputation and scoring.
//!
//! Every operation takes a `&Board` and hands back a new one; the input is
//! never modified.

mod capture;
mod legality;
mod score;

pub use capture::Capture;
pub use score::{Score, score};

use crate::board::Board;
use crate::error::EngineError;
use crate::rules::Rules;
use crate::types::{Move, Player};

/// Rules engine bound to one rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    rules: Rules,
}

impl Engine {
    pub fn new(rules: Rules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Places the disc, flips captured discs and clears stale legal markers.
    /// Fails with `IllegalMove` unless the target cell is currently `Legal`.
    pub fn apply_move(&self, board: &Board, mv: Move) -> Result<Board, EngineError> {
        self.capture(board, mv).map(|capture| capture.board)
    }

    /// Same as [`Engine::apply_move`], also reporting which discs flipped.
    pub fn capture(&self, board: &Board, mv: Move) -> Result<Capture, EngineError> {
        capture::resolve(board, mv, self.rules.capture)
    }

    /// Marks every cell `next_to_move` may play.
    pub fn recompute_legal(&self, board: &Board, next_to_move: Player) -> Board {
        let mut work = *board;
        legality::mark_legal(&mut work, next_to_move, self.rules.capture);
        work
    }

    /// A full turn: capture, then legal moves for the opponent.
    pub fn play(&self, board: &Board, mv: Move) -> Result<Capture, EngineError> {
        let mut capture = self.capture(board, mv)?;
        legality::mark_legal(&mut capture.board, mv.player.opponent(), self.rules.capture);
        Ok(capture)
    }
}

/// [`Engine::apply_move`] under default rules.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, EngineError> {
    Engine::default().apply_move(board, mv)
}

/// [`Engine::recompute_legal`] under default rules.
pub fn recompute_legal(board: &Board, next_to_move: Player) -> Board {
    Engine::default().recompute_legal(board, next_to_move)
}

/// [`Engine::play`] under default rules, returning only the board.
pub fn play(board: &Board, mv: Move) -> Result<Board, EngineError> {
    Engine::default().play(board, mv).map(|capture| capture.board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::NUM_SQUARES;
    use crate::types::{CellState, Position};

    fn engines() -> [Engine; 2] {
        [Engine::default(), Engine::new(Rules::flanking())]
    }

    fn assert_sums_to_full_board(board: &Board) {
        let s = score(board);
        let empty = board.positions_of(CellState::Empty).len();
        assert_eq!(
            s.black as usize + s.white as usize + s.legal as usize + empty,
            NUM_SQUARES
        );
        assert_eq!(s.empty() as usize, empty);
    }

    #[test]
    fn black_opening_at_2_3_leaves_three_white_replies() {
        let board = Board::new();

        let after = apply_move(&board, Move::new(2, 3, Player::Black)).unwrap();
        let after = recompute_legal(&after, Player::White);

        assert_eq!(after.cell_at(2, 3), Ok(CellState::Black));
        assert_eq!(after.cell_at(3, 3), Ok(CellState::Black));
        assert_eq!(after.cell_at(5, 4), Ok(CellState::Empty));
        assert_eq!(after.cell_at(3, 2), Ok(CellState::Empty));
        assert_eq!(
            after.positions_of(CellState::Legal),
            vec![Position::new(2, 2), Position::new(4, 2), Position::new(2, 4)]
        );
        assert_eq!(
            score(&after),
            Score {
                black: 4,
                white: 1,
                legal: 3
            }
        );
        assert_eq!(play(&board, Move::new(2, 3, Player::Black)), Ok(after));
    }

    #[test]
    fn input_board_is_left_untouched() {
        let board = Board::new();
        let snapshot = board;

        let _ = play(&board, Move::new(4, 5, Player::Black)).unwrap();

        assert_eq!(board, snapshot);
    }

    #[test]
    fn rejected_move_reports_illegal_and_changes_nothing() {
        let board = Board::new();
        let before = board;

        for engine in engines() {
            for (x, y) in [(0, 0), (3, 3), (4, 3), (7, 7)] {
                let err = engine.play(&board, Move::new(x, y, Player::Black)).unwrap_err();
                assert_eq!(err, EngineError::IllegalMove { x, y });
            }
        }
        assert_eq!(board, before);
    }

    #[test]
    fn counts_stay_consistent_over_a_played_out_line() {
        for engine in engines() {
            let mut board = Board::new();
            let mut player = Player::Black;

            for _ in 0..NUM_SQUARES {
                let Some(&pos) = board.positions_of(CellState::Legal).first() else {
                    break;
                };
                let before = score(&board);
                let after = engine
                    .apply_move(&board, Move::new(pos.x, pos.y, player))
                    .unwrap();
                let mid = score(&after);

                assert!(mid.discs(player) > before.discs(player));
                assert!(mid.discs(player.opponent()) <= before.discs(player.opponent()));
                assert_eq!(mid.legal, 0);
                assert_eq!(
                    mid.black as u16 + mid.white as u16,
                    before.black as u16 + before.white as u16 + 1
                );
                assert_sums_to_full_board(&after);

                board = engine.recompute_legal(&after, player.opponent());
                assert_sums_to_full_board(&board);
                player = player.opponent();
            }

            assert!(score(&board).is_game_over());
        }
    }

    #[test]
    fn recompute_is_idempotent_after_a_move() {
        for engine in engines() {
            let board = engine
                .apply_move(&Board::new(), Move::new(3, 2, Player::Black))
                .unwrap();

            let once = engine.recompute_legal(&board, Player::White);
            let twice = engine.recompute_legal(&once, Player::White);

            assert_eq!(once, twice);
        }
    }

    #[test]
    fn play_reports_flipped_discs() {
        let capture = Engine::default()
            .play(&Board::new(), Move::new(5, 4, Player::Black))
            .unwrap();

        assert_eq!(capture.flipped, vec![Position::new(4, 4)]);
        assert_eq!(score(&capture.board).legal, 3);
    }
}
