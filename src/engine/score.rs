use serde::Serialize;

use crate::board::{Board, NUM_SQUARES};
use crate::types::{CellState, Player};

/// Per-state cell counts. `Empty` is not tallied; see [`Score::empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Score {
    pub black: u8,
    pub white: u8,
    pub legal: u8,
}

impl Score {
    pub fn count(&self, state: CellState) -> u8 {
        match state {
            CellState::Black => self.black,
            CellState::White => self.white,
            CellState::Legal => self.legal,
            CellState::Empty => self.empty(),
        }
    }

    pub fn discs(&self, player: Player) -> u8 {
        self.count(player.disc())
    }

    pub fn empty(&self) -> u8 {
        NUM_SQUARES as u8 - self.black - self.white - self.legal
    }

    /// The side to move has no legal cell left.
    pub fn is_game_over(&self) -> bool {
        self.legal == 0
    }

    /// The side with more discs, `None` on a tie.
    pub fn winner(&self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Tallies discs and legal cells in one pass.
pub fn score(board: &Board) -> Score {
    board
        .cells()
        .fold(Score::default(), |mut score, (_, cell)| {
            match cell {
                CellState::Black => score.black += 1,
                CellState::White => score.white += 1,
                CellState::Legal => score.legal += 1,
                CellState::Empty => {}
            }
            score
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_tally() {
        let score = score(&Board::new());

        assert_eq!(
            score,
            Score {
                black: 2,
                white: 2,
                legal: 4
            }
        );
        assert_eq!(score.empty(), 56);
        assert_eq!(score.count(CellState::Empty), 56);
        assert!(!score.is_game_over());
        assert_eq!(score.winner(), None);
    }

    #[test]
    fn finished_board_picks_the_larger_count() {
        let board = Board::from_diagram([
            "WWWWWWWW",
            "WWWWWWWW",
            "WWWWWBBB",
            "BBBBBBBB",
            "BBBBBBBB",
            "BBBBBBBB",
            "BBBBBBBB",
            "BBBBBB..",
        ]);

        let score = score(&board);

        assert_eq!(score.legal, 0);
        assert!(score.is_game_over());
        assert_eq!(score.white, 21);
        assert_eq!(score.black, 41);
        assert_eq!(score.empty(), 2);
        assert_eq!(score.winner(), Some(Player::Black));
        assert_eq!(score.discs(Player::White), 21);
    }

    #[test]
    fn white_wins_with_more_discs() {
        let score = Score {
            black: 10,
            white: 30,
            legal: 0,
        };
        assert_eq!(score.winner(), Some(Player::White));
    }
}
