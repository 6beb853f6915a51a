use log::{debug, warn};

use crate::board::Board;
use crate::engine::{Engine, score};
use crate::error::EngineError;
use crate::rules::Rules;
use crate::types::{CellState, GameResult, GameState, Move, Player, Position};

/// One game between two local players: the board, whose turn it is, and the
/// outcome of the last move.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    engine: Engine,
    pub current_player: Player,
    pub is_game_over: bool,
    pub flipped: Vec<Position>,
}

impl GameSession {
    pub fn new(rules: Rules) -> Self {
        Self {
            board: Board::new(),
            engine: Engine::new(rules),
            current_player: Player::Black,
            is_game_over: false,
            flipped: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> Rules {
        self.engine.rules()
    }

    /// Plays the current player's disc at `(x, y)` and passes the turn.
    ///
    /// The game ends as soon as the player to move has no legal cell.
    pub fn place(&mut self, x: u8, y: u8) -> Result<(), EngineError> {
        if self.is_game_over {
            return Err(EngineError::GameOver);
        }

        let mv = Move::new(x, y, self.current_player);
        let capture = self.engine.play(&self.board, mv).inspect_err(|err| {
            warn!("rejected {:?} move: {err}", self.current_player);
        })?;

        self.board = capture.board;
        self.flipped = capture.flipped;
        self.current_player = self.current_player.opponent();

        if score(&self.board).is_game_over() {
            debug!("no legal moves left for {:?}, game over", self.current_player);
            self.is_game_over = true;
        }

        Ok(())
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.positions_of(CellState::Legal)
    }

    pub fn to_game_state(&self) -> GameState {
        let score = score(&self.board);
        GameState {
            cells: self.board.cells().map(|(_, cell)| cell).collect(),
            current_player: self.current_player,
            black_count: score.black,
            white_count: score.white,
            legal_moves: self.legal_moves(),
            flipped: self.flipped.clone(),
            is_game_over: self.is_game_over,
            winner: if self.is_game_over { score.winner() } else { None },
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let score = score(&self.board);
        GameResult {
            winner: score.winner(),
            black_count: score.black,
            white_count: score.white,
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Player) {
        self.board = board;
        self.current_player = current_player;
        self.is_game_over = false;
        self.flipped.clear();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}
