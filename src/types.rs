use serde::Serialize;

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Disc color this player places.
    pub fn disc(self) -> CellState {
        match self {
            Self::Black => CellState::Black,
            Self::White => CellState::White,
        }
    }
}

/// State of a single board cell.
///
/// `Legal` marks an empty cell the side to move may play; it is recomputed
/// after every move and never counts as a disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    #[default]
    Empty,
    Legal,
    Black,
    White,
}

impl CellState {
    pub fn is_disc(self) -> bool {
        matches!(self, Self::Black | Self::White)
    }

    /// `Empty` and `Legal` are both unoccupied.
    pub fn is_vacant(self) -> bool {
        matches!(self, Self::Empty | Self::Legal)
    }
}

/// A board coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// A disc placement by `player` at `pos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Position,
    pub player: Player,
}

impl Move {
    pub fn new(x: u8, y: u8, player: Player) -> Self {
        Self {
            pos: Position::new(x, y),
            player,
        }
    }
}

/// Snapshot of a game session handed to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major, 64 entries.
    pub cells: Vec<CellState>,
    pub current_player: Player,
    pub black_count: u8,
    pub white_count: u8,
    pub legal_moves: Vec<Position>,
    /// Discs flipped by the previous move. Empty before the first move.
    pub flipped: Vec<Position>,
    pub is_game_over: bool,
    /// Only meaningful once `is_game_over` is set. `None` on a tie.
    pub winner: Option<Player>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Option<Player>,
    pub black_count: u8,
    pub white_count: u8,
}
