use crate::error::EngineError;
use crate::types::{CellState, Position};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Compass directions as `(dx, dy)`, `y` growing downwards.
pub(crate) const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Reversi board: an 8x8 grid of cell states, indexed `cells[y][x]`.
///
/// `Board` is a plain value. The engine copies it before mutating, so a board
/// handed back to a caller is never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=white, (4,3)=black, (3,4)=black, (4,4)=white,
    /// with black's four opening moves marked legal.
    pub fn new() -> Self {
        let mut cells = [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE];
        cells[3][3] = CellState::White;
        cells[3][4] = CellState::Black;
        cells[4][3] = CellState::Black;
        cells[4][4] = CellState::White;

        cells[2][3] = CellState::Legal;
        cells[3][2] = CellState::Legal;
        cells[4][5] = CellState::Legal;
        cells[5][4] = CellState::Legal;

        Self { cells }
    }

    /// Builds a board from explicit rows (`rows[y][x]`).
    pub fn from_cells(rows: [[CellState; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells: rows }
    }

    /// Returns the state at `(x, y)`.
    pub fn cell_at(&self, x: u8, y: u8) -> Result<CellState, EngineError> {
        if !in_bounds(x as i32, y as i32) {
            return Err(EngineError::OutOfRange { x, y });
        }
        Ok(self.get(x as usize, y as usize))
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &cell)| (Position::new(x as u8, y as u8), cell))
        })
    }

    /// Positions currently holding `state`, row-major.
    pub fn positions_of(&self, state: CellState) -> Vec<Position> {
        self.cells()
            .filter(|&(_, cell)| cell == state)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub(crate) fn get(&self, x: usize, y: usize) -> CellState {
        self.cells[y][x]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, state: CellState) {
        self.cells[y][x] = state;
    }

    /// `B`/`W` discs, `*` legal, anything else empty. One string per row.
    #[cfg(test)]
    pub(crate) fn from_diagram(rows: [&str; BOARD_SIZE]) -> Self {
        let mut cells = [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(BOARD_SIZE).enumerate() {
                cells[y][x] = match ch {
                    'B' => CellState::Black,
                    'W' => CellState::White,
                    '*' => CellState::Legal,
                    _ => CellState::Empty,
                };
            }
        }
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed starting layout.
pub fn initial_board() -> Board {
    Board::new()
}

pub(crate) fn in_bounds(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
}

/// The cell `steps` away from `(x, y)` along `(dx, dy)`, if on the board.
pub(crate) fn offset(x: usize, y: usize, (dx, dy): (i32, i32), steps: i32) -> Option<(usize, usize)> {
    let nx = x as i32 + dx * steps;
    let ny = y as i32 + dy * steps;
    in_bounds(nx, ny).then_some((nx as usize, ny as usize))
}
