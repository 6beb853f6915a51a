use log::debug;

use crate::board::{BOARD_SIZE, Board, DIRECTIONS, offset};
use crate::error::EngineError;
use crate::rules::CaptureRule;
use crate::types::{CellState, Move, Position};

/// The four lines through a played cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Row,
    Column,
    /// `\`, constant `x - y`.
    Falling,
    /// `/`, constant `x + y`.
    Rising,
}

const AXES: [Axis; 4] = [Axis::Row, Axis::Column, Axis::Falling, Axis::Rising];

impl Axis {
    fn passes_through(self, (x, y): (usize, usize), (i, j): (usize, usize)) -> bool {
        match self {
            Self::Row => j == y,
            Self::Column => i == x,
            Self::Falling => i as i32 - j as i32 == x as i32 - y as i32,
            Self::Rising => i + j == x + y,
        }
    }
}

/// Result of resolving one move: the new board and the discs that changed
/// color (the placed disc excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub board: Board,
    pub flipped: Vec<Position>,
}

/// Places `mv` on a copy of `board`, flips captured discs and clears every
/// stale `Legal` marker. Legal moves for the opponent are not recomputed.
pub(crate) fn resolve(board: &Board, mv: Move, rule: CaptureRule) -> Result<Capture, EngineError> {
    let Position { x, y } = mv.pos;
    if board.cell_at(x, y)? != CellState::Legal {
        return Err(EngineError::IllegalMove { x, y });
    }

    let mut work = *board;
    let (x, y) = (x as usize, y as usize);
    let flipped = match rule {
        CaptureRule::AxisAnchor => flip_to_axis_anchors(&mut work, x, y, mv),
        CaptureRule::Flanking => {
            sweep_legal(&mut work);
            flip_flanked_runs(&mut work, x, y, mv)
        }
    };
    work.set(x, y, mv.player.disc());

    debug!(
        "{:?} played ({x}, {y}) under {rule:?}, flipped {} disc(s)",
        mv.player,
        flipped.len()
    );

    Ok(Capture {
        board: work,
        flipped,
    })
}

/// Anchor search and legal sweep share one pass over the board. Cells are
/// visited column by column, so each axis keeps the anchor with the largest
/// `x` (largest `y` on the column axis).
fn flip_to_axis_anchors(work: &mut Board, x: usize, y: usize, mv: Move) -> Vec<Position> {
    let mine = mv.player.disc();
    let mut anchors: [Option<(usize, usize)>; 4] = [None; 4];

    for i in 0..BOARD_SIZE {
        for j in 0..BOARD_SIZE {
            match work.get(i, j) {
                CellState::Legal => work.set(i, j, CellState::Empty),
                cell if cell == mine => {
                    for (anchor, axis) in anchors.iter_mut().zip(AXES) {
                        if axis.passes_through((x, y), (i, j)) {
                            *anchor = Some((i, j));
                        }
                    }
                }
                _ => {}
            }
        }
    }

    let theirs = mv.player.opponent().disc();
    let mut flipped = Vec::new();
    for (ax, ay) in anchors.into_iter().flatten() {
        let dx = ax as i32 - x as i32;
        let dy = ay as i32 - y as i32;
        let step = (dx.signum(), dy.signum());

        for n in 0..=dx.abs().max(dy.abs()) {
            let Some((cx, cy)) = offset(x, y, step, n) else {
                break;
            };
            if work.get(cx, cy) == theirs {
                work.set(cx, cy, mine);
                flipped.push(Position::new(cx as u8, cy as u8));
            }
        }
    }

    flipped
}

fn flip_flanked_runs(work: &mut Board, x: usize, y: usize, mv: Move) -> Vec<Position> {
    let mine = mv.player.disc();
    let theirs = mv.player.opponent().disc();
    let mut flips = Vec::new();

    for dir in DIRECTIONS {
        let mut line = Vec::new();
        let mut steps = 1;

        while let Some((cx, cy)) = offset(x, y, dir, steps) {
            let cell = work.get(cx, cy);
            if cell == theirs {
                line.push((cx, cy));
            } else {
                if cell == mine {
                    flips.extend(line);
                }
                break;
            }
            steps += 1;
        }
    }

    flips
        .into_iter()
        .map(|(cx, cy)| {
            work.set(cx, cy, mine);
            Position::new(cx as u8, cy as u8)
        })
        .collect()
}

fn sweep_legal(work: &mut Board) {
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            if work.get(x, y) == CellState::Legal {
                work.set(x, y, CellState::Empty);
            }
        }
    }
}
