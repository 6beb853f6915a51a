use log::trace;

use crate::board::{BOARD_SIZE, Board, DIRECTIONS, offset};
use crate::rules::CaptureRule;
use crate::types::{CellState, Player};

/// Walk state for one compass direction.
#[derive(Debug, Clone, Copy, Default)]
struct Ray {
    terminated: bool,
    /// At least one disc of the side that just moved has been passed.
    crossed: bool,
}

/// Marks every cell `next_to_move` may play, scanning outwards from each of
/// its discs. Existing markers are kept; this pass never removes one.
pub(crate) fn mark_legal(work: &mut Board, next_to_move: Player, rule: CaptureRule) {
    let own = next_to_move.disc();
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            if work.get(x, y) == own {
                scan_from(work, x, y, next_to_move, rule);
            }
        }
    }
}

/// Advances all eight rays from `(x, y)` one step at a time.
fn scan_from(work: &mut Board, x: usize, y: usize, next_to_move: Player, rule: CaptureRule) {
    let own = next_to_move.disc();
    let flanked = next_to_move.opponent().disc();
    let mut rays = [Ray::default(); 8];

    for steps in 1..BOARD_SIZE as i32 {
        for (ray, dir) in rays.iter_mut().zip(DIRECTIONS) {
            if ray.terminated {
                continue;
            }
            let Some((cx, cy)) = offset(x, y, dir, steps) else {
                ray.terminated = true;
                continue;
            };

            match work.get(cx, cy) {
                CellState::Empty | CellState::Legal => {
                    if ray.crossed {
                        trace!("({cx}, {cy}) legal for {next_to_move:?} from ({x}, {y})");
                        work.set(cx, cy, CellState::Legal);
                        ray.terminated = true;
                    } else if rule == CaptureRule::Flanking {
                        ray.terminated = true;
                    }
                }
                cell if cell == flanked => ray.crossed = true,
                cell => {
                    debug_assert_eq!(cell, own);
                    ray.terminated = true;
                }
            }
        }

        if rays.iter().all(|ray| ray.terminated) {
            break;
        }
    }
}
