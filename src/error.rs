/// Errors raised by the rules engine and the game session built on it.
///
/// Every operation checks for these before touching any board, so a failed
/// call never leaves a partially updated position behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("coordinate ({x}, {y}) is outside the 8x8 board")]
    OutOfRange { x: u8, y: u8 },

    #[error("illegal move at ({x}, {y}): cell is not a legal destination")]
    IllegalMove { x: u8, y: u8 },

    #[error("game is already over")]
    GameOver,
}
