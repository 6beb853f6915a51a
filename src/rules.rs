use serde::{Deserialize, Serialize};

/// How a move captures opponent discs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureRule {
    /// For each of the four axes through the move, the last disc of the
    /// mover's color anywhere on that axis anchors the capture, and every
    /// opponent disc between the move and the anchor flips. Gaps are not
    /// checked, and a disc on the near side of the move is ignored when a
    /// later one exists on the far side.
    ///
    /// Legality scanning walks past empty cells until it has crossed an
    /// opponent disc.
    #[default]
    AxisAnchor,
    /// Standard rules: only unbroken runs of opponent discs closed by one of
    /// the mover's discs flip, in all eight directions.
    Flanking,
}

/// Rule options for a game. Missing fields fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub capture: CaptureRule,
}

impl Rules {
    pub fn flanking() -> Self {
        Self {
            capture: CaptureRule::Flanking,
        }
    }
}
