/// Which participant of a round a value belongs to.
///
/// The player is the human being predicted; the opponent is the engine.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Opponent => write!(f, "opponent"),
        }
    }
}
