use crate::Arbitrary;

/// One of the three Rock-Paper-Scissors throws.
///
/// Cyclic dominance: Rock beats Scissors, Scissors beats Paper,
/// Paper beats Rock. Variant order doubles as tie-break priority
/// wherever several moves are equally likely.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    #[serde(rename = "scissor")]
    Scissors,
}

impl Move {
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// Single-character compressed code.
    pub const fn code(&self) -> char {
        match self {
            Self::Rock => 'r',
            Self::Paper => 'p',
            Self::Scissors => 's',
        }
    }
    /// Token name as spoken by clients.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissor",
        }
    }
    /// The move that defeats this one.
    pub const fn counter(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    pub fn beats(&self, other: &Self) -> bool {
        other.counter() == *self
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// Move from stored code text, which must be exactly one known code.
    pub fn from_code(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c).ok(),
            _ => None,
        }
    }
}

/// token isomorphism
impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| anyhow::anyhow!("unrecognized move {:?}", s))
    }
}

/// code isomorphism
impl TryFrom<char> for Move {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|m| m.code() == c)
            .ok_or_else(|| anyhow::anyhow!("unrecognized move code {:?}", c))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        Self::ALL[crate::roll(Self::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_cyclic() {
        assert_eq!(Move::Rock.counter(), Move::Paper);
        assert_eq!(Move::Paper.counter(), Move::Scissors);
        assert_eq!(Move::Scissors.counter(), Move::Rock);
    }

    #[test]
    fn counter_beats_the_move_it_counters() {
        for m in Move::ALL {
            assert!(m.counter().beats(&m));
            assert!(!m.beats(&m.counter()));
            assert!(!m.beats(&m));
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(Move::try_from("scissor").ok(), Some(Move::Scissors));
        assert!(Move::try_from("Rock").is_err());
        assert!(Move::try_from("scissors").is_err());
        assert!(Move::try_from("").is_err());
    }

    #[test]
    fn codes_match_first_letter() {
        for m in Move::ALL {
            assert_eq!(m.name().chars().next(), Some(m.code()));
            assert_eq!(Move::try_from(m.code()).ok(), Some(m));
        }
        assert!(Move::try_from('x').is_err());
    }

    #[test]
    fn stored_code_must_be_single_known_char() {
        assert_eq!(Move::from_code("r"), Some(Move::Rock));
        assert_eq!(Move::from_code("s"), Some(Move::Scissors));
        assert_eq!(Move::from_code("rp"), None);
        assert_eq!(Move::from_code(""), None);
        assert_eq!(Move::from_code("x"), None);
        assert_eq!(Move::from_code("rock"), None);
    }

    #[test]
    fn random_is_total() {
        for _ in 0..64 {
            assert!(Move::ALL.contains(&Move::random()));
        }
    }
}
