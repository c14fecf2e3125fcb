use super::Move;
use crate::Arbitrary;

/// Ordered run of moves, oldest first.
///
/// Built from raw client text by compression: every token naming a move
/// contributes that move, anything else is dropped without a placeholder.
/// A dropped token therefore shifts every later move one position left.
/// Renders as its compressed code string, e.g. `"rps"`.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq)]
pub struct Sequence(Vec<Move>);

impl Sequence {
    /// Parse stored code text, skipping unknown characters.
    pub fn decode(codes: &str) -> Self {
        codes
            .chars()
            .filter_map(|c| Move::try_from(c).ok())
            .collect()
    }
    /// Last `n` moves, or the whole sequence if shorter.
    pub fn suffix(&self, n: usize) -> Self {
        let skip = self.0.len().saturating_sub(n);
        Self(self.0[skip..].to_vec())
    }
    pub fn moves(&self) -> &[Move] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// compression of whitespace-separated move names
impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        text.split_whitespace()
            .filter_map(|token| Move::try_from(token).ok())
            .collect()
    }
}

impl FromIterator<Move> for Sequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|m| write!(f, "{}", m.code()))
    }
}

impl Arbitrary for Sequence {
    fn random() -> Self {
        (0..crate::roll(8)).map(|_| Move::random()).collect()
    }
}

/// Compress move names into their code string: `"rock paper"` becomes `"rp"`.
pub fn compress(text: &str) -> String {
    Sequence::from(text).to_string()
}

/// Last `n` characters of `codes`, or all of it if shorter. Never pads.
pub fn suffix(codes: &str, n: usize) -> &str {
    let skip = codes.chars().count().saturating_sub(n);
    codes
        .char_indices()
        .nth(skip)
        .map_or("", |(i, _)| &codes[i..])
}
