use crate::game::Move;

/// Frequency of each move across a set of rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally([usize; 3]);

impl Tally {
    pub fn witness(&mut self, m: Move) {
        self.0[m.index()] += 1;
    }
    pub fn count(&self, m: Move) -> usize {
        self.0[m.index()]
    }
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
    /// Most frequent move, `None` if nothing was witnessed.
    ///
    /// Ties go to the earliest move in [`Move::ALL`]
    /// (Rock, then Paper, then Scissors), independent of input order.
    pub fn mode(&self) -> Option<Move> {
        Move::ALL
            .into_iter()
            .filter(|m| self.count(*m) > 0)
            .fold(None, |best, m| match best {
                Some(b) if self.count(b) >= self.count(m) => Some(b),
                _ => Some(m),
            })
    }
}

impl FromIterator<Move> for Tally {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut tally = Self::default();
        iter.into_iter().for_each(|m| tally.witness(m));
        tally
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "r:{} p:{} s:{} of {}",
            self.count(Move::Rock),
            self.count(Move::Paper),
            self.count(Move::Scissors),
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(r: usize, p: usize, s: usize) -> Tally {
        std::iter::repeat_n(Move::Rock, r)
            .chain(std::iter::repeat_n(Move::Paper, p))
            .chain(std::iter::repeat_n(Move::Scissors, s))
            .collect()
    }

    #[test]
    fn empty_has_no_mode() {
        assert_eq!(Tally::default().mode(), None);
        assert_eq!(Tally::default().total(), 0);
    }

    #[test]
    fn strict_majority_wins() {
        assert_eq!(tally(3, 5, 1).mode(), Some(Move::Paper));
        assert_eq!(tally(0, 0, 1).mode(), Some(Move::Scissors));
        assert_eq!(tally(3, 5, 1).total(), 9);
    }

    #[test]
    fn renders_counts_and_total() {
        assert_eq!(tally(3, 5, 1).to_string(), "r:3 p:5 s:1 of 9");
    }

    #[test]
    fn ties_follow_move_order() {
        assert_eq!(tally(2, 2, 0).mode(), Some(Move::Rock));
        assert_eq!(tally(0, 4, 4).mode(), Some(Move::Paper));
        assert_eq!(tally(1, 1, 1).mode(), Some(Move::Rock));
    }

    #[test]
    fn input_order_is_irrelevant() {
        let forward = [Move::Paper, Move::Rock, Move::Rock, Move::Paper];
        let reverse = forward.iter().rev().copied();
        assert_eq!(
            forward.into_iter().collect::<Tally>(),
            reverse.collect::<Tally>()
        );
    }
}
