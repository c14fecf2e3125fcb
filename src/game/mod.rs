//! Rock-Paper-Scissors vocabulary: moves, compressed histories, rounds.
mod moves;
mod round;
mod sequence;
mod side;

pub use moves::*;
pub use round::*;
pub use sequence::*;
pub use side::*;
