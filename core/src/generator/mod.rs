use crate::*;
pub use random::*;

mod random;

/// Source of round parameters, called once per round entered.
///
/// Implementations own whatever randomness they need; tests substitute
/// scripted sources so every transition is deterministic.
pub trait RoundGenerator {
    fn generate(&mut self, level: Level) -> RoundLayout;
}
