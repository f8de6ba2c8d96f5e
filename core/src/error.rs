use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid side out of range")]
    InvalidGridSide,
    #[error("Target cell outside the grid")]
    InvalidTargetIndex,
    #[error("Target color does not differ from the base color")]
    MatchingColors,
}

pub type Result<T> = core::result::Result<T, GameError>;
