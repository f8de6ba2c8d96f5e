#![no_std]

use serde::{Deserialize, Serialize};

pub use color::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod color;
mod engine;
mod error;
mod generator;
mod types;

/// Countdown tuning: starting budget, cap, and the per-pick adjustments.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub starting_time: Seconds,
    pub max_time: Seconds,
    pub correct_bonus: Seconds,
    pub wrong_penalty: Seconds,
}

impl GameConfig {
    pub const fn new_unchecked(
        starting_time: Seconds,
        max_time: Seconds,
        correct_bonus: Seconds,
        wrong_penalty: Seconds,
    ) -> Self {
        Self {
            starting_time,
            max_time,
            correct_bonus,
            wrong_penalty,
        }
    }

    pub fn new(
        starting_time: Seconds,
        max_time: Seconds,
        correct_bonus: Seconds,
        wrong_penalty: Seconds,
    ) -> Self {
        let max_time = max_time.max(1);
        let starting_time = starting_time.clamp(1, max_time);
        Self::new_unchecked(starting_time, max_time, correct_bonus, wrong_penalty)
    }

    /// Thirty seconds on the clock, +2 per hit, -3 per miss.
    pub const fn standard() -> Self {
        Self::new_unchecked(30, 30, 2, 3)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Full parameters of one round: the grid and the one odd swatch in it.
///
/// Every cell shows the base color except `target_index`, which shows the
/// target color.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundLayout {
    grid_side: u8,
    base_color: Hsl,
    target_color: Hsl,
    target_index: CellIndex,
}

impl RoundLayout {
    pub fn from_parts(
        grid_side: u8,
        base_color: Hsl,
        target_color: Hsl,
        target_index: CellIndex,
    ) -> Result<Self> {
        if grid_side < GRID_SIDE_MIN || grid_side > GRID_SIDE_MAX {
            return Err(GameError::InvalidGridSide);
        }
        if target_index >= square(grid_side) {
            return Err(GameError::InvalidTargetIndex);
        }
        if target_color == base_color {
            return Err(GameError::MatchingColors);
        }
        Ok(Self {
            grid_side,
            base_color,
            target_color,
            target_index,
        })
    }

    pub const fn grid_side(&self) -> u8 {
        self.grid_side
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.grid_side)
    }

    pub const fn base_color(&self) -> Hsl {
        self.base_color
    }

    pub const fn target_color(&self) -> Hsl {
        self.target_color
    }

    pub const fn target_index(&self) -> CellIndex {
        self.target_index
    }

    pub const fn is_target(&self, index: CellIndex) -> bool {
        index == self.target_index
    }

    /// Color shown at a cell; anything outside the grid reads as the base.
    pub const fn color_at(&self, index: CellIndex) -> Hsl {
        if self.is_target(index) {
            self.target_color
        } else {
            self.base_color
        }
    }
}

/// Outcome of a swatch pick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PickOutcome {
    NoChange,
    Hit,
    Miss,
    TimeUp,
}

impl PickOutcome {
    pub const fn has_update(self) -> bool {
        use PickOutcome::*;
        match self {
            NoChange => false,
            Hit => true,
            Miss => true,
            TimeUp => true,
        }
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::TimeUp)
    }
}

/// Outcome of one countdown second.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    NoChange,
    Ticked,
    TimeUp,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            NoChange => false,
            Ticked => true,
            TimeUp => true,
        }
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::TimeUp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_constructor_keeps_the_clock_sane() {
        let config = GameConfig::new(90, 45, 2, 3);
        assert_eq!(config.starting_time, 45);
        assert_eq!(GameConfig::new(10, 0, 2, 3).max_time, 1);
        assert_eq!(GameConfig::default(), GameConfig::standard());
    }

    #[test]
    fn layout_rejects_out_of_range_parts() {
        let base = Hsl::new(120, 50, 50);
        let target = base.shifted(Channel::Lightness, -5);

        assert_eq!(
            RoundLayout::from_parts(1, base, target, 0),
            Err(GameError::InvalidGridSide)
        );
        assert_eq!(
            RoundLayout::from_parts(9, base, target, 0),
            Err(GameError::InvalidGridSide)
        );
        assert_eq!(
            RoundLayout::from_parts(2, base, target, 4),
            Err(GameError::InvalidTargetIndex)
        );
        assert_eq!(
            RoundLayout::from_parts(2, base, base, 0),
            Err(GameError::MatchingColors)
        );
    }

    #[test]
    fn exactly_one_cell_shows_the_target_color() {
        let base = Hsl::new(30, 70, 50);
        let target = base.shifted(Channel::Saturation, 8);
        let layout = RoundLayout::from_parts(3, base, target, 5).unwrap();

        for index in 0..layout.total_cells() {
            if index == 5 {
                assert!(layout.is_target(index));
                assert_eq!(layout.color_at(index), target);
            } else {
                assert!(!layout.is_target(index));
                assert_eq!(layout.color_at(index), base);
            }
        }
        // out of range never matches the odd swatch
        assert!(!layout.is_target(100));
        assert_eq!(layout.color_at(100), base);
    }

    #[test]
    fn outcomes_report_updates_and_game_end() {
        assert!(!PickOutcome::NoChange.has_update());
        assert!(PickOutcome::Miss.has_update());
        assert!(PickOutcome::TimeUp.ends_game());
        assert!(!PickOutcome::Hit.ends_game());
        assert!(!TickOutcome::NoChange.has_update());
        assert!(TickOutcome::TimeUp.ends_game());
        assert!(!TickOutcome::Ticked.ends_game());
    }
}
