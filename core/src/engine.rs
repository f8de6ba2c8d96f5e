use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of one game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    /// No game started yet.
    Ready,
    /// Countdown running, a grid is on screen awaiting a pick.
    Active,
    /// Clock hit zero; only a restart leaves this state.
    Ended,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Ended)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

/// One immutable game snapshot.
///
/// Replaced wholesale on every transition, never mutated in place; the
/// presentation layer only ever reads copies.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    score: u32,
    level: Level,
    time_left: Seconds,
    layout: RoundLayout,
    state: EngineState,
}

impl RoundState {
    pub const fn score(&self) -> u32 {
        self.score
    }

    pub const fn level(&self) -> Level {
        self.level
    }

    pub const fn time_left(&self) -> Seconds {
        self.time_left
    }

    pub const fn layout(&self) -> RoundLayout {
        self.layout
    }

    pub const fn state(&self) -> EngineState {
        self.state
    }

    pub const fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub const fn grid_side(&self) -> u8 {
        self.layout.grid_side()
    }

    pub const fn total_cells(&self) -> CellCount {
        self.layout.total_cells()
    }
}

/// Owns the game state and the sole right to change it.
///
/// Every operation builds a fresh [`RoundState`] from the previous one plus
/// an event; the countdown schedule that drives [`tick`](Self::tick) lives
/// with the caller.
#[derive(Clone, Debug)]
pub struct RoundEngine<G> {
    config: GameConfig,
    generator: G,
    current: RoundState,
}

impl<G: RoundGenerator> RoundEngine<G> {
    /// Builds an engine in the ready state with a previewable level-1 grid.
    pub fn new(config: GameConfig, mut generator: G) -> Self {
        let layout = generator.generate(1);
        let current = RoundState {
            score: 0,
            level: 1,
            time_left: config.starting_time,
            layout,
            state: EngineState::Ready,
        };
        Self {
            config,
            generator,
            current,
        }
    }

    pub fn snapshot(&self) -> RoundState {
        self.current
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Resets and begins a new game from any state.
    pub fn start(&mut self) -> RoundState {
        let layout = self.generator.generate(1);
        self.current = RoundState {
            score: 0,
            level: 1,
            time_left: self.config.starting_time,
            layout,
            state: EngineState::Active,
        };
        log::debug!(
            "game started, {} seconds on the clock",
            self.config.starting_time
        );
        self.current
    }

    /// Applies a player's swatch selection.
    ///
    /// Outside the active state this is a no-op. An index outside the grid
    /// can never match the odd swatch and counts as a miss.
    pub fn pick(&mut self, index: CellIndex) -> PickOutcome {
        let prev = self.current;
        if !prev.state.is_active() {
            return PickOutcome::NoChange;
        }

        if prev.layout.is_target(index) {
            let level = prev.level + 1;
            let layout = self.generator.generate(level);
            self.current = RoundState {
                score: prev.score + 1,
                level,
                time_left: (prev.time_left + self.config.correct_bonus).min(self.config.max_time),
                layout,
                state: EngineState::Active,
            };
            PickOutcome::Hit
        } else {
            let time_left = prev.time_left.saturating_sub(self.config.wrong_penalty);
            if time_left == 0 {
                self.current = RoundState {
                    time_left,
                    state: EngineState::Ended,
                    ..prev
                };
                log::debug!("clock drained by a miss, final score {}", prev.score);
                PickOutcome::TimeUp
            } else {
                self.current = RoundState { time_left, ..prev };
                PickOutcome::Miss
            }
        }
    }

    /// Applies one countdown second.
    ///
    /// A `TimeUp` return tells the caller to stop scheduling further ticks.
    pub fn tick(&mut self) -> TickOutcome {
        let prev = self.current;
        if !prev.state.is_active() {
            return TickOutcome::NoChange;
        }

        let time_left = prev.time_left.saturating_sub(1);
        if time_left == 0 {
            self.current = RoundState {
                time_left,
                state: EngineState::Ended,
                ..prev
            };
            log::debug!("time up, final score {}", prev.score);
            TickOutcome::TimeUp
        } else {
            self.current = RoundState { time_left, ..prev };
            TickOutcome::Ticked
        }
    }
}
