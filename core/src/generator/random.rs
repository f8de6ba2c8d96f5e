use core::ops::Range;

use super::*;

/// Base-color sampling windows, chosen for visible, non-extreme swatches.
const BASE_HUE: Range<Degrees> = 0..HUE_TURN;
const BASE_SATURATION: Range<Percent> = 40..80;
const BASE_LIGHTNESS: Range<Percent> = 40..60;

/// Hue moves twice as far as the other channels; its visual range is much
/// wider, so an equal step would be harder to spot.
const HUE_WEIGHT: i16 = 2;

/// Purely random round source, seeded once and advanced per round.
#[derive(Clone, Debug)]
pub struct RandomRoundGenerator {
    rng: rand::rngs::SmallRng,
}

impl RandomRoundGenerator {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            rng: rand::rngs::SmallRng::seed_from_u64(seed),
        }
    }

    fn base_color(&mut self) -> Hsl {
        use rand::Rng;
        Hsl::new(
            self.rng.random_range(BASE_HUE),
            self.rng.random_range(BASE_SATURATION),
            self.rng.random_range(BASE_LIGHTNESS),
        )
    }
}

impl RoundGenerator for RandomRoundGenerator {
    fn generate(&mut self, level: Level) -> RoundLayout {
        use rand::Rng;

        let grid_side = grid_side_for(level);
        let base_color = self.base_color();

        let channel = Channel::ALL[self.rng.random_range(0..Channel::ALL.len())];
        let sign: i16 = if self.rng.random_bool(0.5) { 1 } else { -1 };
        let magnitude = shift_magnitude_for(level) as i16;
        let amount = match channel {
            Channel::Hue => HUE_WEIGHT * magnitude * sign,
            Channel::Saturation | Channel::Lightness => magnitude * sign,
        };
        let target_color = base_color.shifted(channel, amount);

        // double check the odd swatch stayed distinguishable
        if target_color == base_color {
            log::warn!(
                "Generated an identical target at level {}, channel {:?}",
                level,
                channel
            );
        }

        let target_index = self.rng.random_range(0..square(grid_side));
        log::debug!(
            "level {}: {}x{} grid, {:?} moved by {}",
            level,
            grid_side,
            grid_side,
            channel,
            amount
        );

        RoundLayout {
            grid_side,
            base_color,
            target_color,
            target_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_parameters_stay_in_range() {
        let mut generator = RandomRoundGenerator::from_seed(1234);
        for level in 1..=40 {
            let layout = generator.generate(level);
            assert!(layout.grid_side() >= GRID_SIDE_MIN);
            assert!(layout.grid_side() <= GRID_SIDE_MAX);
            assert!(layout.target_index() < layout.total_cells());

            let base = layout.base_color();
            assert!(base.hue() < HUE_TURN);
            assert!(base.saturation() >= 40 && base.saturation() < 80);
            assert!(base.lightness() >= 40 && base.lightness() < 60);
        }
    }

    #[test]
    fn target_differs_in_exactly_one_channel_by_the_level_magnitude() {
        let mut generator = RandomRoundGenerator::from_seed(99);
        for level in 1..=60 {
            let layout = generator.generate(level);
            let base = layout.base_color();
            let target = layout.target_color();
            let magnitude = shift_magnitude_for(level) as i16;

            let hue_moved = base.hue() != target.hue();
            let saturation_moved = base.saturation() != target.saturation();
            let lightness_moved = base.lightness() != target.lightness();
            let moved_channels = [hue_moved, saturation_moved, lightness_moved]
                .iter()
                .filter(|&&moved| moved)
                .count();
            assert_eq!(moved_channels, 1);

            if hue_moved {
                let diff =
                    (target.hue() as i16 - base.hue() as i16).rem_euclid(HUE_TURN as i16);
                let expected = HUE_WEIGHT * magnitude;
                assert!(diff == expected || diff == HUE_TURN as i16 - expected);
            } else if saturation_moved {
                // base saturation sits far enough from the bounds that the
                // shift never clamps
                let diff = (target.saturation() as i16 - base.saturation() as i16).abs();
                assert_eq!(diff, magnitude);
            } else {
                let diff = (target.lightness() as i16 - base.lightness() as i16).abs();
                assert_eq!(diff, magnitude);
            }
        }
    }

    #[test]
    fn same_seed_replays_the_same_rounds() {
        let mut a = RandomRoundGenerator::from_seed(42);
        let mut b = RandomRoundGenerator::from_seed(42);
        for level in 1..=10 {
            assert_eq!(a.generate(level), b.generate(level));
        }
    }
}
