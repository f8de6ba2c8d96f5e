use serde::{Deserialize, Serialize};

/// Hue angle in integer degrees.
pub type Degrees = u16;

/// Saturation or lightness in integer percent.
pub type Percent = u8;

/// One full turn of the hue circle.
pub const HUE_TURN: Degrees = 360;

/// Upper bound for saturation and lightness.
pub const PERCENT_MAX: Percent = 100;

/// A single HSL channel a perturbation may touch.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Channel {
    Hue,
    Saturation,
    Lightness,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Hue, Channel::Saturation, Channel::Lightness];
}

/// The HSL color value every swatch is painted with.
///
/// Value type: two colors are always independent copies, never aliased.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    hue: Degrees,
    saturation: Percent,
    lightness: Percent,
}

impl Hsl {
    /// Creates a color, wrapping the hue into [0, 360) and clamping
    /// saturation and lightness into [0, 100].
    pub const fn new(hue: Degrees, saturation: Percent, lightness: Percent) -> Self {
        Self {
            hue: hue % HUE_TURN,
            saturation: clamp_percent(saturation as i16),
            lightness: clamp_percent(lightness as i16),
        }
    }

    pub const fn hue(self) -> Degrees {
        self.hue
    }

    pub const fn saturation(self) -> Percent {
        self.saturation
    }

    pub const fn lightness(self) -> Percent {
        self.lightness
    }

    /// Returns a copy with one channel moved by `amount`; the other two
    /// channels stay bit-identical. Hue wraps around the circle, saturation
    /// and lightness clamp at their bounds.
    pub const fn shifted(self, channel: Channel, amount: i16) -> Self {
        match channel {
            Channel::Hue => Self {
                hue: wrap_degrees(self.hue as i16 + amount),
                ..self
            },
            Channel::Saturation => Self {
                saturation: clamp_percent(self.saturation as i16 + amount),
                ..self
            },
            Channel::Lightness => Self {
                lightness: clamp_percent(self.lightness as i16 + amount),
                ..self
            },
        }
    }
}

const fn wrap_degrees(value: i16) -> Degrees {
    value.rem_euclid(HUE_TURN as i16) as Degrees
}

const fn clamp_percent(value: i16) -> Percent {
    if value < 0 {
        0
    } else if value > PERCENT_MAX as i16 {
        PERCENT_MAX
    } else {
        value as Percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_normalizes_out_of_range_components() {
        let color = Hsl::new(400, 150, 100);
        assert_eq!(color.hue(), 40);
        assert_eq!(color.saturation(), 100);
        assert_eq!(color.lightness(), 100);
        assert_eq!(Hsl::new(360, 0, 0).hue(), 0);
    }

    #[test]
    fn hue_wraps_in_both_directions() {
        let color = Hsl::new(350, 50, 50);
        assert_eq!(color.shifted(Channel::Hue, 30).hue(), 20);
        assert_eq!(Hsl::new(5, 50, 50).shifted(Channel::Hue, -10).hue(), 355);
    }

    #[test]
    fn saturation_and_lightness_clamp_at_the_bounds() {
        let color = Hsl::new(10, 95, 5);
        assert_eq!(color.shifted(Channel::Saturation, 10).saturation(), 100);
        assert_eq!(color.shifted(Channel::Lightness, -10).lightness(), 0);
    }

    #[test]
    fn untouched_channels_stay_bit_identical() {
        let color = Hsl::new(123, 45, 67);
        let shifted = color.shifted(Channel::Saturation, 9);
        assert_eq!(shifted.hue(), color.hue());
        assert_eq!(shifted.lightness(), color.lightness());
        assert_eq!(shifted.saturation(), 54);
    }
}
