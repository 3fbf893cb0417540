//! RGB color value

use btmatrix_hal::{RandomSource, Rgb};

/// Exclusive upper bound of the dominant channel in a random color
const DOMINANT_RANGE: u32 = 256;

/// Exclusive upper bound of the two minor channels in a random color
const MINOR_RANGE: u32 = 8;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Step every channel one unit toward `target`
    pub fn fade_to(&mut self, target: Color) {
        self.r = step_toward(self.r, target.r);
        self.g = step_toward(self.g, target.g);
        self.b = step_toward(self.b, target.b);
    }

    /// Number of [`Color::fade_to`] steps needed to reach `target`
    pub fn distance(&self, target: Color) -> u8 {
        self.r
            .abs_diff(target.r)
            .max(self.g.abs_diff(target.g))
            .max(self.b.abs_diff(target.b))
    }

    /// Random saturated color
    ///
    /// One channel, picked at random, spans the full range. The other two
    /// stay near zero.
    ///
    /// The dominant channel is drawn from `[0, 256)` and the two minor ones
    /// from `[0, 8)`, not the other way around.
    pub fn random<R: RandomSource>(rng: &mut R) -> Self {
        let dominant = rng.next_below(3);
        let mut channel = |index: u32| {
            let bound = if index == dominant {
                DOMINANT_RANGE
            } else {
                MINOR_RANGE
            };
            // bound <= 256 so the value always fits
            rng.next_below(bound) as u8
        };
        let r = channel(0);
        let g = channel(1);
        let b = channel(2);
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn step_toward(value: u8, target: u8) -> u8 {
    match value.cmp(&target) {
        core::cmp::Ordering::Less => value + 1,
        core::cmp::Ordering::Greater => value - 1,
        core::cmp::Ordering::Equal => value,
    }
}

impl From<Rgb> for Color {
    fn from((r, g, b): Rgb) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        (color.r, color.g, color.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}
