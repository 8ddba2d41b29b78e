use std::f64::consts::PI;

/// Color schemes mapping an escape-time index to RGB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorPalette {
    /// Three cosine waves of frequency 13, 5 and 7 (blue shifted by 10).
    #[default]
    Cosine,
    /// Linear and modular ramps: `i/2`, `i mod 190`, `2·(i mod 120)`.
    Original,
}

impl ColorPalette {
    pub fn calculate_color(&self, index: u8) -> (u8, u8, u8) {
        match self {
            ColorPalette::Cosine => self.cosine_palette(index),
            ColorPalette::Original => self.original_palette(index),
        }
    }

    pub fn cosine_palette(&self, index: u8) -> (u8, u8, u8) {
        let i = u32::from(index);
        (
            cos_component(i, 13.0),
            cos_component(i, 5.0),
            cos_component(i + 10, 7.0),
        )
    }

    pub fn original_palette(&self, index: u8) -> (u8, u8, u8) {
        let i = u32::from(index);
        ((i / 2) as u8, (i % 190) as u8, ((i % 120) * 2) as u8)
    }
}

/// `round(128 * (cos(2π·freq·i/255) + 1))`. The peak value 256 saturates to
/// 255.
fn cos_component(i: u32, freq: f64) -> u8 {
    let phase = f64::from(i) / 255.0 * 2.0 * PI * freq;
    (128.0 * (phase.cos() + 1.0)).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_peaks_saturate() {
        // cos(0) = 1 gives 256, which does not fit in a byte.
        let (red, green, _) = ColorPalette::Cosine.calculate_color(0);
        assert_eq!(red, 255);
        assert_eq!(green, 255);
    }

    #[test]
    fn cosine_channels_follow_their_formula() {
        for index in [1u8, 17, 128, 200, 255] {
            let i = f64::from(index);
            let expected = |k: f64, freq: f64| {
                (128.0 * ((k / 255.0 * 2.0 * PI * freq).cos() + 1.0))
                    .round()
                    .min(255.0) as u8
            };
            assert_eq!(
                ColorPalette::Cosine.calculate_color(index),
                (expected(i, 13.0), expected(i, 5.0), expected(i + 10.0, 7.0))
            );
        }
    }

    #[test]
    fn original_ramps() {
        assert_eq!(ColorPalette::Original.calculate_color(0), (0, 0, 0));
        assert_eq!(ColorPalette::Original.calculate_color(200), (100, 10, 160));
        assert_eq!(ColorPalette::Original.calculate_color(255), (127, 65, 30));
    }

    #[test]
    fn cosine_is_the_default() {
        assert_eq!(ColorPalette::default(), ColorPalette::Cosine);
    }
}
