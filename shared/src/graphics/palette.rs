use super::color::ColorPalette;

pub const PALETTE_SIZE: usize = 256;

/// The 256-entry lookup table written into a raster file, one array per
/// channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub red: [u8; PALETTE_SIZE],
    pub green: [u8; PALETTE_SIZE],
    pub blue: [u8; PALETTE_SIZE],
}

impl Palette {
    pub fn new(scheme: ColorPalette) -> Self {
        let mut palette = Self {
            red: [0; PALETTE_SIZE],
            green: [0; PALETTE_SIZE],
            blue: [0; PALETTE_SIZE],
        };
        for index in 0..=u8::MAX {
            let (r, g, b) = scheme.calculate_color(index);
            let i = usize::from(index);
            palette.red[i] = r;
            palette.green[i] = g;
            palette.blue[i] = b;
        }
        palette
    }

    pub fn rgb(&self, index: u8) -> (u8, u8, u8) {
        let i = usize::from(index);
        (self.red[i], self.green[i], self.blue[i])
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorPalette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_the_scheme() {
        for scheme in [ColorPalette::Cosine, ColorPalette::Original] {
            let palette = Palette::new(scheme);
            for index in 0..=u8::MAX {
                assert_eq!(palette.rgb(index), scheme.calculate_color(index));
            }
        }
    }
}
