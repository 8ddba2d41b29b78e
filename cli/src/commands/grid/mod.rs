use clap::{Args, ValueEnum};
use shared::{graphics::color::ColorPalette, models::grid::Grid};

/// Positional grid parameters, in the order
/// `width height xmin ymin xmax ymax max_iter block_height`.
#[derive(Args, Debug, Clone, Copy)]
pub struct GridArgs {
    /// 📏 Image width in pixels
    #[arg(default_value_t = 800)]
    pub width: u32,

    /// 📐 Image height in pixels
    #[arg(default_value_t = 800)]
    pub height: u32,

    /// Lower real bound of the domain
    #[arg(default_value_t = -2.0, allow_negative_numbers = true)]
    pub xmin: f64,

    /// Lower imaginary bound of the domain
    #[arg(default_value_t = -2.0, allow_negative_numbers = true)]
    pub ymin: f64,

    /// Upper real bound of the domain
    #[arg(default_value_t = 2.0, allow_negative_numbers = true)]
    pub xmax: f64,

    /// Upper imaginary bound of the domain
    #[arg(default_value_t = 2.0, allow_negative_numbers = true)]
    pub ymax: f64,

    /// 🔁 Maximum number of iterations per pixel
    #[arg(default_value_t = 10_000)]
    pub max_iteration: u32,

    /// 🧱 Rows per block, must divide the height
    #[arg(default_value_t = 8)]
    pub block_height: u32,
}

impl From<GridArgs> for Grid {
    fn from(args: GridArgs) -> Self {
        Grid {
            width: args.width,
            height: args.height,
            xmin: args.xmin,
            ymin: args.ymin,
            xmax: args.xmax,
            ymax: args.ymax,
            max_iteration: args.max_iteration,
            block_height: args.block_height,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum PaletteArg {
    /// Cosine waves over the three channels
    #[default]
    Cos,
    /// Linear and modular ramps
    Original,
}

impl From<PaletteArg> for ColorPalette {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Cos => ColorPalette::Cosine,
            PaletteArg::Original => ColorPalette::Original,
        }
    }
}
