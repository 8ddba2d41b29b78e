use std::path::PathBuf;

use clap::Parser;
use shared::raster::DEFAULT_OUTPUT;

use super::grid::{GridArgs, PaletteArg};

/// 🎨 Render Command
///
/// Computes the image with in-process workers pulling blocks from a
/// coordinator, then writes it as a rasterfile.
#[derive(Parser, Debug)]
pub struct RenderCommand {
    #[command(flatten)]
    pub grid: GridArgs,

    /// 👷 Number of workers
    ///
    /// Defaults to the available parallelism of the host.
    #[arg(short, long, env = "MANDEL_WORKERS", value_name = "N")]
    pub workers: Option<usize>,

    /// 💾 Output rasterfile
    #[arg(short, long, env = "MANDEL_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// 🌈 Color map written into the file
    #[arg(long, value_enum, env = "MANDEL_PALETTE", default_value_t = PaletteArg::Cos)]
    pub palette: PaletteArg,
}
