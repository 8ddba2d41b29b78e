use std::path::PathBuf;

use clap::Parser;
use shared::raster::DEFAULT_OUTPUT;

use super::grid::{GridArgs, PaletteArg};

/// 🖥️ Server Command
///
/// This command is used to configure and 🚀 start the coordinator for remote
/// workers.
#[derive(Parser, Debug)]
#[command(name = "server", about = "🚀 Start the coordinator and wait for workers.", long_about = None)]
pub struct ServerCommand {
    #[command(flatten)]
    pub grid: GridArgs,

    /// 📌 Server IP address
    ///
    /// Specify the IP address 🌐 where the server will listen for workers.
    #[arg(short, long, env = "MANDEL_ADDRESS", value_name = "ADDRESS", default_value = "localhost")]
    pub address: String,

    /// 🚪 Server port
    ///
    /// Define the port number 🎛️ on which the server will listen.
    #[arg(short, long, env = "MANDEL_PORT", value_name = "PORT", default_value_t = 8787)]
    pub port: u16,

    /// 👷 Number of workers to wait for before handing out blocks
    #[arg(short, long, env = "MANDEL_WORKERS", value_name = "N", default_value_t = 1)]
    pub workers: usize,

    /// 💾 Output rasterfile
    #[arg(short, long, env = "MANDEL_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// 🌈 Color map written into the file
    #[arg(long, value_enum, env = "MANDEL_PALETTE", default_value_t = PaletteArg::Cos)]
    pub palette: PaletteArg,
}
