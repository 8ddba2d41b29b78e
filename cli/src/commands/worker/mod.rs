use clap::Parser;

use super::grid::GridArgs;

/// 👷 Worker Command
///
/// The grid must match the one given to the server.
#[derive(Parser, Debug)]
pub struct WorkerCommand {
    #[command(flatten)]
    pub grid: GridArgs,

    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(short, long, env = "MANDEL_ADDRESS", default_value = "localhost")]
    pub address: String,

    #[arg(short, long, env = "MANDEL_PORT", default_value_t = 8787)]
    pub port: u16,
}
