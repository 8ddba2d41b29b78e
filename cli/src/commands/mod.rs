use clap::Subcommand;

use self::{render::RenderCommand, server::ServerCommand, worker::WorkerCommand};

pub mod grid;
pub mod render;
pub mod server;
pub mod worker;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 🎨 Render
    ///
    /// Compute the image with a pool of in-process workers and write it.
    Render(RenderCommand),

    /// 🚀 Start Server
    ///
    /// Wait for remote workers, hand them blocks and write the image.
    Server(ServerCommand),

    /// 👷 Worker Mode
    ///
    /// Connect to a server and compute the blocks it assigns.
    Worker(WorkerCommand),
}
