pub mod commands;

use std::{path::Path, process::ExitCode, time::Instant};

use clap::Parser;
use commands::{
    render::RenderCommand, server::ServerCommand, worker::WorkerCommand, Commands,
};
use coordinator::Rendering;
use log::{error, info};
use shared::{
    env,
    graphics::{color::ColorPalette, palette::Palette},
    logger,
    models::grid::Grid,
    networking::{server::Server, worker::Worker},
    raster::save_rasterfile,
};
use uuid::Uuid;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Mandelbrot set renderer with a pull-based pool of workers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> ExitCode {
    env::init();
    logger::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Render(args) => render(args).await,
        Commands::Server(args) => serve(args).await,
        Commands::Worker(args) => work(args).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn render(args: RenderCommand) -> CliResult {
    let start = Instant::now();
    let grid = Grid::from(args.grid).validated()?;
    let workers = match args.workers {
        Some(workers) => workers,
        None => std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1),
    };

    coordinator::log_parameters(&grid, workers);
    let rendering = coordinator::render_local(grid, workers).await?;
    finish(&grid, rendering, &args.output, args.palette.into(), start)
}

async fn serve(args: ServerCommand) -> CliResult {
    let start = Instant::now();
    let grid = Grid::from(args.grid).validated()?;
    let server = Server::new(args.address, args.port);

    coordinator::log_parameters(&grid, args.workers);
    let rendering = coordinator::run_server(&server, grid, args.workers).await?;
    finish(&grid, rendering, &args.output, args.palette.into(), start)
}

async fn work(args: WorkerCommand) -> CliResult {
    let grid = Grid::from(args.grid).validated()?;
    let name = match args.name {
        Some(name) => name,
        None => format!("worker-{}", Uuid::new_v4()),
    };

    let worker = Worker::new(name, args.address, args.port);
    info!("Worker launched: {}", worker.name);
    worker::run_worker(&worker, grid).await?;
    Ok(())
}

fn finish(
    grid: &Grid,
    rendering: Rendering,
    output: &Path,
    scheme: ColorPalette,
    start: Instant,
) -> CliResult {
    rendering.report.log_summary();

    let elapsed = start.elapsed().as_secs_f64();
    info!("Total computation time: {} sec", elapsed);
    println!("{}", elapsed);

    save_rasterfile(
        output,
        grid.width,
        grid.height,
        &rendering.image,
        &Palette::new(scheme),
    )?;
    info!("Image written to {}", output.display());
    Ok(())
}
