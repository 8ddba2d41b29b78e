pub mod error;

use log::{debug, error, info};
use shared::{
    models::{
        block::Block,
        fractal::mandelbrot::Mandelbrot,
        fragments::{
            assignment::Assignment,
            block_result::BlockResult,
            envelope::{Envelope, WorkerId},
        },
        grid::Grid,
    },
    networking::{read_fragment, send_fragment, worker::Worker},
};
use tokio::{
    io::AsyncWriteExt,
    net::TcpStream,
    sync::mpsc::{Receiver, Sender},
};

use self::error::{WorkerError, WorkerResult};

/// Runs the escape-time kernel over every pixel of `block`, row-major.
pub fn compute_block(grid: &Grid, block: Block) -> WorkerResult<Vec<u8>> {
    let bytes = grid.block_len();
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(bytes)
        .map_err(|_| WorkerError::Allocation { bytes })?;

    let mandelbrot = Mandelbrot::new(grid.max_iteration);
    for row in block.rows() {
        for column in 0..grid.width {
            pixels.push(mandelbrot.color(grid.point(column, row)));
        }
    }
    Ok(pixels)
}

/// Computes the block on the blocking pool so the runtime keeps serving
/// other workers and the coordinator meanwhile.
async fn perform_task(grid: Grid, index: u32) -> WorkerResult<BlockResult> {
    let block = grid.block(index)?;
    let pixels = tokio::task::spawn_blocking(move || compute_block(&grid, block)).await??;
    debug!("Block {} computed ({} bytes)", index, pixels.len());
    Ok(BlockResult::new(index, pixels))
}

/// Worker loop over in-process channels.
///
/// Returns the number of blocks computed once the stop sentinel arrives. A
/// closed channel is not a stop signal and fails with
/// [`WorkerError::CoordinatorGone`].
pub async fn run_local_worker(
    id: WorkerId,
    grid: Grid,
    mut assignments: Receiver<Assignment>,
    results: Sender<Envelope>,
) -> WorkerResult<usize> {
    let grid = grid.validated()?;
    let mut computed = 0;

    loop {
        let index = match assignments.recv().await {
            Some(Assignment::Block(index)) => index,
            Some(Assignment::Stop) => {
                debug!("Worker {} stopping after {} blocks", id, computed);
                return Ok(computed);
            }
            None => return Err(WorkerError::CoordinatorGone),
        };

        let result = perform_task(grid, index).await?;
        results
            .send(Envelope::new(id, result))
            .await
            .map_err(|_| WorkerError::CoordinatorGone)?;
        computed += 1;
    }
}

/// Worker loop over a TCP connection to a coordinator started with
/// `mandel server`. The grid must be the one the coordinator was given.
pub async fn run_worker(worker: &Worker, grid: Grid) -> WorkerResult<usize> {
    let grid = grid.validated()?;
    let mut stream = connect_to_server(&worker.server_addr()).await?;
    info!("Worker {} connected to {}", worker.name, worker.server_addr());
    debug!("Grid: {}", grid);

    let mut computed = 0;
    loop {
        let (_, assignment) = match read_fragment::<_, Assignment>(&mut stream).await {
            Ok(message) => message,
            Err(e) if e.is_disconnect() => return Err(WorkerError::CoordinatorGone),
            Err(e) => {
                error!("Failed to read assignment: {}", e);
                return Err(e.into());
            }
        };

        match assignment {
            Assignment::Stop => {
                info!("Worker {} done, {} blocks computed", worker.name, computed);
                // The coordinator may already have closed its side.
                let _ = stream.shutdown().await;
                return Ok(computed);
            }
            Assignment::Block(index) => {
                let result = perform_task(grid, index).await?;
                send_fragment(&mut stream, &result, Some(result.pixels.as_slice())).await?;
                computed += 1;
            }
        }
    }
}

async fn connect_to_server(addr: &str) -> WorkerResult<TcpStream> {
    match TcpStream::connect(addr).await {
        Ok(stream) => Ok(stream),
        Err(e) => {
            error!("Failed to connect to server: {}", e);
            Err(WorkerError::Networking(e.into()))
        }
    }
}
