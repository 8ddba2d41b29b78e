pub mod connection;
pub mod coordinator_state;
pub mod error;
pub mod metrics;

use log::{debug, error, info};
use shared::{
    models::{
        fragments::{
            assignment::Assignment,
            envelope::{Envelope, WorkerId},
        },
        grid::Grid,
    },
    networking::server::Server,
};
use tokio::{
    net::TcpListener,
    sync::mpsc::{self, Receiver, Sender},
};

use self::{
    coordinator_state::CoordinatorState,
    error::{CoordinatorError, CoordinatorResult},
    metrics::RunReport,
};

/// The assembled image and how the work was spread.
#[derive(Debug)]
pub struct Rendering {
    pub image: Vec<u8>,
    pub report: RunReport,
}

pub fn log_parameters(grid: &Grid, workers: usize) {
    info!(
        "Domain: {{[{},{}]x[{},{}]}}",
        grid.xmin, grid.ymin, grid.xmax, grid.ymax
    );
    info!("Increment: {} {}", grid.xinc(), grid.yinc());
    info!("Max iteration: {}", grid.max_iteration);
    info!("Image: {}x{}", grid.width, grid.height);
    info!(
        "Blocks: {} of {} rows, {} workers",
        grid.n_blocks(),
        grid.block_height,
        workers
    );
}

/// Runs the dynamic scheduler until every block is back.
///
/// `links[w]` carries assignments to worker `w`; every worker answers on the
/// shared `results` channel. Each worker is primed with one block (or the
/// sentinel when there are fewer blocks than workers), then each incoming
/// result is answered with the next unassigned block or the sentinel.
pub async fn run_coordinator(
    grid: Grid,
    links: Vec<Sender<Assignment>>,
    mut results: Receiver<Envelope>,
) -> CoordinatorResult<Rendering> {
    let grid = grid.validated()?;
    if links.is_empty() {
        return Err(CoordinatorError::NoWorkers);
    }

    let mut state = CoordinatorState::new(grid)?;
    let mut report = RunReport::new(links.len());

    for (worker, link) in links.iter().enumerate() {
        let assignment = state.next_assignment();
        dispatch(worker, link, assignment, &mut report).await?;
    }

    while !state.is_complete() {
        let envelope = match results.recv().await {
            Some(envelope) => envelope,
            None => {
                return Err(CoordinatorError::WorkersDisconnected {
                    missing: state.missing(),
                })
            }
        };

        let worker = envelope.worker;
        let link = links
            .get(worker)
            .ok_or(CoordinatorError::UnknownWorker { worker })?;

        debug!(
            "Block {} received from worker {}",
            envelope.result.block_index, worker
        );
        state.accept(envelope)?;
        report.record_result(worker);

        let assignment = state.next_assignment();
        dispatch(worker, link, assignment, &mut report).await?;
    }

    Ok(Rendering {
        image: state.into_image(),
        report,
    })
}

async fn dispatch(
    worker: WorkerId,
    link: &Sender<Assignment>,
    assignment: Assignment,
    report: &mut RunReport,
) -> CoordinatorResult<()> {
    link.send(assignment)
        .await
        .map_err(|_| CoordinatorError::WorkerGone { worker })?;
    debug!("{:?} sent to worker {}", assignment, worker);
    report.record_assignment(assignment);
    Ok(())
}

/// Renders with `workers` in-process workers talking over channels.
pub async fn render_local(grid: Grid, workers: usize) -> CoordinatorResult<Rendering> {
    let grid = grid.validated()?;
    if workers == 0 {
        return Err(CoordinatorError::NoWorkers);
    }

    let (results_tx, results_rx) = mpsc::channel(workers);
    let mut links = Vec::with_capacity(workers);
    let mut handles = Vec::with_capacity(workers);

    for id in 0..workers {
        let (assign_tx, assign_rx) = mpsc::channel(1);
        links.push(assign_tx);
        handles.push(tokio::spawn(worker::run_local_worker(
            id,
            grid,
            assign_rx,
            results_tx.clone(),
        )));
    }
    drop(results_tx);

    // Dropping the links when the coordinator returns releases any worker
    // still waiting for an assignment.
    let outcome = run_coordinator(grid, links, results_rx).await;

    for (id, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(Ok(blocks)) => debug!("Worker {} finished after {} blocks", id, blocks),
            Ok(Err(e)) => error!("Worker {} failed: {}", id, e),
            Err(e) => error!("Worker {} did not finish: {}", id, e),
        }
    }

    outcome
}

pub async fn bind(server: &Server) -> CoordinatorResult<TcpListener> {
    let listener = TcpListener::bind(server.addr())
        .await
        .map_err(|e| CoordinatorError::Networking(e.into()))?;
    Ok(listener)
}

/// Waits for `workers` remote workers on `listener`, then renders with them.
pub async fn serve(
    listener: TcpListener,
    grid: Grid,
    workers: usize,
) -> CoordinatorResult<Rendering> {
    let grid = grid.validated()?;
    if workers == 0 {
        return Err(CoordinatorError::NoWorkers);
    }

    let (results_tx, results_rx) = mpsc::channel(workers);
    let mut links = Vec::with_capacity(workers);
    let mut handles = Vec::with_capacity(workers);

    while links.len() < workers {
        let (socket, addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("Failed to accept connection: {}", e);
                continue;
            }
        };
        let id = links.len();
        info!("Worker {} connected from {} ({}/{})", id, addr, id + 1, workers);

        let (assign_tx, assign_rx) = mpsc::channel(1);
        links.push(assign_tx);
        handles.push(tokio::spawn(connection::handle_connection(
            id,
            socket,
            assign_rx,
            results_tx.clone(),
        )));
    }
    drop(results_tx);

    let outcome = run_coordinator(grid, links, results_rx).await;

    for handle in handles {
        if let Err(e) = handle.await {
            error!("Connection task did not finish: {}", e);
        }
    }

    outcome
}

pub async fn run_server(
    server: &Server,
    grid: Grid,
    workers: usize,
) -> CoordinatorResult<Rendering> {
    let grid = grid.validated()?;
    let listener = bind(server).await?;
    info!(
        "Server listening on {}, waiting for {} workers",
        server.addr(),
        workers
    );
    serve(listener, grid, workers).await
}
