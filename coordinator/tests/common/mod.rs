#![allow(dead_code)]

use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use shared::models::{
    fractal::mandelbrot::Mandelbrot,
    fragments::{
        assignment::Assignment,
        block_result::BlockResult,
        envelope::{Envelope, WorkerId},
    },
    grid::Grid,
};
use tokio::sync::mpsc::{Receiver, Sender};

pub fn grid(width: u32, height: u32, block_height: u32) -> Grid {
    Grid {
        width,
        height,
        xmin: -2.0,
        ymin: -1.5,
        xmax: 1.0,
        ymax: 1.5,
        max_iteration: 200,
        block_height,
    }
}

/// The image computed pixel by pixel, without any blocks or workers.
pub fn reference_image(grid: &Grid) -> Vec<u8> {
    let mandelbrot = Mandelbrot::new(grid.max_iteration);
    let mut image = Vec::with_capacity(grid.image_len());
    for row in 0..grid.height {
        for column in 0..grid.width {
            image.push(mandelbrot.color(grid.point(column, row)));
        }
    }
    image
}

/// A worker that sleeps a random while before answering each block, so
/// results come back out of order. Exits on the sentinel.
pub async fn jittery_worker(
    id: WorkerId,
    grid: Grid,
    mut assignments: Receiver<Assignment>,
    results: Sender<Envelope>,
    max_delay_ms: u64,
) -> u32 {
    let mut rng = StdRng::seed_from_u64(id as u64 + 1);
    let mut computed = 0;

    while let Some(Assignment::Block(index)) = assignments.recv().await {
        let delay = rng.gen_range(0..=max_delay_ms);
        tokio::time::sleep(Duration::from_millis(delay)).await;

        let block = grid.block(index).unwrap();
        let pixels = worker::compute_block(&grid, block).unwrap();
        let envelope = Envelope::new(id, BlockResult::new(index, pixels));
        if results.send(envelope).await.is_err() {
            break;
        }
        computed += 1;
    }
    computed
}
