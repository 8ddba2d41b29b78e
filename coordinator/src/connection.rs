use log::{debug, error};
use shared::{
    models::fragments::{
        assignment::Assignment,
        block_result::BlockResult,
        envelope::{Envelope, WorkerId},
    },
    networking::{read_fragment, send_fragment},
};
use tokio::{
    io::AsyncWriteExt,
    net::TcpStream,
    sync::mpsc::{Receiver, Sender},
};

/// Bridges one remote worker to the coordinator's channels: assignments go
/// out as frames, result frames come back tagged with the worker id.
///
/// Returns once the worker has been told to stop (or the coordinator gave
/// up) and the worker closed its side of the connection.
pub async fn handle_connection(
    worker: WorkerId,
    socket: TcpStream,
    mut assignments: Receiver<Assignment>,
    results: Sender<Envelope>,
) {
    let (mut reader, mut writer) = socket.into_split();

    let outbound = async move {
        while let Some(assignment) = assignments.recv().await {
            if let Err(e) = send_fragment(&mut writer, &assignment, None).await {
                error!("Failed to send {:?} to worker {}: {}", assignment, worker, e);
                break;
            }
            if assignment.is_stop() {
                break;
            }
        }
        let _ = writer.shutdown().await;
    };

    let inbound = async move {
        loop {
            match read_fragment::<_, BlockResult>(&mut reader).await {
                Ok((data, header)) => {
                    let envelope = Envelope::new(worker, header.with_pixels(data));
                    if results.send(envelope).await.is_err() {
                        break;
                    }
                }
                Err(e) if e.is_disconnect() => {
                    debug!("Worker {} disconnected", worker);
                    break;
                }
                Err(e) => {
                    error!("Failed to read result from worker {}: {}", worker, e);
                    break;
                }
            }
        }
    };

    tokio::join!(outbound, inbound);
}
