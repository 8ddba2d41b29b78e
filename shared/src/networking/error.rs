use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed frame: JSON part of {json_length} bytes in a message of {message_length} bytes")]
    Frame {
        message_length: u32,
        json_length: u32,
    },
}

impl NetworkingError {
    /// The peer closed the connection at a frame boundary.
    pub fn is_disconnect(&self) -> bool {
        match self {
            NetworkingError::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::UnexpectedEof
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::BrokenPipe
            ),
            _ => false,
        }
    }
}
