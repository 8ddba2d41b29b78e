use serde::{Deserialize, Serialize};

/// Where the coordinator listens for remote workers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

impl Server {
    pub fn new(address: String, port: u16) -> Self {
        Self { address, port }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}
