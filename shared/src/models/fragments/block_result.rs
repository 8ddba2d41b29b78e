use serde::{Deserialize, Serialize};

use super::fragment::Fragment;

/// Worker to coordinator: the color indices of one block, row-major.
///
/// Only the index goes into the JSON part of a frame; the pixels travel as
/// the frame's binary data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockResult {
    pub block_index: u32,
    #[serde(skip)]
    pub pixels: Vec<u8>,
}

impl BlockResult {
    pub fn new(block_index: u32, pixels: Vec<u8>) -> Self {
        Self {
            block_index,
            pixels,
        }
    }

    /// Attaches the binary part of a frame to a header parsed from JSON.
    pub fn with_pixels(self, pixels: Vec<u8>) -> Self {
        Self { pixels, ..self }
    }
}

impl Fragment for BlockResult {
    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        let wrapped = serde_json::json!({ "BlockResult": self });
        serde_json::to_value(&wrapped)
    }

    fn from_json(fragment: &str) -> Result<Self, serde_json::Error> {
        let v: serde_json::Value = serde_json::from_str(fragment)?;
        serde_json::from_value(v["BlockResult"].clone())
    }
}
