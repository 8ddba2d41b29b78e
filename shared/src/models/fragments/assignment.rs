use serde::{Deserialize, Serialize};

use super::fragment::Fragment;

/// Coordinator to worker: compute a block, or stop for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assignment {
    Block(u32),
    Stop,
}

impl Assignment {
    pub fn is_stop(&self) -> bool {
        matches!(self, Assignment::Stop)
    }
}

impl Fragment for Assignment {
    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        let wrapped = serde_json::json!({ "Assignment": self });
        serde_json::to_value(&wrapped)
    }

    fn from_json(fragment: &str) -> Result<Self, serde_json::Error> {
        let v: serde_json::Value = serde_json::from_str(fragment)?;
        serde_json::from_value(v["Assignment"].clone())
    }
}
