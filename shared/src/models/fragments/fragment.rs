/// A message that travels as the JSON part of a frame, wrapped in an object
/// keyed by the message kind, e.g. `{"Assignment": ...}`.
pub trait Fragment: Sized {
    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error>;
    fn from_json(fragment: &str) -> Result<Self, serde_json::Error>;
}
