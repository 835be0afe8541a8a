use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Client-supplied city fields. Stored verbatim, whatever their JSON types.
pub type CityPayload = Map<String, Value>;

/// A stored city record.
///
/// `id` is assigned by the store and never taken from client input. Every
/// other field lives in `attributes` in the order the client sent it, and
/// is serialized flat next to `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: u64,
    #[serde(flatten)]
    pub attributes: CityPayload,
}

impl City {
    pub fn new(id: u64, mut attributes: CityPayload) -> Self {
        attributes.remove("id");
        Self { id, attributes }
    }

    /// Swap every field except `id` for the given payload.
    pub fn replace_attributes(&mut self, mut attributes: CityPayload) {
        attributes.remove("id");
        self.attributes = attributes;
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.get("name").and_then(Value::as_str)
    }
}
