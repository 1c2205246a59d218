use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use serde_with;

pub mod availability;
pub mod lead;
pub mod location;
pub mod program;

/// Provides a filled-in example of a record, used by the `/schema` routes
/// to render sample payloads.
pub trait ExampleData {
    fn example_data() -> Self;
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WithDistance<T> {
    pub distance_mi: f64,
    #[serde(flatten)]
    pub content: T,
}

impl<T> WithDistance<T> {
    pub fn new(distance_mi: f64, content: T) -> Self {
        Self {
            distance_mi,
            content,
        }
    }
}
