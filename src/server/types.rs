use serde::{Deserialize, Serialize};

pub const GENERATION_FAILED: &str = "Failed to generate itinerary";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
