use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryRequest {
    pub destination: String,
    pub days: u32,
    /// A request without preferences is treated the same as an empty list.
    #[serde(default)]
    pub preferences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryResponse {
    pub destination: String,
    pub days: u32,
    pub preferences: Vec<String>,
    pub plan: String,
}

impl ItineraryResponse {
    pub fn new(request: ItineraryRequest, plan: String) -> Self {
        Self {
            destination: request.destination,
            days: request.days,
            preferences: request.preferences,
            plan,
        }
    }
}
