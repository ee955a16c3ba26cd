use super::types::ItineraryRequest;
use crate::{Error, Result};

/// Rejects requests that would produce a meaningless prompt.
pub fn validate(request: &ItineraryRequest) -> Result<()> {
    if request.destination.trim().is_empty() {
        return Err(Error::validation("destination must not be empty"));
    }

    if request.days == 0 {
        return Err(Error::validation("days must be a positive integer"));
    }

    Ok(())
}

pub fn build_prompt(request: &ItineraryRequest) -> String {
    format!(
        "Create a detailed {}-day itinerary for {} based on these preferences: {}",
        request.days,
        request.destination,
        request.preferences.join(", ")
    )
}
