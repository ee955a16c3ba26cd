mod prompt;
mod types;

pub use prompt::{build_prompt, validate};
pub use types::{ItineraryRequest, ItineraryResponse};
