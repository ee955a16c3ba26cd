pub mod config;
pub mod error;
pub mod itinerary;
pub mod llm;
pub mod server;

pub use error::{Error, Result};
