use super::types::{ErrorResponse, GENERATION_FAILED};
use crate::{
    Error,
    itinerary::{self, ItineraryRequest, ItineraryResponse},
    llm::LlmClient,
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

pub async fn generate_itinerary(
    State(state): State<AppState>,
    payload: Result<Json<ItineraryRequest>, JsonRejection>,
) -> Result<Json<ItineraryResponse>, HandlerError> {
    let Json(request) = payload.map_err(|rejection| {
        let err = Error::validation(rejection.body_text());
        warn!("Rejected itinerary request: {}", err);
        bad_request(err)
    })?;

    itinerary::validate(&request).map_err(|err| {
        warn!("Rejected itinerary request for '{}': {}", request.destination, err);
        bad_request(err)
    })?;

    info!(
        "Received itinerary request: {} days in {}",
        request.days, request.destination
    );

    let prompt = itinerary::build_prompt(&request);

    match state.llm.generate(&prompt).await {
        Ok(plan) => {
            info!("Generated itinerary for {}", request.destination);
            Ok(Json(ItineraryResponse::new(request, plan)))
        }
        Err(e) => {
            error!(
                "Failed to generate itinerary for {}: {}",
                request.destination, e
            );
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(GENERATION_FAILED)),
            ))
        }
    }
}

fn bad_request(err: Error) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(err.to_string())),
    )
}
