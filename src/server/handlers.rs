use super::types::ErrorResponse;
use crate::{
    Error,
    flows::{
        FlowDescriptor, FlowGateway, MedicalFaqInput, MedicalFaqOutput, SymptomAnalyzerInput,
        SymptomAnalyzerOutput, TestYourselfInput, TestYourselfOutput,
    },
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

/// Message returned for every failure that is not the caller's own input.
pub const GENERIC_FAILURE: &str = "Could not complete request";

type HandlerError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<FlowGateway>,
}

pub async fn medical_faq(
    State(state): State<AppState>,
    Json(request): Json<MedicalFaqInput>,
) -> Result<Json<MedicalFaqOutput>, HandlerError> {
    info!("Received medical FAQ request");

    state
        .gateway
        .answer_medical_question(request.question)
        .await
        .map(Json)
        .map_err(into_response_error)
}

pub async fn symptom_analyzer(
    State(state): State<AppState>,
    Json(request): Json<SymptomAnalyzerInput>,
) -> Result<Json<SymptomAnalyzerOutput>, HandlerError> {
    info!("Received symptom analysis request");

    state
        .gateway
        .analyze_symptoms(request.symptoms_description)
        .await
        .map(Json)
        .map_err(into_response_error)
}

pub async fn test_yourself(
    State(state): State<AppState>,
    Json(request): Json<TestYourselfInput>,
) -> Result<Json<TestYourselfOutput>, HandlerError> {
    info!("Received test-yourself request");

    state
        .gateway
        .test_yourself(request.symptoms)
        .await
        .map(Json)
        .map_err(into_response_error)
}

pub async fn list_flows() -> Json<Vec<FlowDescriptor>> {
    Json(FlowGateway::catalog())
}

fn into_response_error(e: Error) -> HandlerError {
    if e.is_validation() {
        info!("Rejected request: {}", e);
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string())));
    }

    error!("Flow failed ({:?}): {}", e.kind(), e);
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse::new(GENERIC_FAILURE)),
    )
}
