use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument};

use super::{
    agent::{self, AgentEvent, AgentResponse},
    types::{CompareRequest, HealthResponse, PlayerRequest},
};
use crate::shared::{AppError, AppState};
use crate::{stats::PlayerAnalysis, summary::SeasonSummary, synergy::ComparisonReport};

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}

/// HTTP handler for analysing one player
///
/// POST /analysis
/// Returns the player's profile, or 404 with `{error}` when there is no data
#[instrument(name = "analyze_player", skip(state))]
pub async fn analyze_player(
    State(state): State<AppState>,
    Json(request): Json<PlayerRequest>,
) -> Result<(StatusCode, Json<PlayerAnalysis>), AppError> {
    let riot_id = request.into_riot_id()?;
    info!(player = %riot_id.store_key(), "Analysing player");

    let service = state.analysis_service();
    let analysis = service.analyze_player(&riot_id).await?;

    let status = match analysis {
        PlayerAnalysis::Profile(_) => StatusCode::OK,
        PlayerAnalysis::Failed { .. } => StatusCode::NOT_FOUND,
    };
    Ok((status, Json(analysis)))
}

/// HTTP handler for comparing two players
///
/// POST /compare
/// Returns the synergy report, or 404 with both statuses when either
/// analysis failed
#[instrument(name = "compare_players", skip(state))]
pub async fn compare_players(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<(StatusCode, Json<ComparisonReport>), AppError> {
    let first = request.player1.into_riot_id()?;
    let second = request.player2.into_riot_id()?;
    info!(
        player1 = %first.store_key(),
        player2 = %second.store_key(),
        "Comparing players"
    );

    let service = state.analysis_service();
    let report = service.compare_players(&first, &second).await?;

    let status = if report.is_complete() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    Ok((status, Json(report)))
}

/// POST /summary
#[instrument(name = "summarize_player", skip(state))]
pub async fn summarize_player(
    State(state): State<AppState>,
    Json(request): Json<PlayerRequest>,
) -> Result<Json<SeasonSummary>, AppError> {
    let riot_id = request.into_riot_id()?;
    info!(player = %riot_id.store_key(), "Summarising season");

    let service = state.analysis_service();
    Ok(Json(service.summarize_player(&riot_id).await?))
}

/// HTTP handler for agent action-group events
///
/// POST /agent
/// Always answers 200; the outcome's status lives inside the envelope
#[instrument(name = "agent_action", skip_all)]
pub async fn invoke_agent(
    State(state): State<AppState>,
    Json(event): Json<AgentEvent>,
) -> Json<AgentResponse> {
    let service = state.analysis_service();
    Json(agent::dispatch(&service, &event).await)
}
