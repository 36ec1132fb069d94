use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap};
use tracing::{info, instrument, warn};

use super::{service::AnalysisService, types::riot_id_from_parts};
use crate::{
    riot::RiotId,
    shared::AppError,
    stats::PlayerAnalysis,
    synergy::ComparisonReport,
};

pub const STRENGTHS_WEAKNESSES: &str = "strengths-weaknesses-analysis";
pub const SOCIAL_COMPARISON: &str = "social-comparison-analysis";

const MESSAGE_VERSION: &str = "1.0";
const JSON_CONTENT: &str = "application/json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentParameter {
    pub name: String,
    pub value: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentContent {
    #[serde(default)]
    pub properties: Vec<AgentParameter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentRequestBody {
    #[serde(default)]
    pub content: HashMap<String, AgentContent>,
}

/// Action-group invocation as delivered by the agent runtime
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentEvent {
    #[serde(default)]
    pub action_group: String,
    #[serde(default)]
    pub api_path: Option<String>,
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub parameters: Vec<AgentParameter>,
    #[serde(default)]
    pub request_body: Option<AgentRequestBody>,
    #[serde(default)]
    pub session_attributes: Map<String, Value>,
    #[serde(default)]
    pub prompt_session_attributes: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentBody {
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentActionResponse {
    pub action_group: String,
    pub api_path: String,
    pub http_method: String,
    pub http_status_code: u16,
    pub response_body: HashMap<String, AgentBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub message_version: String,
    pub response: AgentActionResponse,
    pub session_attributes: Map<String, Value>,
    pub prompt_session_attributes: Map<String, Value>,
}

impl AgentResponse {
    /// Parsed JSON payload of the response body
    pub fn body_json(&self) -> Option<Value> {
        let body = self.response.response_body.get(JSON_CONTENT)?;
        serde_json::from_str(&body.body).ok()
    }
}

impl AgentEvent {
    /// Named parameters from both `parameters` and the JSON request body.
    /// Body properties win over query-style parameters of the same name.
    pub fn parameter_map(&self) -> BTreeMap<String, String> {
        let body_properties = self
            .request_body
            .iter()
            .filter_map(|body| body.content.get(JSON_CONTENT))
            .flat_map(|content| content.properties.iter());

        self.parameters
            .iter()
            .chain(body_properties)
            .map(|param| (param.name.clone(), parameter_text(&param.value)))
            .collect()
    }

    fn default_api_path(&self) -> &'static str {
        match self.action_group.as_str() {
            SOCIAL_COMPARISON => "/compare",
            _ => "/analyze-strengths-weaknesses",
        }
    }

    /// Wraps a status and JSON payload in the response envelope
    pub fn respond(&self, status: StatusCode, body: &Value) -> AgentResponse {
        let response_body = HashMap::from([(
            JSON_CONTENT.to_string(),
            AgentBody {
                body: body.to_string(),
            },
        )]);

        AgentResponse {
            message_version: MESSAGE_VERSION.to_string(),
            response: AgentActionResponse {
                action_group: self.action_group.clone(),
                api_path: self
                    .api_path
                    .clone()
                    .unwrap_or_else(|| self.default_api_path().to_string()),
                http_method: self.http_method.clone().unwrap_or_else(|| "POST".to_string()),
                http_status_code: status.as_u16(),
                response_body,
            },
            session_attributes: self.session_attributes.clone(),
            prompt_session_attributes: self.prompt_session_attributes.clone(),
        }
    }
}

fn parameter_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Looks up `names` in the parameter map, reporting every missing or blank one
fn required<'a>(
    params: &'a BTreeMap<String, String>,
    names: &[&str],
) -> Result<Vec<&'a str>, Value> {
    let mut values = Vec::with_capacity(names.len());
    let mut missing = Vec::new();
    for name in names {
        match params.get(*name).map(|v| v.trim()).filter(|v| !v.is_empty()) {
            Some(value) => values.push(value),
            None => missing.push(*name),
        }
    }

    if missing.is_empty() {
        Ok(values)
    } else {
        Err(json!({
            "error": format!("Missing required parameters: {}", missing.join(", ")),
            "received_parameters": params,
        }))
    }
}

fn riot_id(values: &[&str]) -> Result<RiotId, Value> {
    match values {
        [game_name, tag_line, region] => riot_id_from_parts(game_name, tag_line, region)
            .ok_or_else(|| json!({"error": "Missing required parameters"})),
        _ => Err(json!({"error": "Missing required parameters"})),
    }
}

fn error_body(error: &AppError) -> (StatusCode, Value) {
    let status = match error {
        AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, json!({"error": error.to_string()}))
}

fn to_body<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| json!({"error": e.to_string()}))
}

/// Runs the action group named by the event and wraps the outcome.
///
/// Failures never escape: they become a status code inside the envelope.
#[instrument(skip_all, fields(action_group = %event.action_group))]
pub async fn dispatch(service: &AnalysisService, event: &AgentEvent) -> AgentResponse {
    let (status, body) = match event.action_group.as_str() {
        STRENGTHS_WEAKNESSES => strengths_weaknesses(service, event).await,
        SOCIAL_COMPARISON => social_comparison(service, event).await,
        other => {
            warn!(action_group = %other, "Rejecting unknown action group");
            (
                StatusCode::BAD_REQUEST,
                json!({"error": format!("Invalid action group: {other}")}),
            )
        }
    };

    info!(status = status.as_u16(), "Agent action completed");
    event.respond(status, &body)
}

async fn strengths_weaknesses(service: &AnalysisService, event: &AgentEvent) -> (StatusCode, Value) {
    let params = event.parameter_map();
    let id = match required(&params, &["game_name", "tagline", "region"]).and_then(|v| riot_id(&v)) {
        Ok(id) => id,
        Err(body) => return (StatusCode::BAD_REQUEST, body),
    };

    match service.analyze_player(&id).await {
        Ok(analysis @ PlayerAnalysis::Profile(_)) => (StatusCode::OK, to_body(&analysis)),
        Ok(analysis) => (StatusCode::NOT_FOUND, to_body(&analysis)),
        Err(e) => error_body(&e),
    }
}

async fn social_comparison(service: &AnalysisService, event: &AgentEvent) -> (StatusCode, Value) {
    let params = event.parameter_map();
    let ids = required(
        &params,
        &[
            "game_name_1",
            "tagline_1",
            "region_1",
            "game_name_2",
            "tagline_2",
            "region_2",
        ],
    )
    .and_then(|values| Ok((riot_id(&values[..3])?, riot_id(&values[3..])?)));

    let (first, second) = match ids {
        Ok(ids) => ids,
        Err(body) => return (StatusCode::BAD_REQUEST, body),
    };

    match service.compare_players(&first, &second).await {
        Ok(report @ ComparisonReport::Complete(_)) => (StatusCode::OK, to_body(&report)),
        Ok(report) => (StatusCode::NOT_FOUND, to_body(&report)),
        Err(e) => error_body(&e),
    }
}
