use serde::{Deserialize, Serialize};

use crate::riot::RiotId;
use crate::shared::AppError;

/// Request payload naming one player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRequest {
    pub game_name: String,
    pub tag_line: String,
    pub region: String,
}

impl PlayerRequest {
    /// Trimmed id, or `BadRequest` when any part is blank
    pub fn into_riot_id(self) -> Result<RiotId, AppError> {
        riot_id_from_parts(&self.game_name, &self.tag_line, &self.region)
            .ok_or_else(|| AppError::BadRequest(MISSING_PLAYER_FIELDS.to_string()))
    }
}

/// Request payload for comparing two players
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub player1: PlayerRequest,
    pub player2: PlayerRequest,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

pub const MISSING_PLAYER_FIELDS: &str = "game_name, tag_line and region are required";

pub(crate) fn riot_id_from_parts(game_name: &str, tag_line: &str, region: &str) -> Option<RiotId> {
    let (game_name, tag_line, region) = (game_name.trim(), tag_line.trim(), region.trim());
    if game_name.is_empty() || tag_line.is_empty() || region.is_empty() {
        return None;
    }
    Some(RiotId::new(game_name, tag_line, region.to_lowercase()))
}
