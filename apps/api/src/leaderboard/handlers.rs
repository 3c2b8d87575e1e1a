use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::leaderboard::{filter_by_thinking_style, rank_tools, ThinkingStyle};
use crate::matching::labels::ScoreBand;
use crate::models::tool::AiTool;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub style: ThinkingStyle,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub tool: AiTool,
    pub band: ScoreBand,
    pub band_label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub style: ThinkingStyle,
    pub style_label: &'static str,
    pub entries: Vec<LeaderboardEntry>,
    pub total: usize,
}

/// Per-dimension bands for the tool detail view.
#[derive(Debug, Serialize)]
pub struct ToolDetailResponse {
    pub tool: AiTool,
    pub overall_band: ScoreBand,
    pub lateral_band: ScoreBand,
    pub linear_band: ScoreBand,
    pub language_band: ScoreBand,
    pub awareness_band: ScoreBand,
}

/// GET /api/v1/leaderboard
pub async fn handle_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    let filtered = filter_by_thinking_style(&state.catalog.tools, query.style);
    let ranked = rank_tools(&filtered);

    let entries: Vec<LeaderboardEntry> = ranked
        .into_iter()
        .enumerate()
        .map(|(i, tool)| {
            let band = ScoreBand::for_score(tool.assessment.overall);
            LeaderboardEntry {
                rank: i + 1,
                band,
                band_label: band.label(),
                tool: tool.clone(),
            }
        })
        .collect();

    let total = entries.len();
    Ok(Json(LeaderboardResponse {
        style: query.style,
        style_label: query.style.label(),
        entries,
        total,
    }))
}

/// GET /api/v1/leaderboard/:id
pub async fn handle_get_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ToolDetailResponse>, AppError> {
    let tool = state
        .catalog
        .tool(&id)
        .ok_or_else(|| AppError::NotFound(format!("Tool '{id}' not found")))?;

    let scores = &tool.assessment;
    Ok(Json(ToolDetailResponse {
        overall_band: ScoreBand::for_score(scores.overall),
        lateral_band: ScoreBand::for_score(scores.lateral_thinking),
        linear_band: ScoreBand::for_score(scores.linear_thinking),
        language_band: ScoreBand::for_score(scores.language_adaptability),
        awareness_band: ScoreBand::for_score(scores.neurodivergent_awareness),
        tool: tool.clone(),
    }))
}
