use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::courses::{
    ai_literacy_completion, complete_ai_literacy, life_skills_completion,
    set_life_skills_progress,
};
use crate::errors::AppError;
use crate::models::course::{CourseModule, CourseTrack};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ModuleView {
    pub module: CourseModule,
    /// Life-skills: completion percent. AI-literacy: 0 or 100.
    pub progress: u8,
}

#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub modules: Vec<ModuleView>,
    pub life_skills_completion: f64,
    pub ai_literacy_completion: f64,
}

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub percent: u8,
}

/// GET /api/v1/courses — the module catalog with the caller's progress
/// merged in. A missing or unreadable profile degrades to zero progress.
pub async fn handle_list_courses(
    State(state): State<AppState>,
) -> Result<Json<CourseListResponse>, AppError> {
    let profile = match state.profiles.load() {
        Ok(p) => p,
        Err(e) => {
            warn!("Profile store unavailable, serving courses without progress: {e}");
            None
        }
    };
    let profile = profile.unwrap_or_default();

    let modules: Vec<ModuleView> = state
        .catalog
        .modules
        .iter()
        .map(|module| {
            let progress = match module.track {
                CourseTrack::LifeSkills => {
                    *profile.life_skills_progress.get(&module.id).unwrap_or(&0)
                }
                CourseTrack::AiLiteracy => {
                    if *profile.ai_literacy_progress.get(&module.id).unwrap_or(&false) {
                        100
                    } else {
                        0
                    }
                }
            };
            ModuleView {
                module: module.clone(),
                progress,
            }
        })
        .collect();

    Ok(Json(CourseListResponse {
        life_skills_completion: life_skills_completion(&profile, &state.catalog.modules),
        ai_literacy_completion: ai_literacy_completion(&profile, &state.catalog.modules),
        modules,
    }))
}

/// PATCH /api/v1/courses/life-skills/:module_id/progress
pub async fn handle_life_skills_progress(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
    Json(req): Json<ProgressRequest>,
) -> Result<Json<CourseListResponse>, AppError> {
    require_module(&state, &module_id, CourseTrack::LifeSkills)?;

    let mut profile = state
        .profiles
        .load()?
        .ok_or_else(|| AppError::NotFound("No profile exists yet".to_string()))?;
    set_life_skills_progress(&mut profile, &module_id, req.percent);
    profile.updated_at = Utc::now();
    state.profiles.save(&profile)?;

    handle_list_courses(State(state)).await
}

/// POST /api/v1/courses/ai-literacy/:module_id/complete
pub async fn handle_ai_literacy_complete(
    State(state): State<AppState>,
    Path(module_id): Path<String>,
) -> Result<Json<CourseListResponse>, AppError> {
    require_module(&state, &module_id, CourseTrack::AiLiteracy)?;

    let mut profile = state
        .profiles
        .load()?
        .ok_or_else(|| AppError::NotFound("No profile exists yet".to_string()))?;
    complete_ai_literacy(&mut profile, &module_id);
    profile.updated_at = Utc::now();
    state.profiles.save(&profile)?;

    handle_list_courses(State(state)).await
}

fn require_module(state: &AppState, module_id: &str, track: CourseTrack) -> Result<(), AppError> {
    match state.catalog.module(module_id) {
        Some(module) if module.track == track => Ok(()),
        Some(_) => Err(AppError::Validation(format!(
            "Module '{module_id}' belongs to a different track"
        ))),
        None => Err(AppError::NotFound(format!(
            "Module '{module_id}' not found"
        ))),
    }
}
