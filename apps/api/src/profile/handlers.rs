use std::collections::BTreeSet;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::{
    CareerInterest, Challenge, JobPriority, Neurodivergence, SensoryPreference, Strength,
    UserProfile,
};
use crate::state::AppState;

/// The profile-builder / quick-start payload. Saved jobs and course progress
/// are owned by their own endpoints and survive a profile rewrite.
#[derive(Debug, Deserialize)]
pub struct UpsertProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub neurodivergence: BTreeSet<Neurodivergence>,
    #[serde(default)]
    pub strengths: BTreeSet<Strength>,
    #[serde(default)]
    pub challenges: BTreeSet<Challenge>,
    pub sensory_preference: SensoryPreference,
    #[serde(default)]
    pub career_interests: BTreeSet<CareerInterest>,
    #[serde(default)]
    pub job_priorities: Vec<JobPriority>,
    #[serde(default)]
    pub profile_completed: bool,
}

#[derive(Debug, Serialize)]
pub struct SavedJobResponse {
    pub job_id: String,
    pub saved: bool,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = state
        .profiles
        .load()?
        .ok_or_else(|| AppError::NotFound("No profile exists yet".to_string()))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile
///
/// Creates or replaces the assessment fields. A completed profile must
/// declare at least one neurodivergence.
pub async fn handle_upsert_profile(
    State(state): State<AppState>,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    if req.profile_completed && req.neurodivergence.is_empty() {
        return Err(AppError::Validation(
            "A completed profile must include at least one neurodivergence".to_string(),
        ));
    }

    let mut profile = state.profiles.load()?.unwrap_or_default();
    profile.name = req.name;
    profile.age = req.age;
    profile.location = req.location;
    profile.neurodivergence = req.neurodivergence;
    profile.strengths = req.strengths;
    profile.challenges = req.challenges;
    profile.sensory_preference = req.sensory_preference;
    profile.career_interests = req.career_interests;
    profile.job_priorities = req.job_priorities;
    profile.profile_completed = req.profile_completed;
    profile.updated_at = Utc::now();

    state.profiles.save(&profile)?;
    info!(
        "Profile {} saved (completed: {})",
        profile.id, profile.profile_completed
    );
    Ok(Json(profile))
}

/// DELETE /api/v1/profile — the "start fresh" flow.
pub async fn handle_delete_profile(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.profiles.clear()?;
    info!("Profile cleared");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/profile/saved-jobs/:job_id — bookmark toggle.
pub async fn handle_toggle_saved_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<SavedJobResponse>, AppError> {
    if state.catalog.job(&job_id).is_none() {
        return Err(AppError::NotFound(format!("Job '{job_id}' not found")));
    }

    let mut profile = state
        .profiles
        .load()?
        .ok_or_else(|| AppError::NotFound("No profile exists yet".to_string()))?;

    let saved = if profile.saved_jobs.remove(&job_id) {
        false
    } else {
        profile.saved_jobs.insert(job_id.clone());
        true
    };
    profile.updated_at = Utc::now();
    state.profiles.save(&profile)?;

    Ok(Json(SavedJobResponse { job_id, saved }))
}
