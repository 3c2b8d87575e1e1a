use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::matching::labels::ScoreBand;
use crate::matching::pipeline::{apply_job_filters, personalized, JobFilters, SortBy};
use crate::matching::scoring::{final_match_score, MatchBreakdown};
use crate::models::job::{Intensity, Job, SocialDemand};
use crate::models::profile::UserProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobListQuery {
    pub search: Option<String>,
    pub min_fit: Option<f64>,
    pub max_ai_risk: Option<u8>,
    pub noise: Option<Intensity>,
    pub social: Option<SocialDemand>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    #[serde(default)]
    pub sort: SortBy,
}

impl JobListQuery {
    fn into_filters(self) -> JobFilters {
        JobFilters {
            search: self.search,
            min_cognitive_fit: self.min_fit,
            max_ai_risk: self.max_ai_risk,
            noise: self.noise,
            social: self.social,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            sort_by: self.sort,
        }
    }
}

/// One row of the job listing. `score`/`band` are null without a completed
/// profile — a missing score is distinguishable from a score of 0.
#[derive(Debug, Serialize)]
pub struct JobListEntry {
    pub job: Job,
    pub score: Option<f64>,
    pub band: Option<ScoreBand>,
    pub saved: bool,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobListEntry>,
    pub personalized: bool,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct JobDetailResponse {
    pub job: Job,
    pub breakdown: Option<MatchBreakdown>,
    pub band: Option<ScoreBand>,
    pub band_label: Option<&'static str>,
    pub saved: bool,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<Json<JobListResponse>, AppError> {
    let stored = load_profile_degraded(&state);
    let profile = personalized(stored.as_ref());
    let filters = query.into_filters();

    let matched = apply_job_filters(&state.catalog.jobs, &filters, profile);
    let jobs: Vec<JobListEntry> = matched
        .into_iter()
        .map(|job| {
            let score = profile.map(|p| final_match_score(p, job));
            JobListEntry {
                score,
                band: score.map(ScoreBand::for_score),
                saved: stored
                    .as_ref()
                    .map(|p| p.saved_jobs.contains(&job.id))
                    .unwrap_or(false),
                job: job.clone(),
            }
        })
        .collect();

    let total = jobs.len();
    Ok(Json(JobListResponse {
        jobs,
        personalized: profile.is_some(),
        total,
    }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobDetailResponse>, AppError> {
    let job = state
        .catalog
        .job(&id)
        .ok_or_else(|| AppError::NotFound(format!("Job '{id}' not found")))?;

    let stored = load_profile_degraded(&state);
    let profile = personalized(stored.as_ref());
    let breakdown = profile.map(|p| MatchBreakdown::compute(p, job));
    let band = breakdown.as_ref().map(|b| ScoreBand::for_score(b.overall));

    Ok(Json(JobDetailResponse {
        job: job.clone(),
        breakdown,
        band,
        band_label: band.map(|b| b.label()),
        saved: stored
            .as_ref()
            .map(|p| p.saved_jobs.contains(&job.id))
            .unwrap_or(false),
    }))
}

/// Loads the stored profile, degrading to unpersonalized output if the
/// store is unavailable. Scoring must keep working without a profile.
fn load_profile_degraded(state: &AppState) -> Option<UserProfile> {
    match state.profiles.load() {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Profile store unavailable, serving unpersonalized results: {e}");
            None
        }
    }
}
