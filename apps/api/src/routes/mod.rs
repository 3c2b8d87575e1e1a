pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::chat::handlers as chat_handlers;
use crate::courses::handlers as course_handlers;
use crate::leaderboard::handlers as leaderboard_handlers;
use crate::matching::handlers as job_handlers;
use crate::profile::handlers as profile_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career matching
        .route("/api/v1/jobs", get(job_handlers::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(job_handlers::handle_get_job))
        // AI tool leaderboard
        .route(
            "/api/v1/leaderboard",
            get(leaderboard_handlers::handle_leaderboard),
        )
        .route(
            "/api/v1/leaderboard/:id",
            get(leaderboard_handlers::handle_get_tool),
        )
        // Profile lifecycle
        .route(
            "/api/v1/profile",
            get(profile_handlers::handle_get_profile)
                .put(profile_handlers::handle_upsert_profile)
                .delete(profile_handlers::handle_delete_profile),
        )
        .route(
            "/api/v1/profile/saved-jobs/:job_id",
            post(profile_handlers::handle_toggle_saved_job),
        )
        // Courses
        .route("/api/v1/courses", get(course_handlers::handle_list_courses))
        .route(
            "/api/v1/courses/life-skills/:module_id/progress",
            patch(course_handlers::handle_life_skills_progress),
        )
        .route(
            "/api/v1/courses/ai-literacy/:module_id/complete",
            post(course_handlers::handle_ai_literacy_complete),
        )
        // Chat collaborator
        .route("/api/v1/chat", post(chat_handlers::handle_send_message))
        .route("/api/v1/chat/health", get(chat_handlers::handle_chat_health))
        .route(
            "/api/v1/chat/reset",
            post(chat_handlers::handle_reset_conversation),
        )
        .with_state(state)
}
