use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/checklist", get(handlers::get_checklist))
        .route("/api/checklist/toggle", post(handlers::toggle_checklist_item))
        .route("/api/checklist/reset", post(handlers::reset_checklist))
        .route(
            "/api/activities/:date",
            get(handlers::get_day_record).post(handlers::add_activity),
        )
        .route("/api/activities/:date/notes", put(handlers::set_day_notes))
        .route(
            "/api/activities/:date/:id",
            put(handlers::update_activity).delete(handlers::delete_activity),
        )
        .route(
            "/api/activities/:date/:id/toggle",
            post(handlers::toggle_activity),
        )
        .route("/api/reports/weekly", post(handlers::generate_weekly_report))
        .route(
            "/api/reports/monthly",
            post(handlers::generate_monthly_report),
        )
        .route(
            "/api/notes/:category",
            get(handlers::get_notes).post(handlers::add_note),
        )
        .route("/api/notes/:category/:id", delete(handlers::delete_note))
        .route("/api/export", get(handlers::export_tracker))
        .route("/api/import", post(handlers::import_tracker))
        .with_state(state)
}
