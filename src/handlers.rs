use crate::errors::AppError;
use crate::models::{
    ActivityDraft, ActivityPatch, Category, CategoryChecklist, ChecklistEntry, ChecklistResponse,
    DayNotesRequest, DayRecord, DayState, MonthlyRequest, NoteCategory, NoteDraft, ToggleRequest,
    TrackerData, WeeklyRequest,
};
use crate::state::AppState;
use crate::ui::render_index;
use crate::{catalog, labels, progress, reports, storage, tracker};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use serde_json::json;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    value
        .parse::<NaiveDate>()
        .map_err(|_| AppError::bad_request(format!("invalid date '{value}', expected YYYY-MM-DD")))
}

fn parse_note_category(value: &str) -> Result<NoteCategory, AppError> {
    NoteCategory::parse(value)
        .ok_or_else(|| AppError::bad_request(format!("unknown note category '{value}'")))
}

// ---- checklist variant ----

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today();
    let _guard = state.checklist.lock().await;
    let day_state = storage::load_day_state(&state.data_dir, date).await;
    let overall = progress::day_progress(date, &day_state);
    Html(render_index(&catalog::date_text(date), overall))
}

fn build_checklist(date: NaiveDate, day_state: &DayState) -> ChecklistResponse {
    let categories = Category::ALL
        .into_iter()
        .map(|category| {
            let items = catalog::active_items(category, date)
                .iter()
                .map(|item| ChecklistEntry {
                    id: item.id.to_string(),
                    name: item.name.to_string(),
                    time: catalog::display_time(item, date).to_string(),
                    checked: day_state.is_done(category, item.id),
                })
                .collect();
            CategoryChecklist {
                category,
                items,
                progress: progress::category_progress(category, date, day_state),
            }
        })
        .collect();

    let overall = progress::day_progress(date, day_state);
    ChecklistResponse {
        date: date.to_string(),
        day: catalog::day_name(date).to_string(),
        categories,
        progress: overall,
        message: labels::health_message(overall.percentage),
    }
}

pub async fn get_checklist(
    State(state): State<AppState>,
) -> Result<Json<ChecklistResponse>, AppError> {
    let date = today();
    let _guard = state.checklist.lock().await;
    let day_state = storage::load_day_state(&state.data_dir, date).await;
    Ok(Json(build_checklist(date, &day_state)))
}

pub async fn toggle_checklist_item(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ChecklistResponse>, AppError> {
    if !catalog::contains(payload.category, &payload.id) {
        return Err(AppError::bad_request(format!(
            "no item '{}' in category '{}'",
            payload.id,
            payload.category.as_str()
        )));
    }

    let date = today();
    let _guard = state.checklist.lock().await;
    let mut day_state = storage::load_day_state(&state.data_dir, date).await;
    day_state.set(payload.category, &payload.id, payload.checked);
    storage::persist_day_state(&state.data_dir, date, &day_state).await?;

    Ok(Json(build_checklist(date, &day_state)))
}

pub async fn reset_checklist(
    State(state): State<AppState>,
) -> Result<Json<ChecklistResponse>, AppError> {
    let date = today();
    let _guard = state.checklist.lock().await;
    storage::reset_day_state(&state.data_dir, date).await?;
    Ok(Json(build_checklist(date, &DayState::default())))
}

// ---- activity tracker variant ----

async fn persist(state: &AppState, data: &mut TrackerData) -> Result<(), AppError> {
    tracker::refresh_settings(data, today());
    storage::persist_tracker(&state.data_dir, data).await
}

pub async fn get_day_record(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayRecord>, AppError> {
    let date = parse_date(&date)?.to_string();
    let data = state.tracker.lock().await;
    let record = data
        .daily_activities
        .get(&date)
        .cloned()
        .unwrap_or_else(|| DayRecord {
            date,
            ..DayRecord::default()
        });
    Ok(Json(record))
}

pub async fn add_activity(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(draft): Json<ActivityDraft>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    if draft.name.trim().is_empty() {
        return Err(AppError::bad_request("activity name must not be empty"));
    }
    let date = parse_date(&date)?.to_string();

    let mut data = state.tracker.lock().await;
    let activity = tracker::add_activity(&mut data, &date, draft);
    persist(&state, &mut data).await?;

    let record = data.daily_activities[&date].clone();
    let label = labels::performance_label(record.percentage);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "activity": activity, "record": record, "label": label })),
    ))
}

pub async fn update_activity(
    State(state): State<AppState>,
    Path((date, id)): Path<(String, String)>,
    Json(patch): Json<ActivityPatch>,
) -> Result<Json<DayRecord>, AppError> {
    let date = parse_date(&date)?.to_string();

    let mut data = state.tracker.lock().await;
    if !tracker::update_activity(&mut data, &date, &id, patch) {
        return Err(AppError::not_found(format!("no activity '{id}' on {date}")));
    }
    persist(&state, &mut data).await?;
    Ok(Json(data.daily_activities[&date].clone()))
}

pub async fn toggle_activity(
    State(state): State<AppState>,
    Path((date, id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let date = parse_date(&date)?.to_string();

    let mut data = state.tracker.lock().await;
    let Some(completed) = tracker::toggle_activity(&mut data, &date, &id) else {
        return Err(AppError::not_found(format!("no activity '{id}' on {date}")));
    };
    persist(&state, &mut data).await?;

    let record = data.daily_activities[&date].clone();
    let label = labels::performance_label(record.percentage);
    Ok(Json(
        json!({ "completed": completed, "record": record, "label": label }),
    ))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    Path((date, id)): Path<(String, String)>,
) -> Result<Json<DayRecord>, AppError> {
    let date = parse_date(&date)?.to_string();

    let mut data = state.tracker.lock().await;
    if !tracker::delete_activity(&mut data, &date, &id) {
        return Err(AppError::not_found(format!("no activity '{id}' on {date}")));
    }
    persist(&state, &mut data).await?;
    Ok(Json(data.daily_activities[&date].clone()))
}

pub async fn set_day_notes(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(payload): Json<DayNotesRequest>,
) -> Result<Json<DayRecord>, AppError> {
    let date = parse_date(&date)?.to_string();

    let mut data = state.tracker.lock().await;
    tracker::set_day_notes(&mut data, &date, payload.notes);
    persist(&state, &mut data).await?;
    Ok(Json(data.daily_activities[&date].clone()))
}

// ---- reports ----

pub async fn generate_weekly_report(
    State(state): State<AppState>,
    Json(payload): Json<WeeklyRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if payload.week == 0 || payload.week > 53 {
        return Err(AppError::bad_request("week must be between 1 and 53"));
    }

    let mut data = state.tracker.lock().await;
    let report = reports::generate_weekly(&mut data, payload.week, payload.year, today());
    persist(&state, &mut data).await?;

    let message = labels::weekly_message(report.average);
    Ok(Json(json!({ "report": report, "message": message })))
}

pub async fn generate_monthly_report(
    State(state): State<AppState>,
    Json(payload): Json<MonthlyRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if payload.month == 0 || payload.month > 12 {
        return Err(AppError::bad_request("month must be between 1 and 12"));
    }

    let mut data = state.tracker.lock().await;
    let report = reports::generate_monthly(&mut data, payload.month, payload.year);
    persist(&state, &mut data).await?;

    let message = labels::monthly_message(report.average);
    let analysis = labels::monthly_analysis(report.average);
    Ok(Json(
        json!({ "report": report, "message": message, "analysis": analysis }),
    ))
}

// ---- notes ----

pub async fn get_notes(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<crate::models::Note>>, AppError> {
    let category = parse_note_category(&category)?;
    let data = state.tracker.lock().await;
    Ok(Json(data.notes.list(category).clone()))
}

pub async fn add_note(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(draft): Json<NoteDraft>,
) -> Result<(StatusCode, Json<crate::models::Note>), AppError> {
    let category = parse_note_category(&category)?;
    if draft.title.trim().is_empty() {
        return Err(AppError::bad_request("note title must not be empty"));
    }

    let mut data = state.tracker.lock().await;
    let note = tracker::add_note(&mut data, category, draft);
    persist(&state, &mut data).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path((category, id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let category = parse_note_category(&category)?;

    let mut data = state.tracker.lock().await;
    if !tracker::delete_note(&mut data, category, &id) {
        return Err(AppError::not_found(format!("no note '{id}'")));
    }
    persist(&state, &mut data).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---- export / import ----

pub async fn export_tracker(
    State(state): State<AppState>,
) -> Result<([(header::HeaderName, &'static str); 1], Json<TrackerData>), AppError> {
    let data = state.tracker.lock().await;
    Ok((
        [(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"life_monitor_export.json\"",
        )],
        Json(data.clone()),
    ))
}

/// Wholesale replacement of the tracker document; an export fed back in
/// reconstructs identical state.
pub async fn import_tracker(
    State(state): State<AppState>,
    Json(imported): Json<TrackerData>,
) -> Result<Json<TrackerData>, AppError> {
    let mut data = state.tracker.lock().await;
    *data = imported;
    storage::persist_tracker(&state.data_dir, &data).await?;
    Ok(Json(data.clone()))
}
