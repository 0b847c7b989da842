use crate::errors::AppError;
use crate::models::{DayState, TrackerData};
use chrono::NaiveDate;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("APP_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("data")
}

/// The localStorage key of the original becomes the file name.
pub fn day_state_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(format!("lifeMonitor_{date}.json"))
}

pub fn tracker_path(dir: &Path) -> PathBuf {
    dir.join("tracker.json")
}

/// Loads one date's checklist document. Never fails: a missing file is a day
/// the user has not touched, and a corrupt one is dropped in favor of the
/// default-empty structure.
pub async fn load_day_state(dir: &Path, date: NaiveDate) -> DayState {
    read_or_default(&day_state_path(dir, date)).await
}

pub async fn persist_day_state(
    dir: &Path,
    date: NaiveDate,
    state: &DayState,
) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(state).map_err(AppError::internal)?;
    fs::write(day_state_path(dir, date), payload).await?;
    Ok(())
}

/// Removes the date's document entirely. Resetting a day that was never
/// written is a no-op.
pub async fn reset_day_state(dir: &Path, date: NaiveDate) -> Result<(), AppError> {
    match fs::remove_file(day_state_path(dir, date)).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

pub async fn load_tracker(dir: &Path) -> TrackerData {
    read_or_default(&tracker_path(dir)).await
}

pub async fn persist_tracker(dir: &Path, data: &TrackerData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(tracker_path(dir), payload).await?;
    Ok(())
}

async fn read_or_default<T>(path: &Path) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse {}: {err}", path.display());
                T::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    #[tokio::test]
    async fn missing_day_state_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let state = load_day_state(dir.path(), date()).await;
        assert_eq!(state, DayState::default());
    }

    #[tokio::test]
    async fn day_state_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = DayState::default();
        state.set(Category::Sholat, "subuh", true);
        state.set(Category::Water, "water_1", true);

        persist_day_state(dir.path(), date(), &state).await.unwrap();
        let loaded = load_day_state(dir.path(), date()).await;
        assert_eq!(loaded, state);
    }

    #[tokio::test]
    async fn corrupt_day_state_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(day_state_path(dir.path(), date()), b"{not json")
            .await
            .unwrap();
        let state = load_day_state(dir.path(), date()).await;
        assert_eq!(state, DayState::default());
    }

    #[tokio::test]
    async fn reset_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = DayState::default();
        state.set(Category::Meals, "makan_pagi", true);
        persist_day_state(dir.path(), date(), &state).await.unwrap();

        reset_day_state(dir.path(), date()).await.unwrap();
        reset_day_state(dir.path(), date()).await.unwrap();
        assert_eq!(load_day_state(dir.path(), date()).await, DayState::default());
    }

    #[tokio::test]
    async fn tracker_document_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut data = TrackerData::default();
        data.settings.current_date = "2026-08-24".to_string();
        data.settings.streak = 3;

        persist_tracker(dir.path(), &data).await.unwrap();
        let loaded = load_tracker(dir.path()).await;
        assert_eq!(loaded, data);
    }

    #[tokio::test]
    async fn day_state_file_uses_life_monitor_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = day_state_path(dir.path(), date());
        assert!(path.ends_with("lifeMonitor_2026-08-24.json"));
    }
}
