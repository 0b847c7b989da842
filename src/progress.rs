use crate::catalog;
use crate::models::{Category, DayState, Progress};
use chrono::NaiveDate;

/// Progress for a single category on `date`, honoring the Sunday/Thursday
/// adjustments. Only catalog item ids count; stray ids in storage are ignored.
pub fn category_progress(category: Category, date: NaiveDate, state: &DayState) -> Progress {
    let active = catalog::active_items(category, date);
    let completed = active
        .iter()
        .filter(|item| state.is_done(category, item.id))
        .count() as u32;
    Progress::from_counts(completed, active.len() as u32)
}

/// Overall progress across every category active on `date`.
pub fn day_progress(date: NaiveDate, state: &DayState) -> Progress {
    let mut completed = 0;
    let mut total = 0;
    for category in Category::ALL {
        let progress = category_progress(category, date, state);
        completed += progress.completed;
        total += progress.total;
    }
    Progress::from_counts(completed, total)
}
