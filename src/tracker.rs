use crate::models::{
    Activity, ActivityDraft, ActivityPatch, DayRecord, Note, NoteCategory, NoteDraft, Progress,
    TrackerData,
};
use chrono::{Datelike, Duration, Local, NaiveDate};
use std::sync::atomic::{AtomicU64, Ordering};

/// Single recompute entry point for the denormalized day counters. Every
/// mutation of `activities` must end here.
pub fn recompute(record: &mut DayRecord) {
    let total = record.activities.len() as u32;
    let completed = record
        .activities
        .iter()
        .filter(|activity| activity.completed)
        .count() as u32;
    let progress = Progress::from_counts(completed, total);
    record.completed = progress.completed;
    record.total = progress.total;
    record.percentage = progress.percentage;
}

fn record_mut<'a>(data: &'a mut TrackerData, date: &str) -> &'a mut DayRecord {
    data.daily_activities
        .entry(date.to_string())
        .or_insert_with(|| DayRecord {
            date: date.to_string(),
            ..DayRecord::default()
        })
}

pub fn add_activity(data: &mut TrackerData, date: &str, draft: ActivityDraft) -> Activity {
    let activity = Activity {
        id: next_id(),
        name: draft.name,
        time: draft.time,
        category: draft.category,
        priority: draft.priority,
        completed: false,
    };
    let record = record_mut(data, date);
    record.activities.push(activity.clone());
    recompute(record);
    activity
}

pub fn update_activity(data: &mut TrackerData, date: &str, id: &str, patch: ActivityPatch) -> bool {
    let Some(record) = data.daily_activities.get_mut(date) else {
        return false;
    };
    let Some(activity) = record.activities.iter_mut().find(|a| a.id == id) else {
        return false;
    };

    if let Some(name) = patch.name {
        activity.name = name;
    }
    if let Some(time) = patch.time {
        activity.time = time;
    }
    if let Some(category) = patch.category {
        activity.category = category;
    }
    if let Some(priority) = patch.priority {
        activity.priority = priority;
    }
    recompute(record);
    true
}

/// Flips the activity's completed state and returns the new value, or `None`
/// when no activity with that id exists for the date.
pub fn toggle_activity(data: &mut TrackerData, date: &str, id: &str) -> Option<bool> {
    let record = data.daily_activities.get_mut(date)?;
    let activity = record.activities.iter_mut().find(|a| a.id == id)?;
    activity.completed = !activity.completed;
    let state = activity.completed;
    recompute(record);
    Some(state)
}

pub fn delete_activity(data: &mut TrackerData, date: &str, id: &str) -> bool {
    let Some(record) = data.daily_activities.get_mut(date) else {
        return false;
    };
    let before = record.activities.len();
    record.activities.retain(|a| a.id != id);
    if record.activities.len() == before {
        return false;
    }
    recompute(record);
    true
}

pub fn set_day_notes(data: &mut TrackerData, date: &str, notes: String) {
    record_mut(data, date).notes = notes;
}

pub fn add_note(data: &mut TrackerData, category: NoteCategory, draft: NoteDraft) -> Note {
    let note = Note {
        id: next_id(),
        title: draft.title,
        content: draft.content,
        category,
        created_at: Local::now().to_rfc3339(),
    };
    data.notes.list_mut(category).push(note.clone());
    note
}

pub fn delete_note(data: &mut TrackerData, category: NoteCategory, id: &str) -> bool {
    let notes = data.notes.list_mut(category);
    let before = notes.len();
    notes.retain(|note| note.id != id);
    notes.len() != before
}

/// Refreshes the document's settings block; called after every mutation with
/// the current local date. The streak counts consecutive fully completed days
/// ending today.
pub fn refresh_settings(data: &mut TrackerData, today: NaiveDate) {
    data.settings.current_date = today.to_string();
    let iso = today.iso_week();
    data.settings.current_week = format!("{}-W{:02}", iso.year(), iso.week());
    data.settings.current_month = format!("{}-{:02}", today.year(), today.month());
    data.settings.streak = streak(data, today);
}

fn streak(data: &TrackerData, today: NaiveDate) -> u32 {
    let mut count = 0;
    let mut day = today;
    loop {
        match data.daily_activities.get(&day.to_string()) {
            Some(record) if record.total > 0 && record.percentage == 100 => count += 1,
            _ => break,
        }
        day = day - Duration::days(1);
    }
    count
}

/// Time-based unique id. The counter breaks ties within the same millisecond.
fn next_id() -> String {
    static SEQ: AtomicU64 = AtomicU64::new(0);
    let millis = Local::now().timestamp_millis();
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{seq}")
}
