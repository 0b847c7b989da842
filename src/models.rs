use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Checklist categories. A closed set so nothing dispatches on loose strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sholat,
    Routine,
    Workout,
    Extra,
    Meals,
    Water,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Sholat,
        Category::Routine,
        Category::Workout,
        Category::Extra,
        Category::Meals,
        Category::Water,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Sholat => "sholat",
            Category::Routine => "routine",
            Category::Workout => "workout",
            Category::Extra => "extra",
            Category::Meals => "meals",
            Category::Water => "water",
        }
    }
}

/// One entry in the fixed schedule catalog. `time` is display text, never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleItem {
    pub id: &'static str,
    pub name: &'static str,
    pub time: &'static str,
    pub category: Category,
}

/// Per-date checklist document: item id -> completed, one map per category.
/// Serialized shape matches the `lifeMonitor_<date>` documents exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DayState {
    #[serde(default)]
    pub sholat: BTreeMap<String, bool>,
    #[serde(default)]
    pub routine: BTreeMap<String, bool>,
    #[serde(default)]
    pub workout: BTreeMap<String, bool>,
    #[serde(default)]
    pub extra: BTreeMap<String, bool>,
    #[serde(default)]
    pub meals: BTreeMap<String, bool>,
    #[serde(default)]
    pub water: BTreeMap<String, bool>,
}

impl DayState {
    pub fn category(&self, category: Category) -> &BTreeMap<String, bool> {
        match category {
            Category::Sholat => &self.sholat,
            Category::Routine => &self.routine,
            Category::Workout => &self.workout,
            Category::Extra => &self.extra,
            Category::Meals => &self.meals,
            Category::Water => &self.water,
        }
    }

    pub fn category_mut(&mut self, category: Category) -> &mut BTreeMap<String, bool> {
        match category {
            Category::Sholat => &mut self.sholat,
            Category::Routine => &mut self.routine,
            Category::Workout => &mut self.workout,
            Category::Extra => &mut self.extra,
            Category::Meals => &mut self.meals,
            Category::Water => &mut self.water,
        }
    }

    pub fn is_done(&self, category: Category, id: &str) -> bool {
        self.category(category).get(id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, category: Category, id: &str, checked: bool) {
        self.category_mut(category).insert(id.to_string(), checked);
    }
}

/// Derived completed/total/percentage triple. Never stored for the checklist
/// variant; recomputed on every refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: u32,
    pub total: u32,
    pub percentage: u8,
}

impl Progress {
    pub fn from_counts(completed: u32, total: u32) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            (f64::from(completed) / f64::from(total) * 100.0).round() as u8
        };
        Self {
            completed,
            total,
            percentage,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Progress::from_counts(0, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Free-form activity owned by exactly one day's record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityDraft {
    pub name: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
}

/// Partial update. `completed` is deliberately absent: the only state
/// transition for an activity is `toggle`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityPatch {
    pub name: Option<String>,
    pub time: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
}

/// One day's slice of the activity tracker. `completed`/`total`/`percentage`
/// are caches; every mutation must end in `tracker::recompute`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DayRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPercentage {
    pub date: String,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    /// ISO week key, `YYYY-Www`.
    pub week: String,
    pub start_date: String,
    pub end_date: String,
    pub daily: Vec<DailyPercentage>,
    pub average: u8,
    pub generated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSlot {
    pub week: String,
    pub average: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    /// `YYYY-MM`.
    pub month: String,
    pub weeks: Vec<WeekSlot>,
    pub average: u8,
    pub best_week: Option<WeekSlot>,
    pub trend: Trend,
    /// `max(0, 100 - mean absolute deviation)` of the weekly averages.
    pub consistency: u8,
    pub generated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoteCategory {
    Daily,
    Weekly,
    Monthly,
    Ideas,
    Improvements,
    MonthlyTargets,
    YearlyTargets,
}

impl NoteCategory {
    pub fn parse(value: &str) -> Option<NoteCategory> {
        match value {
            "daily" => Some(NoteCategory::Daily),
            "weekly" => Some(NoteCategory::Weekly),
            "monthly" => Some(NoteCategory::Monthly),
            "ideas" => Some(NoteCategory::Ideas),
            "improvements" => Some(NoteCategory::Improvements),
            "monthlyTargets" => Some(NoteCategory::MonthlyTargets),
            "yearlyTargets" => Some(NoteCategory::YearlyTargets),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub category: NoteCategory,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NoteBook {
    #[serde(default)]
    pub daily: Vec<Note>,
    #[serde(default)]
    pub weekly: Vec<Note>,
    #[serde(default)]
    pub monthly: Vec<Note>,
    #[serde(default)]
    pub ideas: Vec<Note>,
    #[serde(default)]
    pub improvements: Vec<Note>,
    #[serde(default)]
    pub monthly_targets: Vec<Note>,
    #[serde(default)]
    pub yearly_targets: Vec<Note>,
}

impl NoteBook {
    pub fn list(&self, category: NoteCategory) -> &Vec<Note> {
        match category {
            NoteCategory::Daily => &self.daily,
            NoteCategory::Weekly => &self.weekly,
            NoteCategory::Monthly => &self.monthly,
            NoteCategory::Ideas => &self.ideas,
            NoteCategory::Improvements => &self.improvements,
            NoteCategory::MonthlyTargets => &self.monthly_targets,
            NoteCategory::YearlyTargets => &self.yearly_targets,
        }
    }

    pub fn list_mut(&mut self, category: NoteCategory) -> &mut Vec<Note> {
        match category {
            NoteCategory::Daily => &mut self.daily,
            NoteCategory::Weekly => &mut self.weekly,
            NoteCategory::Monthly => &mut self.monthly,
            NoteCategory::Ideas => &mut self.ideas,
            NoteCategory::Improvements => &mut self.improvements,
            NoteCategory::MonthlyTargets => &mut self.monthly_targets,
            NoteCategory::YearlyTargets => &mut self.yearly_targets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub current_date: String,
    #[serde(default)]
    pub current_week: String,
    #[serde(default)]
    pub current_month: String,
    #[serde(default)]
    pub streak: u32,
}

/// The activity tracker's singular persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrackerData {
    #[serde(default)]
    pub daily_activities: BTreeMap<String, DayRecord>,
    #[serde(default)]
    pub weekly_reports: BTreeMap<String, WeeklyReport>,
    #[serde(default)]
    pub monthly_reports: BTreeMap<String, MonthlyReport>,
    #[serde(default)]
    pub notes: NoteBook,
    #[serde(default)]
    pub settings: Settings,
}

// ---- request/response payloads ----

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub category: Category,
    pub id: String,
    pub checked: bool,
}

#[derive(Debug, Serialize)]
pub struct ChecklistEntry {
    pub id: String,
    pub name: String,
    pub time: String,
    pub checked: bool,
}

#[derive(Debug, Serialize)]
pub struct CategoryChecklist {
    pub category: Category,
    pub items: Vec<ChecklistEntry>,
    pub progress: Progress,
}

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub date: String,
    pub day: String,
    pub categories: Vec<CategoryChecklist>,
    pub progress: Progress,
    pub message: crate::labels::Message,
}

#[derive(Debug, Deserialize)]
pub struct WeeklyRequest {
    pub week: u32,
    pub year: i32,
}

#[derive(Debug, Deserialize)]
pub struct MonthlyRequest {
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Deserialize)]
pub struct DayNotesRequest {
    pub notes: String,
}
