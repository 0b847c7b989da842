use crate::models::{Category, ScheduleItem};
use chrono::{Datelike, NaiveDate, Weekday};

pub const SHOLAT_SCHEDULE: [ScheduleItem; 5] = [
    item("subuh", "Subuh", "04:30", Category::Sholat),
    item("dzuhur", "Dzuhur", "12:00", Category::Sholat),
    item("ashar", "Ashar", "15:30", Category::Sholat),
    item("maghrib", "Maghrib", "18:00", Category::Sholat),
    item("isya", "Isya", "19:00", Category::Sholat),
];

pub const DAILY_ROUTINE: [ScheduleItem; 8] = [
    item("sarapan", "Sarapan", "06:00", Category::Routine),
    item("sekolah", "Sekolah", "07:00\u{2013}14:00", Category::Routine),
    item("waktu_bebas", "Waktu bebas/projek", "14:00\u{2013}17:00", Category::Routine),
    item("istirahat_sore", "Istirahat sore", "17:00\u{2013}18:00", Category::Routine),
    item("istirahat_olahraga", "Istirahat Olahraga", "16:00\u{2013}16:30", Category::Routine),
    item("makan_malam", "Makan malam", "19:30", Category::Routine),
    item("persiapan_live", "Persiapan Live", "20:30", Category::Routine),
    item("live", "Live", "21:00\u{2013}23:00", Category::Routine),
];

pub const MANDATORY_WORKOUT: [ScheduleItem; 3] = [
    item("pushup", "Push-up 20x", "Setelah Subuh", Category::Workout),
    item("situp", "Sit-up 20x", "Setelah sekolah", Category::Workout),
    item("plank", "Plank 45 detik", "17:30", Category::Workout),
];

pub const EXTRA_WORKOUT: [ScheduleItem; 5] = [
    item("extra_pushup", "Extra Push-up +30", "", Category::Extra),
    item("extra_situp", "Extra Sit-up +30", "", Category::Extra),
    item("extra_plank", "Extra Plank +1 menit", "", Category::Extra),
    item("stretching", "Stretching full-body 10 menit", "", Category::Extra),
    item("jalan_cepat", "Jalan cepat / skipping 10 menit", "", Category::Extra),
];

pub const MEAL_SCHEDULE: [ScheduleItem; 3] = [
    item("makan_pagi", "Makan pagi", "06:00", Category::Meals),
    item("makan_siang", "Makan siang", "12:30", Category::Meals),
    item("makan_malam", "Makan malam", "19:30", Category::Meals),
];

pub const WATER_GLASSES: [ScheduleItem; 8] = [
    item("water_1", "Gelas 1", "", Category::Water),
    item("water_2", "Gelas 2", "", Category::Water),
    item("water_3", "Gelas 3", "", Category::Water),
    item("water_4", "Gelas 4", "", Category::Water),
    item("water_5", "Gelas 5", "", Category::Water),
    item("water_6", "Gelas 6", "", Category::Water),
    item("water_7", "Gelas 7", "", Category::Water),
    item("water_8", "Gelas 8", "", Category::Water),
];

const fn item(
    id: &'static str,
    name: &'static str,
    time: &'static str,
    category: Category,
) -> ScheduleItem {
    ScheduleItem {
        id,
        name,
        time,
        category,
    }
}

pub fn items(category: Category) -> &'static [ScheduleItem] {
    match category {
        Category::Sholat => &SHOLAT_SCHEDULE,
        Category::Routine => &DAILY_ROUTINE,
        Category::Workout => &MANDATORY_WORKOUT,
        Category::Extra => &EXTRA_WORKOUT,
        Category::Meals => &MEAL_SCHEDULE,
        Category::Water => &WATER_GLASSES,
    }
}

pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

pub fn is_thursday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Thu
}

/// Catalog items that count toward progress on `date`. School drops out on
/// Sunday; the extra workout only exists on Thursday.
pub fn active_items(category: Category, date: NaiveDate) -> Vec<ScheduleItem> {
    match category {
        Category::Routine if is_sunday(date) => DAILY_ROUTINE
            .iter()
            .copied()
            .filter(|item| item.id != "sekolah")
            .collect(),
        Category::Extra if !is_thursday(date) => Vec::new(),
        _ => items(category).to_vec(),
    }
}

/// Display time for `item` on `date`. Two Sunday overrides; everything else
/// shows the catalog time as-is.
pub fn display_time(item: &ScheduleItem, date: NaiveDate) -> &'static str {
    if is_sunday(date) {
        match item.id {
            "sekolah" => return "Libur (Minggu)",
            "situp" => return "14:15 (Minggu)",
            _ => {}
        }
    }
    item.time
}

/// True when `id` names a catalog item in `category`, whether or not the item
/// is active on the current day.
pub fn contains(category: Category, id: &str) -> bool {
    items(category).iter().any(|item| item.id == id)
}

const DAYS_ID: [&str; 7] = [
    "Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu",
];

pub fn day_name(date: NaiveDate) -> &'static str {
    DAYS_ID[date.weekday().num_days_from_sunday() as usize]
}

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// `Senin, 24 Agustus 2026` -- the header line of the daily page.
pub fn date_text(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        day_name(date),
        date.day(),
        MONTHS_ID[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    fn thursday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    #[test]
    fn fixed_category_sizes() {
        assert_eq!(items(Category::Sholat).len(), 5);
        assert_eq!(items(Category::Routine).len(), 8);
        assert_eq!(items(Category::Workout).len(), 3);
        assert_eq!(items(Category::Extra).len(), 5);
        assert_eq!(items(Category::Meals).len(), 3);
        assert_eq!(items(Category::Water).len(), 8);
    }

    #[test]
    fn school_is_excluded_on_sunday() {
        let active = active_items(Category::Routine, sunday());
        assert_eq!(active.len(), 7);
        assert!(active.iter().all(|item| item.id != "sekolah"));
        assert_eq!(active_items(Category::Routine, monday()).len(), 8);
    }

    #[test]
    fn extra_workout_only_on_thursday() {
        assert_eq!(active_items(Category::Extra, thursday()).len(), 5);
        assert!(active_items(Category::Extra, monday()).is_empty());
        assert!(active_items(Category::Extra, sunday()).is_empty());
    }

    #[test]
    fn sunday_display_time_overrides() {
        let sekolah = DAILY_ROUTINE.iter().find(|i| i.id == "sekolah").unwrap();
        let situp = MANDATORY_WORKOUT.iter().find(|i| i.id == "situp").unwrap();
        assert_eq!(display_time(sekolah, sunday()), "Libur (Minggu)");
        assert_eq!(display_time(situp, sunday()), "14:15 (Minggu)");
        assert_eq!(display_time(sekolah, monday()), "07:00\u{2013}14:00");
        assert_eq!(display_time(situp, monday()), "Setelah sekolah");
    }

    #[test]
    fn day_names_follow_sunday_indexing() {
        assert_eq!(day_name(sunday()), "Minggu");
        assert_eq!(day_name(thursday()), "Kamis");
    }

    #[test]
    fn date_text_reads_like_the_header() {
        assert_eq!(date_text(monday()), "Senin, 24 Agustus 2026");
    }
}
