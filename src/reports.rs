use crate::models::{
    DailyPercentage, MonthlyReport, Trend, TrackerData, WeekSlot, WeeklyReport,
};
use chrono::{Datelike, Duration, Local, NaiveDate};

pub fn week_key(year: i32, week: u32) -> String {
    format!("{year}-W{week:02}")
}

pub fn month_key(year: i32, month: u32) -> String {
    format!("{year}-{month:02}")
}

fn daily_percentage(data: &TrackerData, date: NaiveDate) -> u8 {
    data.daily_activities
        .get(&date.to_string())
        .map(|record| record.percentage)
        .unwrap_or(0)
}

fn round_mean(values: &[u8]) -> u8 {
    if values.is_empty() {
        return 0;
    }
    let sum: u32 = values.iter().map(|&v| u32::from(v)).sum();
    (f64::from(sum) / values.len() as f64).round() as u8
}

/// Generates and caches the weekly report. The aggregation window is the
/// trailing 7 calendar days ending `today`; the requested `(week, year)` pair
/// only names the cache slot. This keeps the behavior the original shipped
/// with, documented rather than silently "fixed". A day with no record
/// contributes 0.
pub fn generate_weekly(
    data: &mut TrackerData,
    week: u32,
    year: i32,
    today: NaiveDate,
) -> WeeklyReport {
    let start = today - Duration::days(6);
    let daily: Vec<DailyPercentage> = (0..7)
        .map(|offset| {
            let date = start + Duration::days(offset);
            DailyPercentage {
                date: date.to_string(),
                percentage: daily_percentage(data, date),
            }
        })
        .collect();

    let percentages: Vec<u8> = daily.iter().map(|d| d.percentage).collect();
    let report = WeeklyReport {
        week: week_key(year, week),
        start_date: start.to_string(),
        end_date: today.to_string(),
        daily,
        average: round_mean(&percentages),
        generated_at: Local::now().to_rfc3339(),
    };
    data.weekly_reports
        .insert(report.week.clone(), report.clone());
    report
}

/// The ISO week keys whose Monday-to-Sunday span intersects the month, in
/// calendar order. Replaces the original's `week + (month-1)*4` arithmetic,
/// which aliased across months.
pub fn weeks_of_month(year: i32, month: u32) -> Vec<String> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last = next_month.map(|d| d - Duration::days(1)).unwrap_or(first);

    let mut keys = Vec::new();
    let mut day = first;
    while day <= last {
        let iso = day.iso_week();
        let key = week_key(iso.year(), iso.week());
        if keys.last() != Some(&key) {
            keys.push(key);
        }
        day = day + Duration::days(1);
    }
    keys
}

/// Generates and caches the monthly report by averaging the cached weekly
/// reports for the month's ISO weeks. A week that was never generated counts
/// as 0, matching the original's treatment of unfilled weekly scores.
pub fn generate_monthly(
    data: &mut TrackerData,
    month: u32,
    year: i32,
) -> MonthlyReport {
    let weeks: Vec<WeekSlot> = weeks_of_month(year, month)
        .into_iter()
        .map(|week| {
            let average = data
                .weekly_reports
                .get(&week)
                .map(|report| report.average)
                .unwrap_or(0);
            WeekSlot { week, average }
        })
        .collect();

    let averages: Vec<u8> = weeks.iter().map(|slot| slot.average).collect();
    let average = round_mean(&averages);

    let best_week = weeks
        .iter()
        .max_by_key(|slot| slot.average)
        .cloned();

    let trend = match (weeks.first(), weeks.last()) {
        (Some(first), Some(last)) if last.average > first.average => Trend::Improving,
        (Some(first), Some(last)) if last.average < first.average => Trend::Declining,
        _ => Trend::Stable,
    };

    let report = MonthlyReport {
        month: month_key(year, month),
        weeks,
        average,
        best_week,
        trend,
        consistency: consistency(&averages, average),
        generated_at: Local::now().to_rfc3339(),
    };
    data.monthly_reports
        .insert(report.month.clone(), report.clone());
    report
}

/// `max(0, 100 - mean absolute deviation)` around the rounded average.
fn consistency(averages: &[u8], mean: u8) -> u8 {
    if averages.is_empty() {
        return 0;
    }
    let deviation: f64 = averages
        .iter()
        .map(|&v| (f64::from(v) - f64::from(mean)).abs())
        .sum::<f64>()
        / averages.len() as f64;
    (100.0 - deviation).max(0.0).round() as u8
}
