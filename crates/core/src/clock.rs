// Local clock snapshot for the time tool

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    /// Date, time and UTC only
    Short,
    #[default]
    Full,
}

impl TimeFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "short" => Some(Self::Short),
            "full" => Some(Self::Full),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSnapshot {
    pub date: String,
    pub time: String,
    pub utc: String,
    #[serde(flatten)]
    pub calendar: Option<CalendarDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDetails {
    /// Offset from UTC, e.g. `UTC+02:00`
    pub timezone: String,
    /// ISO-8601 week, 1..=53
    pub week_number: u32,
    /// `Q1`..`Q4`
    pub quarter: String,
    pub days_until_end_of_month: u32,
    pub days_until_end_of_year: u32,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl TimeSnapshot {
    pub fn now(format: TimeFormat) -> Self {
        Self::at(Local::now().fixed_offset(), format)
    }

    pub fn at(now: DateTime<FixedOffset>, format: TimeFormat) -> Self {
        let calendar = match format {
            TimeFormat::Short => None,
            TimeFormat::Full => Some(CalendarDetails::at(&now)),
        };

        Self {
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            utc: now
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            calendar,
        }
    }
}

impl CalendarDetails {
    fn at(now: &DateTime<FixedOffset>) -> Self {
        let date = now.date_naive();

        Self {
            timezone: offset_label(now.offset().local_minus_utc()),
            week_number: now.iso_week().week(),
            quarter: format!("Q{}", (now.month() - 1) / 3 + 1),
            days_until_end_of_month: days_until(date, last_day_of_month(date)),
            days_until_end_of_year: days_until(date, NaiveDate::from_ymd_opt(date.year(), 12, 31)),
            timestamp: now.timestamp_millis(),
        }
    }
}

fn offset_label(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("UTC{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = match date.month() {
        12 => (date.year() + 1, 1),
        m => (date.year(), m + 1),
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

// Zero only at the edges of chrono's representable range
fn days_until(from: NaiveDate, to: Option<NaiveDate>) -> u32 {
    to.and_then(|to| u32::try_from((to - from).num_days()).ok())
        .unwrap_or(0)
}
