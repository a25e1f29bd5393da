//! # Date Resolution
//!
//! Turns the date tokens users type (`--date yesterday`, `--from 3/15`, `--to 2024-06-01T18:00`)
//! into absolute instants.
//!
//! Resolution is an ordered chain of attempts; the first one that matches wins:
//!
//! 1. **Strict timestamp**: `YYYY-MM-DD`, optionally with `T`/space + `HH[:MM[:SS[.fff]]]` and an
//!    optional UTC offset (`Z`, `+HH:MM`, `+HHMM`). Values without an offset are read in
//!    `now`'s zone.
//! 2. **Keywords** (trimmed, case-insensitive): `now`, `today`, `tomorrow`, `yesterday`.
//! 3. **Weekday names**: the most recent such day at or before today, at midnight.
//! 4. **Month/day** (`3/15`, `12-01`, `7.4`): this year, or last year when the month is still
//!    ahead of the current one.
//!
//! Each attempt returns `Ok(None)` when its pattern does not apply, `Ok(Some(_))` when it
//! resolved, and `Err(_)` when the pattern applied but the value is impossible (`2/30`).
//! Impossible dates are rejected, never clamped.
//!
//! Nothing here reads the clock: `now` is always supplied by the caller.

use crate::error::{Result, TrackerError};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};
use log::trace;

const DATE_FORMAT: &str = "%Y-%m-%d";
/// Length of a `YYYY-MM-DD` prefix.
const DATE_LEN: usize = 10;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
];

/// Separators for month/day tokens, in the order they are looked for.
const MONTH_DAY_SEPARATORS: [char; 3] = ['-', '.', '/'];

/// Resolves a date token relative to `now`.
///
/// `None` in gives `Ok(None)` out; the caller decides the default. A token that matches no
/// pattern, or names a date that does not exist, is a [`TrackerError::DateParse`].
pub fn resolve<Tz: TimeZone>(token: Option<&str>, now: &DateTime<Tz>) -> Result<Option<DateTime<Tz>>> {
    let Some(raw) = token else {
        return Ok(None);
    };

    if let Some(dt) = strict_timestamp(raw, now) {
        trace!("date token {:?} matched strict timestamp", raw);
        return Ok(Some(dt));
    }

    let normalized = raw.trim().to_lowercase();

    if let Some(dt) = keyword(&normalized, now)? {
        trace!("date token {:?} matched keyword", raw);
        return Ok(Some(dt));
    }

    if let Some(dt) = weekday(&normalized, now)? {
        trace!("date token {:?} matched weekday", raw);
        return Ok(Some(dt));
    }

    if let Some(dt) = month_day(&normalized, now)? {
        trace!("date token {:?} matched month/day", raw);
        return Ok(Some(dt));
    }

    Err(TrackerError::DateParse(raw.to_string()))
}

/// Like [`resolve`], but an absent token means `now`.
pub fn resolve_or_now<Tz: TimeZone>(token: Option<&str>, now: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    Ok(resolve(token, now)?.unwrap_or_else(|| now.clone()))
}

fn strict_timestamp<Tz: TimeZone>(token: &str, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let tz = now.timezone();
    let expanded = expand_iso_shorthand(token);
    let token = expanded.as_str();

    if let Ok(dt) = DateTime::parse_from_rfc3339(token) {
        return Some(dt.with_timezone(&tz));
    }
    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(token, format) {
            return Some(dt.with_timezone(&tz));
        }
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(token, format) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(token, DATE_FORMAT) {
        return tz.from_local_datetime(&date.and_time(NaiveTime::MIN)).earliest();
    }
    None
}

/// Spell out the ISO shorthands the chrono formats above do not take: a `Z` suffix after a
/// time, and an hour without minutes (`2024-01-15T10`).
fn expand_iso_shorthand(token: &str) -> String {
    let mut expanded = match token.strip_suffix(&['Z', 'z'][..]) {
        Some(rest) if rest.len() > DATE_LEN => format!("{}+00:00", rest),
        _ => token.to_string(),
    };

    let hour_only = match (expanded.as_bytes().get(DATE_LEN).copied(), expanded.get(DATE_LEN + 1..)) {
        (Some(b'T' | b' '), Some(time)) => {
            let hour = &time[..time.find(&['+', '-'][..]).unwrap_or(time.len())];
            hour.len() == 2 && hour.bytes().all(|b| b.is_ascii_digit())
        }
        _ => false,
    };
    if hour_only {
        expanded.insert_str(DATE_LEN + 3, ":00");
    }
    expanded
}

fn keyword<Tz: TimeZone>(token: &str, now: &DateTime<Tz>) -> Result<Option<DateTime<Tz>>> {
    let today = now.date_naive();
    let day = match token {
        "now" => return Ok(Some(now.clone())),
        "today" => today,
        "tomorrow" => today.succ_opt().ok_or_else(|| out_of_range(token))?,
        "yesterday" => today.pred_opt().ok_or_else(|| out_of_range(token))?,
        _ => return Ok(None),
    };
    start_of_day(day, now, token).map(Some)
}

fn weekday<Tz: TimeZone>(token: &str, now: &DateTime<Tz>) -> Result<Option<DateTime<Tz>>> {
    let Some(target) = parse_weekday_name(token) else {
        return Ok(None);
    };
    let today = now.date_naive();
    let delta = (i64::from(today.weekday().num_days_from_monday())
        - i64::from(target.num_days_from_monday()))
    .rem_euclid(7);
    let day = today
        .checked_sub_days(chrono::Days::new(delta as u64))
        .ok_or_else(|| out_of_range(token))?;
    start_of_day(day, now, token).map(Some)
}

fn parse_weekday_name(token: &str) -> Option<Weekday> {
    match token {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

fn month_day<Tz: TimeZone>(token: &str, now: &DateTime<Tz>) -> Result<Option<DateTime<Tz>>> {
    let Some((month, day)) = split_month_day(token) else {
        return Ok(None);
    };

    let today = now.date_naive();
    // A month still ahead of us this year must mean last year's.
    let year = if month > today.month() {
        today.year() - 1
    } else {
        today.year()
    };

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        TrackerError::DateParse(format!("{} (no such day {}-{:02}-{:02})", token, year, month, day))
    })?;
    start_of_day(date, now, token).map(Some)
}

/// Splits on the first separator present, in [`MONTH_DAY_SEPARATORS`] order.
fn split_month_day(token: &str) -> Option<(u32, u32)> {
    let separator = MONTH_DAY_SEPARATORS
        .iter()
        .copied()
        .find(|sep| token.contains(*sep))?;

    let (month, day) = token.split_once(separator)?;
    if !is_digits(month) || !is_digits(day) {
        return None;
    }

    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((month, day))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn start_of_day<Tz: TimeZone>(day: NaiveDate, now: &DateTime<Tz>, token: &str) -> Result<DateTime<Tz>> {
    now.timezone()
        .from_local_datetime(&day.and_time(NaiveTime::MIN))
        .earliest()
        .ok_or_else(|| TrackerError::DateParse(format!("{} (midnight does not exist on {})", token, day)))
}

fn out_of_range(token: &str) -> TrackerError {
    TrackerError::DateParse(format!("{} (out of range)", token))
}
