use chrono::{DateTime, Local, TimeZone};
use colored::*;
use std::fmt::Display;
use trackerapp::api::{CmdMessage, MessageLevel};
use trackerapp::model::Record;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 5;
const WHEN_WIDTH: usize = 16;
const TIME_WIDTH: usize = 14;
const TAGS_WIDTH: usize = 24;
const WHEN_FORMAT: &str = "%Y-%m-%d %H:%M";
const NO_TAGS: &str = "no tags";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_records(records: &[Record], now: &DateTime<Local>) {
    for line in record_lines(records, now) {
        println!("{}", line);
    }
}

pub fn print_record_detail(record: &Record, now: &DateTime<Local>) {
    for line in detail_lines(record, now) {
        println!("{}", line);
    }
}

fn record_lines<Tz: TimeZone>(records: &[Record], now: &DateTime<Tz>) -> Vec<String>
where
    Tz::Offset: Display,
{
    let tz = now.timezone();
    records
        .iter()
        .map(|record| {
            let id = format!("{:>width$}", record.id, width = ID_WIDTH);
            let when = format_when(record.timestamp, &tz);
            let tags = pad_to_width(&truncate_to_width(&tags_label(record), TAGS_WIDTH), TAGS_WIDTH);
            let ago = format!(
                "{:>width$}",
                format_time_ago(record.timestamp, now.timestamp()),
                width = TIME_WIDTH
            );

            // 4 two-space gaps between the five columns
            let fixed = ID_WIDTH + WHEN_WIDTH + TAGS_WIDTH + TIME_WIDTH + 8;
            let available = LINE_WIDTH.saturating_sub(fixed);
            let title = pad_to_width(&truncate_to_width(&record.title, available), available);

            let tags_colored = if record.tags.is_empty() {
                tags.dimmed()
            } else {
                tags.cyan()
            };

            format!(
                "{}  {}  {}  {}  {}",
                id.yellow(),
                when,
                title,
                tags_colored,
                ago.dimmed()
            )
        })
        .collect()
}

fn detail_lines<Tz: TimeZone>(record: &Record, now: &DateTime<Tz>) -> Vec<String>
where
    Tz::Offset: Display,
{
    vec![
        format!("{} {}", record.id.to_string().yellow(), record.title.bold()),
        "--------------------------------".to_string(),
        format!(
            "when: {} ({})",
            format_when(record.timestamp, &now.timezone()),
            format_time_ago(record.timestamp, now.timestamp())
        ),
        format!("tags: {}", tags_label(record)),
    ]
}

fn tags_label(record: &Record) -> String {
    if record.tags.is_empty() {
        NO_TAGS.to_string()
    } else {
        record.tags.join(", ")
    }
}

fn format_when<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    match tz.timestamp_opt(timestamp, 0).single() {
        Some(dt) => dt.format(WHEN_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}

fn format_time_ago(timestamp: i64, now: i64) -> String {
    let delta = now - timestamp;
    let mut formatter = timeago::Formatter::new();
    if delta < 0 {
        formatter.ago("ahead");
    }
    formatter.convert(std::time::Duration::from_secs(delta.unsigned_abs()))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn plain() {
        colored::control::set_override(false);
    }

    fn record(id: u64, title: &str, tags: &[&str], timestamp: i64) -> Record {
        let mut r = Record::new(title, tags.iter().map(|t| t.to_string()).collect(), timestamp);
        r.id = id;
        r
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("a bit too long", 8), "a bit t…");
        assert_eq!(truncate_to_width("日本語テキスト", 6), "日本…");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("日本", 5), "日本 ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }

    #[test]
    fn test_format_when_uses_zone() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 12, 22, 30, 0).unwrap().timestamp();
        assert_eq!(format_when(ts, &Utc), "2024-06-12 22:30");
        let plus_two = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_when(ts, &plus_two), "2024-06-13 00:30");
    }

    #[test]
    fn test_format_time_ago_past_and_future() {
        assert_eq!(format_time_ago(0, 3 * 3600), "3 hours ago");
        assert_eq!(format_time_ago(2 * 86_400, 0), "2 days ahead");
    }

    #[test]
    fn test_tags_label() {
        assert_eq!(tags_label(&record(1, "t", &[], 0)), "no tags");
        assert_eq!(tags_label(&record(1, "t", &["a", "b"], 0)), "a, b");
    }

    #[test]
    fn test_record_lines_have_fixed_width() {
        plain();
        let now = Utc.with_ymd_and_hms(2024, 6, 12, 12, 0, 0).unwrap();
        let records = vec![
            record(12, "a rather long title that will certainly not fit in the space left", &["x"], now.timestamp() - 60),
            record(3, "short", &[], now.timestamp() - 7200),
        ];
        let lines = record_lines(&records, &now);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line.width(), LINE_WIDTH, "line: {:?}", line);
        }
        assert!(lines[0].starts_with("   12  2024-06-12 11:59  a rather"));
        assert!(lines[0].contains('…'));
        assert!(lines[1].contains("no tags"));
        assert!(lines[1].ends_with("2 hours ago"));
    }

    #[test]
    fn test_detail_lines() {
        plain();
        let now = Utc.with_ymd_and_hms(2024, 6, 12, 12, 0, 0).unwrap();
        let lines = detail_lines(&record(7, "standup", &["work"], now.timestamp()), &now);
        assert_eq!(lines[0], "7 standup");
        assert_eq!(lines[2], "when: 2024-06-12 12:00 (now)");
        assert_eq!(lines[3], "tags: work");
    }
}
