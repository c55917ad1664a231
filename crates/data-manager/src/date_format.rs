//! Date handling for series labels
//!
//! Label formats are configured with .NET custom date patterns
//! (`dd.MM.yyyy HH:mm`) and are translated to strftime before use.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use radar_chart_shared::CellValue;

/// Used when neither the configuration nor the column carries a pattern
pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d";

/// Translate a .NET date pattern to strftime.
///
/// Returns `None` for a blank pattern or one without any date/time token.
pub fn translate_dotnet_pattern(pattern: &str) -> Option<String> {
    let trimmed = pattern.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.chars().count() == 1 {
        if let Some(standard) = standard_pattern(trimmed) {
            return Some(standard.to_string());
        }
    }

    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut has_token = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' | '"' => {
                i += 1;
                while i < chars.len() && chars[i] != c {
                    push_literal(&mut out, chars[i]);
                    i += 1;
                }
                // closing quote
                i += 1;
            }
            '\\' => {
                if let Some(&next) = chars.get(i + 1) {
                    push_literal(&mut out, next);
                }
                i += 2;
            }
            // custom single-specifier marker, e.g. "%d"
            '%' => i += 1,
            'y' | 'M' | 'd' | 'H' | 'h' | 'm' | 's' | 'f' | 'F' | 't' | 'z' => {
                let run = chars[i..].iter().take_while(|&&n| n == c).count();
                out.push_str(token(c, run));
                has_token = true;
                i += run;
            }
            other => {
                push_literal(&mut out, other);
                i += 1;
            }
        }
    }

    has_token.then_some(out)
}

fn token(c: char, run: usize) -> &'static str {
    match (c, run) {
        ('y', 1) => "%-y",
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d', 1) => "%-d",
        ('d', 2) => "%d",
        ('d', 3) => "%a",
        ('d', _) => "%A",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('f' | 'F', 1..=3) => "%3f",
        ('f' | 'F', 4..=6) => "%6f",
        ('f' | 'F', _) => "%9f",
        ('t', _) => "%p",
        ('z', 1 | 2) => "%z",
        ('z', _) => "%:z",
        _ => "",
    }
}

/// Single-letter .NET standard formats
fn standard_pattern(pattern: &str) -> Option<&'static str> {
    match pattern {
        "d" => Some("%x"),
        "D" => Some("%A, %-d %B %Y"),
        "t" => Some("%H:%M"),
        "T" => Some("%X"),
        "g" => Some("%x %H:%M"),
        "G" => Some("%x %X"),
        "M" | "m" => Some("%-d %B"),
        "Y" | "y" => Some("%B %Y"),
        "s" => Some("%Y-%m-%dT%H:%M:%S"),
        "u" => Some("%Y-%m-%d %H:%M:%SZ"),
        _ => None,
    }
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

/// Read a cell as a date-time.
///
/// Accepts native dates, RFC 3339 / ISO 8601 text (wall-clock time as
/// written), plain `YYYY-MM-DD` text and epoch milliseconds.
pub fn parse_cell_date(value: &CellValue) -> Option<NaiveDateTime> {
    match value {
        CellValue::Date(date) => Some(*date),
        CellValue::Number(millis) if millis.is_finite() => {
            DateTime::from_timestamp_millis(*millis as i64).map(|dt| dt.naive_utc())
        }
        CellValue::Text(text) => parse_date_text(text.trim()),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
