//! Localization capability injected by the host

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Locale, NaiveDateTime, TimeZone, Utc};

use crate::date_format::translate_dotnet_pattern;

/// Date formatting under the host's active UI locale
pub trait Localizer {
    /// Active locale tag, e.g. `cs-CZ`
    fn locale(&self) -> &str;

    /// Render `value` through a strftime `pattern`
    fn format_date(&self, value: &NaiveDateTime, pattern: &str) -> String;

    /// Translate a configured .NET date pattern to strftime
    fn translate_date_pattern(&self, pattern: &str) -> Option<String> {
        translate_dotnet_pattern(pattern)
    }
}

/// [`Localizer`] backed by chrono's localized formatting
#[derive(Debug, Clone)]
pub struct ChronoLocalizer {
    tag: String,
    locale: Locale,
}

impl ChronoLocalizer {
    /// Accepts `cs-CZ` and `cs_CZ`; unknown tags format as POSIX
    pub fn new(tag: &str) -> Self {
        let normalized = tag.trim().replace('-', "_");
        let locale = Locale::try_from(normalized.as_str()).unwrap_or_else(|_| {
            log::debug!("Unknown locale {tag:?}, using POSIX date names");
            Locale::POSIX
        });

        Self {
            tag: tag.to_string(),
            locale,
        }
    }
}

impl Default for ChronoLocalizer {
    fn default() -> Self {
        Self::new("en-US")
    }
}

impl Localizer for ChronoLocalizer {
    fn locale(&self) -> &str {
        &self.tag
    }

    fn format_date(&self, value: &NaiveDateTime, pattern: &str) -> String {
        let fallback = || value.format("%Y-%m-%dT%H:%M:%S").to_string();

        let items = StrftimeItems::new_with_locale(pattern, self.locale);
        if items.clone().any(|item| matches!(item, Item::Error)) {
            log::warn!("Invalid date pattern {pattern:?}, using ISO format");
            return fallback();
        }

        let mut out = String::new();
        let formatted = Utc
            .from_utc_datetime(value)
            .format_localized_with_items(items, self.locale);
        match write!(out, "{formatted}") {
            Ok(()) => out,
            Err(_) => {
                log::warn!("Cannot format {value} with pattern {pattern:?}");
                fallback()
            }
        }
    }
}
