//! Series label formatting and de-duplication

use radar_chart_shared::{CellValue, DataView, Property};

use crate::date_format::{parse_cell_date, DEFAULT_DATE_PATTERN};
use crate::localizer::Localizer;

/// Renders the display label of a row
pub struct LabelFormatter<'a, L: Localizer + ?Sized> {
    localizer: &'a L,
    label_format: Option<&'a str>,
}

impl<'a, L: Localizer + ?Sized> LabelFormatter<'a, L> {
    pub fn new(localizer: &'a L, label_format: Option<&'a str>) -> Self {
        Self {
            localizer,
            label_format,
        }
    }

    /// strftime pattern for date labels of `property`
    pub fn date_pattern(&self, property: &Property) -> String {
        self.label_format
            .and_then(|pattern| self.localizer.translate_date_pattern(pattern))
            .or_else(|| property.date_format.clone())
            .unwrap_or_else(|| DEFAULT_DATE_PATTERN.to_string())
    }

    pub fn format_label<V: DataView>(
        &self,
        table: &V,
        row: &V::Row,
        property: &Property,
    ) -> String {
        let value = table.cell_value(row, &property.id);

        if !property.property_type.is_date() {
            return value.map(CellValue::to_string).unwrap_or_default();
        }

        match value {
            None | Some(CellValue::Null) => String::new(),
            Some(cell) => match parse_cell_date(cell) {
                Some(date) => self.localizer.format_date(&date, &self.date_pattern(property)),
                None => {
                    log::warn!("Cell {cell:?} of date column {} is not a date", property.id);
                    cell.to_string()
                }
            },
        }
    }
}

/// Labels handed out during one render.
///
/// A label already seen N times gets an `(N)` suffix.
#[derive(Debug, Default)]
pub struct LabelTracker {
    labels: Vec<String>,
}

impl LabelTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unique(&mut self, label: String) -> String {
        let duplicates = self.labels.iter().filter(|seen| **seen == label).count();
        let label = if duplicates > 0 {
            format!("{label}({duplicates})")
        } else {
            label
        };
        self.labels.push(label.clone());
        label
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localizer::ChronoLocalizer;
    use chrono::NaiveDate;
    use radar_chart_shared::{PropertyType, TableSnapshot};

    #[test]
    fn test_duplicate_suffixes() {
        let mut tracker = LabelTracker::new();
        assert_eq!(tracker.unique("A".to_string()), "A");
        assert_eq!(tracker.unique("B".to_string()), "B");
        assert_eq!(tracker.unique("A".to_string()), "A(1)");
        assert_eq!(tracker.unique("A".to_string()), "A(2)");
        assert_eq!(tracker.labels(), ["A", "B", "A(1)", "A(2)"]);
    }

    #[test]
    fn test_suffixed_label_counts_separately() {
        let mut tracker = LabelTracker::new();
        tracker.unique("A".to_string());
        tracker.unique("A".to_string());
        assert_eq!(tracker.unique("A(1)".to_string()), "A(1)(1)");
    }

    #[test]
    fn test_text_labels() {
        let name = Property::new("Name", "Name", PropertyType::Text);
        let mut table = TableSnapshot::new(vec![name.clone()]);
        table.push_row([("Name", CellValue::from("Alice"))]);
        table.push_row([("Name", CellValue::Null)]);
        table.push_row([("Name", CellValue::Number(7.0))]);
        table.push_row(Vec::<(String, CellValue)>::new());

        let localizer = ChronoLocalizer::default();
        let formatter = LabelFormatter::new(&localizer, None);
        let labels: Vec<String> = table
            .rows
            .iter()
            .map(|row| formatter.format_label(&table, row, &name))
            .collect();

        assert_eq!(labels, vec!["Alice", "", "7", ""]);
    }

    #[test]
    fn test_date_pattern_preference() {
        let localizer = ChronoLocalizer::default();
        let born = Property::new("Born", "Born", PropertyType::Date).with_date_format("%m/%d/%Y");
        let bare = Property::new("Born", "Born", PropertyType::Date);

        let configured = LabelFormatter::new(&localizer, Some("dd.MM.yyyy"));
        assert_eq!(configured.date_pattern(&born), "%d.%m.%Y");

        let untranslatable = LabelFormatter::new(&localizer, Some(""));
        assert_eq!(untranslatable.date_pattern(&born), "%m/%d/%Y");

        let unset = LabelFormatter::new(&localizer, None);
        assert_eq!(unset.date_pattern(&born), "%m/%d/%Y");
        assert_eq!(unset.date_pattern(&bare), DEFAULT_DATE_PATTERN);
    }

    #[test]
    fn test_date_labels() {
        let born = Property::new("Born", "Born", PropertyType::Date).with_date_format("%m/%d/%Y");
        let mut table = TableSnapshot::new(vec![born.clone()]);
        let date = NaiveDate::from_ymd_opt(1990, 4, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        table.push_row([("Born", CellValue::Date(date))]);
        table.push_row([("Born", CellValue::from("1990-04-01T00:00:00"))]);
        table.push_row([("Born", CellValue::from("not a date"))]);
        table.push_row([("Born", CellValue::Null)]);

        let localizer = ChronoLocalizer::new("cs-CZ");
        let formatter = LabelFormatter::new(&localizer, None);
        let labels: Vec<String> = table
            .rows
            .iter()
            .map(|row| formatter.format_label(&table, row, &born))
            .collect();

        assert_eq!(labels, vec!["04/01/1990", "04/01/1990", "not a date", ""]);
    }
}
