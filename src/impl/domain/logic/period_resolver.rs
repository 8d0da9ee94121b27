use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::entities::{MonthField, ReportMode};

// Three-letter prefixes, Spanish first, then English where it differs.
const MONTH_PREFIXES: [(&str, u32); 17] = [
    ("ene", 1),
    ("feb", 2),
    ("mar", 3),
    ("abr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("ago", 8),
    ("sep", 9),
    ("set", 9),
    ("oct", 10),
    ("nov", 11),
    ("dic", 12),
    ("jan", 1),
    ("apr", 4),
    ("aug", 8),
    ("dec", 12),
];

// "3", "03", "2025-03", "03/2025".
static NUMERIC_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:\d{4})[-/])?(\d{1,2})(?:[-/](?:\d{4}))?$")
        .expect("numeric month pattern is valid")
});

pub struct PeriodResolver;

impl PeriodResolver {
    /// Resolves a month label to 1..=12. Accepts localized names (full or
    /// abbreviated, matched on the first three letters, case-insensitive) and
    /// numeric forms. `None` when the label can't be interpreted.
    pub fn month_index(label: &str) -> Option<u32> {
        let trimmed = label.trim();
        if let Some(captures) = NUMERIC_MONTH.captures(trimmed) {
            return captures[1]
                .parse::<u32>()
                .ok()
                .filter(|m| (1..=12).contains(m));
        }
        let prefix: String = trimmed
            .chars()
            .flat_map(char::to_lowercase)
            .take(3)
            .collect();
        if prefix.chars().count() < 3 {
            return None;
        }
        MONTH_PREFIXES
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, m)| *m)
    }

    pub fn resolve(field: &MonthField) -> Option<u32> {
        match field {
            MonthField::Label(label) => Self::month_index(label),
            MonthField::Number(n) => u32::try_from(*n).ok().filter(|m| (1..=12).contains(m)),
        }
    }

    /// Whether a canonical month falls inside the reporting window.
    pub fn month_in_window(month: u32, boundary_month: u32, mode: ReportMode) -> bool {
        match mode {
            ReportMode::Month => month == boundary_month,
            ReportMode::Accumulated => (1..=boundary_month).contains(&month),
        }
    }

    pub fn in_window(date: NaiveDate, year: i32, boundary_month: u32, mode: ReportMode) -> bool {
        date.year() == year && Self::month_in_window(date.month(), boundary_month, mode)
    }

    /// Months covered by the window, in order.
    pub fn window_months(boundary_month: u32, mode: ReportMode) -> std::ops::RangeInclusive<u32> {
        match mode {
            ReportMode::Month => boundary_month..=boundary_month,
            ReportMode::Accumulated => 1..=boundary_month,
        }
    }
}
