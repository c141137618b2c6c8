//! Date parsing shared by the comparator and the date formatters.

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;

/// Accepted textual date layouts, tried in order. The flag marks layouts
/// that carry a time of day.
const DATE_FORMATS: &[(&str, bool)] = &[
    ("%Y-%m-%d", false),
    ("%Y-%m-%d %H:%M:%S", true),
    ("%m/%d/%Y", false),
    ("%m-%d-%Y", false),
    ("%Y/%m/%d", false),
];

/// Layouts the `date()` formatter recognises when reformatting text.
const DISPLAY_DATE_FORMATS: &[(&str, bool)] = &[
    ("%Y-%m-%d", false),
    ("%m/%d/%Y", false),
    ("%Y-%m-%d %H:%M:%S", true),
];

pub(crate) const DATE_LAYOUT: &str = "%Y-%m-%d";
pub(crate) const DATETIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses `text` against the accepted date layouts. First match wins.
///
/// Date-only layouts resolve to midnight.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    parse_with(text, DATE_FORMATS)
}

pub(crate) fn parse_display_date(text: &str) -> Option<NaiveDateTime> {
    parse_with(text, DISPLAY_DATE_FORMATS)
}

pub(crate) fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), DATETIME_LAYOUT).ok()
}

fn parse_with(text: &str, layouts: &[(&str, bool)]) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    layouts.iter().find_map(|(layout, has_time)| {
        if *has_time {
            NaiveDateTime::parse_from_str(text, layout).ok()
        } else {
            NaiveDate::parse_from_str(text, layout)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        }
    })
}
