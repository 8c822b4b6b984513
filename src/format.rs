//! Text formatting helpers shared by the templates.

use chrono::{DateTime, Utc};

/// Day/month/two-digit-year followed by 24h time, e.g. `19/03/19 00:00`.
pub const FULL_DATE_TIME: &str = "%d/%m/%y %H:%M";

/// Upper-case the first character and leave the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// Format a timestamp for the start/end inputs. Unset dates render empty.
pub fn to_full_date_time(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|date| date.format(FULL_DATE_TIME).to_string())
        .unwrap_or_default()
}
