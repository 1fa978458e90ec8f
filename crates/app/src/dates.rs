use chrono::Utc;

/// Current calendar date in ISO 8601 form (`YYYY-MM-DD`).
///
/// UTC, so the value matches what the hosting browser reports for "today"
/// in `toISOString` terms rather than drifting with the local offset.
pub fn today_iso_date() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
