use serde::{Deserialize, Serialize};

/// Selector options for the educational-level control.
pub const EDUCATIONAL_LEVELS: &[&str] = &[
    "High School or Less",
    "Some College",
    "Associate's Degree",
    "Bachelor's Degree",
    "Master's Degree",
    "Doctorate",
];

/// A participant's registration details, assembled from the intake form at
/// submit time and sent to the backend as a single JSON document.
///
/// The serialized payload always carries exactly these eleven keys — none is
/// optional or omitted, even when the corresponding control was left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    /// ISO 8601 date (`YYYY-MM-DD`), read verbatim from the date control.
    pub birth_date: String,
    pub birth_location: String,
    pub primary_residence: String,
    pub current_location: String,
    pub college: String,
    pub educational_level: String,
    /// Annual parental income in whole dollars. `None` means the raw input
    /// was not a valid integer and serializes as JSON `null`, so the backend
    /// sees an explicit marker instead of a fabricated zero.
    pub parental_income: Option<i64>,
    pub primary_interest: String,
    pub profession: String,
    pub religion: String,
    pub race: String,
}

/// Convert the raw income input to a whole-dollar amount.
///
/// Strict base-10 parsing of the trimmed text; anything else ("abc", "12.5",
/// "") yields `None`. The unparseable case is still submitted — the record
/// carries the marker rather than rejecting the form.
pub fn parse_parental_income(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_record() -> RegistrationRecord {
        RegistrationRecord {
            birth_date: "1994-06-02".into(),
            birth_location: "Lisbon".into(),
            primary_residence: "Porto".into(),
            current_location: "Berlin".into(),
            college: "University of Porto".into(),
            educational_level: "Master's Degree".into(),
            parental_income: Some(52_000),
            primary_interest: "Philosophy".into(),
            profession: "Engineer".into(),
            religion: "None".into(),
            race: "White".into(),
        }
    }

    #[test]
    fn payload_has_exactly_eleven_keys() {
        let value = serde_json::to_value(sample_record()).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "birth_date",
                "birth_location",
                "college",
                "current_location",
                "educational_level",
                "parental_income",
                "primary_interest",
                "primary_residence",
                "profession",
                "race",
                "religion",
            ]
        );
    }

    #[test]
    fn empty_fields_are_still_serialized() {
        let record = RegistrationRecord {
            birth_date: String::new(),
            birth_location: String::new(),
            primary_residence: String::new(),
            current_location: String::new(),
            college: String::new(),
            educational_level: String::new(),
            parental_income: None,
            primary_interest: String::new(),
            profession: String::new(),
            religion: String::new(),
            race: String::new(),
        };
        let value = serde_json::to_value(record).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 11);
        assert_eq!(value["birth_date"], "");
        assert!(value["parental_income"].is_null());
    }

    #[test]
    fn unparseable_income_serializes_as_null() {
        let mut record = sample_record();
        record.parental_income = parse_parental_income("abc");
        let value = serde_json::to_value(record).unwrap();
        assert!(value["parental_income"].is_null());
    }

    #[test]
    fn numeric_income_serializes_as_number() {
        let value = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(value["parental_income"], 52_000);
    }

    #[test]
    fn income_parsing_accepts_trimmed_integers() {
        assert_eq!(parse_parental_income("52000"), Some(52_000));
        assert_eq!(parse_parental_income("  52000  "), Some(52_000));
        assert_eq!(parse_parental_income("-100"), Some(-100));
        assert_eq!(parse_parental_income("+7"), Some(7));
    }

    #[test]
    fn income_parsing_rejects_non_integers() {
        assert_eq!(parse_parental_income("abc"), None);
        assert_eq!(parse_parental_income(""), None);
        assert_eq!(parse_parental_income("12.5"), None);
        assert_eq!(parse_parental_income("40k"), None);
    }

    #[test]
    fn record_roundtrips_through_json() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: RegistrationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
