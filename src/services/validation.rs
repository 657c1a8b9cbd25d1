use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::NewTodoRequest;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `yyyy-MM-dd` date and returns it in canonical form.
///
/// The year must be exactly four digits; chrono alone would accept a sign or
/// a longer year.
pub fn normalize_due_date(input: &str) -> Result<String, AppError> {
    let bytes = input.as_bytes();
    let four_digit_year = bytes.len() > 4
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-';
    if !four_digit_year {
        return Err(AppError::invalid_date());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .map_err(|_| AppError::invalid_date())
}

/// Names of required create fields that are absent or empty.
pub fn missing_required_fields(req: &NewTodoRequest) -> Vec<&'static str> {
    [
        ("todo", &req.todo),
        ("status", &req.status),
        ("priority", &req.priority),
        ("category", &req.category),
    ]
    .into_iter()
    .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
    .map(|(name, _)| name)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_dates() {
        assert_eq!(normalize_due_date("2024-02-29").unwrap(), "2024-02-29");
    }

    #[test]
    fn pads_short_month_and_day() {
        assert_eq!(normalize_due_date("2024-3-7").unwrap(), "2024-03-07");
    }

    #[test]
    fn rejects_invalid_dates() {
        for input in [
            "2024-13-40",
            "2023-02-29",
            "01/02/2024",
            "tomorrow",
            "",
            "-001-01-01",
            "+2024-01-01",
            "12024-01-01",
            "924-01-01",
        ] {
            let err = normalize_due_date(input).expect_err(input);
            assert!(matches!(err, AppError::Validation(_)), "{input}");
        }
    }

    #[test]
    fn lists_missing_fields() {
        let req = NewTodoRequest {
            todo: Some("Buy milk".to_string()),
            status: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            missing_required_fields(&req),
            ["status", "priority", "category"]
        );
    }

    #[test]
    fn nothing_missing() {
        let req = NewTodoRequest {
            todo: Some("Buy milk".to_string()),
            status: Some("TO DO".to_string()),
            priority: Some("HIGH".to_string()),
            category: Some("Shopping".to_string()),
            ..Default::default()
        };
        assert!(missing_required_fields(&req).is_empty());
    }
}
