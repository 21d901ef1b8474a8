//! Utilities for date formatting
//!
//! The API speaks ISO dates (`2025-06-29`, sometimes with a time part); the UI
//! shows them the Brazilian way.

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2025-06-29" or "2025-06-29T14:02:26" -> "29/06/2025"
pub fn format_date_br(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    let date_part = date_part.split(' ').next().unwrap_or(date_part);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Same as [`format_date_br`] for optional API fields, empty when absent
pub fn format_optional_date_br(date_str: Option<&str>) -> String {
    date_str.map(format_date_br).unwrap_or_default()
}

/// Today's date as YYYY-MM-DD, used for export filenames
pub fn today_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_br() {
        assert_eq!(format_date_br("2025-06-29"), "29/06/2025");
        assert_eq!(format_date_br("2025-06-29T14:02:26.123Z"), "29/06/2025");
        assert_eq!(format_date_br("2025-01-05 08:00:00"), "05/01/2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date_br("invalid"), "invalid");
        assert_eq!(format_optional_date_br(None), "");
    }

    #[test]
    fn test_today_iso_shape() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }
}
