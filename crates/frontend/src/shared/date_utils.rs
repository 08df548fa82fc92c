/// Utilities for date formatting
///
/// Dates are shown in UTC so that what the table shows and what the date
/// search matches are the same calendar day.
use chrono::{DateTime, Utc};

/// Placeholder for missing values in tables
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a timestamp as DD/MM/YYYY
/// Example: 2024-03-15T14:02:26Z -> "15/03/2024"
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y").to_string()
}

/// Same as [`format_date`], "N/A" when absent
pub fn format_date_or_na(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(format_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 14, 2, 26).unwrap();
        assert_eq!(format_date(&dt), "05/03/2024");
    }

    #[test]
    fn test_missing_date() {
        assert_eq!(format_date_or_na(None), "N/A");
    }
}
