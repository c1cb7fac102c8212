use chrono::{DateTime, Utc};

/// Long form used by the detail view, e.g. "Friday, June 21, 2024".
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Compact form used in the city list, e.g. "(06/21/2024)".
pub fn format_date_short(date: &DateTime<Utc>) -> String {
    date.format("(%m/%d/%Y)").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn long_and_short_forms() {
        let date = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        assert_eq!(format_date(&date), "Friday, June 21, 2024");
        assert_eq!(format_date_short(&date), "(06/21/2024)");
    }
}
