use anyhow::{anyhow, Result};
use chrono::NaiveDate;

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// `"May"` / `"MAY"` / `"may"` → 5. Anything but a three-letter English abbreviation is `None`.
pub fn month_number(abbrev: &str) -> Option<u32> {
    let lower = abbrev.to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == lower)
        .map(|idx| idx as u32 + 1)
}

/// Build `YYYY-MM-DD` from a fixed year, a month abbreviation and a day field.
///
/// Missing or unrecognised month, or a missing day, gives `Ok(None)`.
/// A day that is not an integer, or a date the calendar does not have, is an error.
pub fn contact_date(year: i32, month: Option<&str>, day: Option<&str>) -> Result<Option<String>> {
    let (Some(month), Some(day)) = (month, day) else {
        return Ok(None);
    };
    let Some(m) = month_number(month) else {
        return Ok(None);
    };
    let d: u32 = day
        .trim()
        .parse()
        .map_err(|e| anyhow!("invalid day {:?}: {}", day, e))?;
    let date = NaiveDate::from_ymd_opt(year, m, d)
        .ok_or_else(|| anyhow!("no such date: {}-{:02}-{:02}", year, m, d))?;
    Ok(Some(date.format("%Y-%m-%d").to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lookup_is_case_insensitive() {
        assert_eq!(month_number("jan"), Some(1));
        assert_eq!(month_number("MAY"), Some(5));
        assert_eq!(month_number("Dec"), Some(12));
        assert_eq!(month_number("sept"), None);
        assert_eq!(month_number(""), None);
    }

    #[test]
    fn builds_padded_date() -> Result<()> {
        assert_eq!(
            contact_date(2022, Some("MAY"), Some("5"))?.as_deref(),
            Some("2022-05-05")
        );
        assert_eq!(
            contact_date(2022, Some("nov"), Some("21"))?.as_deref(),
            Some("2022-11-21")
        );
        Ok(())
    }

    #[test]
    fn missing_parts_are_missing_dates() -> Result<()> {
        assert_eq!(contact_date(2022, None, Some("5"))?, None);
        assert_eq!(contact_date(2022, Some("may"), None)?, None);
        assert_eq!(contact_date(2022, Some("foo"), Some("5"))?, None);
        Ok(())
    }

    #[test]
    fn impossible_dates_fail() {
        assert!(contact_date(2022, Some("feb"), Some("30")).is_err());
        assert!(contact_date(2022, Some("feb"), Some("five")).is_err());
    }
}
