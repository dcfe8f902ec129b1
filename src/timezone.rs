use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum TimezoneError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

/// Stored instants are naive UTC; tag them before any conversion.
pub fn coerce_utc(dt: NaiveDateTime) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(dt, Utc)
}

/// Re-expresses a stored UTC instant in the given IANA timezone.
pub fn convert_to_timezone(dt: NaiveDateTime, target_tz: &str) -> Result<DateTime<Tz>, TimezoneError> {
    let tz: Tz = target_tz
        .parse()
        .map_err(|_| TimezoneError::InvalidTimezone(target_tz.to_string()))?;
    Ok(coerce_utc(dt).with_timezone(&tz))
}

/// ISO-8601 rendering of an instant in `target_tz`, carrying that zone's UTC
/// offset at the instant. On an unrecognized zone the failure is logged and the
/// original instant is rendered as UTC instead; callers never see the error.
pub fn to_timezone_string(dt: NaiveDateTime, target_tz: &str) -> String {
    match convert_to_timezone(dt, target_tz) {
        Ok(converted) => converted.to_rfc3339(),
        Err(err) => {
            error!("Timezone conversion failed: {err}");
            coerce_utc(dt).to_rfc3339()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_convert_kolkata_offset() {
        let dt = instant(2025, 7, 16, 1, 30);
        let converted = convert_to_timezone(dt, "Asia/Kolkata").unwrap();
        assert_eq!(converted.to_rfc3339(), "2025-07-16T07:00:00+05:30");
    }

    #[test]
    fn test_convert_invalid_zone() {
        let err = convert_to_timezone(instant(2025, 7, 16, 1, 30), "Mars/Olympus").unwrap_err();
        assert!(matches!(err, TimezoneError::InvalidTimezone(_)));
    }

    #[test]
    fn test_to_string_falls_back_to_utc() {
        let dt = instant(2025, 7, 16, 1, 30);
        assert_eq!(
            to_timezone_string(dt, "Not/AZone"),
            "2025-07-16T01:30:00+00:00"
        );
    }

    #[test]
    fn test_daylight_saving_offsets() {
        let winter = to_timezone_string(instant(2025, 1, 15, 12, 0), "America/New_York");
        let summer = to_timezone_string(instant(2025, 7, 15, 12, 0), "America/New_York");
        assert!(winter.ends_with("-05:00"));
        assert!(summer.ends_with("-04:00"));
    }

    #[test]
    fn test_round_trip_preserves_instant() {
        let dt = instant(2025, 7, 16, 1, 30);
        let rendered = to_timezone_string(dt, "Australia/Sydney");
        let reparsed = DateTime::parse_from_rfc3339(&rendered).unwrap();
        assert_eq!(reparsed.with_timezone(&Utc), coerce_utc(dt));
    }
}
