//! Time parsing and arithmetic helpers.

use crate::{EdalError, EdalResult};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse an ISO 8601 instant.
///
/// Supports:
/// - Full datetime with offset: "1994-02-02T12:00:00Z"
/// - Datetime without offset (assumed UTC): "1994-02-02T12:00:00"
/// - Date only (midnight UTC): "1994-02-02"
pub fn parse_iso8601(s: &str) -> EdalResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&ndt));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&ndt));
        }
    }

    Err(EdalError::invalid_parameter("time", format!("invalid ISO 8601 time '{s}'")))
}

/// Parse a comma-separated list of ISO 8601 instants.
pub fn parse_time_list(s: &str) -> EdalResult<Vec<DateTime<Utc>>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',').map(parse_iso8601).collect()
}

/// The instant halfway between `a` and `b`.
pub fn midpoint(a: DateTime<Utc>, b: DateTime<Utc>) -> DateTime<Utc> {
    shift_saturating(a, (b - a) / 2)
}

/// `t + delta`, saturating at the ends of the representable range.
pub fn shift_saturating(t: DateTime<Utc>, delta: Duration) -> DateTime<Utc> {
    t.checked_add_signed(delta).unwrap_or(if delta < Duration::zero() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_iso8601() {
        let dt = parse_iso8601("1994-02-02T12:00:00Z").unwrap();
        assert_eq!(dt.year(), 1994);
        assert_eq!(dt.month(), 2);
        assert_eq!(dt.day(), 2);
        assert_eq!(dt.hour(), 12);

        assert_eq!(parse_iso8601("1994-02-02T12:00:00").unwrap(), dt);
        assert_eq!(parse_iso8601("1994-02-02").unwrap().hour(), 0);
        assert!(parse_iso8601("not a time").is_err());
    }

    #[test]
    fn test_parse_time_list() {
        let times = parse_time_list("1994-02-02T12:00:00Z, 1994-02-03T12:00:00Z").unwrap();
        assert_eq!(times.len(), 2);
        assert!(parse_time_list("").unwrap().is_empty());
    }

    #[test]
    fn test_midpoint() {
        let a = parse_iso8601("1994-02-02T12:00:00Z").unwrap();
        let b = parse_iso8601("1994-02-03T12:00:00Z").unwrap();
        assert_eq!(midpoint(a, b), parse_iso8601("1994-02-03T00:00:00Z").unwrap());
        assert_eq!(midpoint(b, a), midpoint(a, b));
    }

    #[test]
    fn test_shift_saturates() {
        let max = DateTime::<Utc>::MAX_UTC;
        let min = DateTime::<Utc>::MIN_UTC;
        assert_eq!(shift_saturating(max, Duration::days(1)), max);
        assert_eq!(shift_saturating(min, Duration::days(-1)), min);
        assert_eq!(
            shift_saturating(max, Duration::days(-1)),
            max - Duration::days(1)
        );
        assert_eq!(midpoint(min, max), shift_saturating(min, (max - min) / 2));
    }
}
