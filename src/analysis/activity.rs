use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::analysis::{RepositoryInfo, Timestamp};

/// Epoch values below this are seconds, anything larger is milliseconds.
const EPOCH_MILLIS_CUTOFF: f64 = 1e11;

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn epoch_to_datetime(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    let millis = if value.abs() < EPOCH_MILLIS_CUTOFF {
        value * 1000.0
    } else {
        value
    };
    DateTime::<Utc>::from_timestamp_millis(millis.round() as i64)
}

impl Timestamp {
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Text(raw) => parse_timestamp(raw),
            Self::Epoch(value) => epoch_to_datetime(*value),
        }
    }
}

/// Later of `updated_at` / `pushed_at`. Unparseable stamps are ignored, so a
/// repository with neither usable stamp has no known last activity.
pub fn last_activity(repo: &RepositoryInfo) -> Option<DateTime<Utc>> {
    [repo.updated_at.as_ref(), repo.pushed_at.as_ref()]
        .into_iter()
        .flatten()
        .filter_map(Timestamp::to_datetime)
        .max()
}

/// Exact time elapsed since the last activity, `None` when unknown.
pub fn inactive_for(repo: &RepositoryInfo, now: DateTime<Utc>) -> Option<Duration> {
    last_activity(repo).map(|last| now - last)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn days(info: &RepositoryInfo, now: DateTime<Utc>) -> Option<i64> {
        inactive_for(info, now).map(|elapsed| elapsed.num_days())
    }

    fn repo(updated_at: Option<&str>, pushed_at: Option<&str>) -> RepositoryInfo {
        RepositoryInfo {
            updated_at: updated_at.map(Timestamp::from),
            pushed_at: pushed_at.map(Timestamp::from),
            ..RepositoryInfo::default()
        }
    }

    #[test]
    fn picks_the_later_stamp() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let info = repo(Some("2024-01-01T00:00:00Z"), Some("2024-05-22T00:00:00Z"));
        assert_eq!(days(&info, now), Some(10));
    }

    #[test]
    fn missing_or_garbage_stamps_are_unknown() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(days(&repo(None, None), now), None);
        assert_eq!(days(&repo(Some("yesterday"), None), now), None);
    }

    #[test]
    fn accepts_plain_dates_and_offsets() {
        assert_eq!(
            parse_timestamp("2024-03-01"),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single()
        );
        assert_eq!(
            parse_timestamp("2024-03-01T02:00:00+02:00"),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single()
        );
    }

    #[test]
    fn epoch_numbers_in_seconds_or_millis() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).single();
        assert_eq!(Timestamp::Epoch(1_714_521_600.0).to_datetime(), expected);
        assert_eq!(Timestamp::Epoch(1_714_521_600_000.0).to_datetime(), expected);
        assert_eq!(Timestamp::Epoch(f64::NAN).to_datetime(), None);
    }

    #[test]
    fn inactivity_keeps_partial_days() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let info = repo(Some("2024-03-03T00:00:00Z"), None);
        let elapsed = inactive_for(&info, now).expect("known activity");
        assert_eq!(elapsed, Duration::days(90) + Duration::hours(12));
        assert_eq!(days(&info, now), Some(90));
    }
}
