use super::entities::{DopingFlag, PlottablePoint, RaceDuration, RaceRecord, Year};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;

/// Parse a `"MM:SS"` race time.
///
/// Exactly two `:`-separated unsigned integers are accepted. Seconds above 59
/// are not rejected, they carry into the minute like the calendar constructor.
pub fn parse_race_time(raw: &str) -> Option<RaceDuration> {
    let mut parts = raw.split(':');
    let minutes = parts.next()?.parse::<u32>().ok()?;
    let seconds = parts.next()?.parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(RaceDuration::from_minutes_seconds(minutes, seconds))
}

/// Turn fetched records into points, preserving order.
///
/// The first record with an unreadable `Time` aborts the whole batch.
pub fn normalize(records: &[RaceRecord]) -> AppResult<Vec<PlottablePoint>> {
    let points = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let duration = parse_race_time(&record.time).ok_or_else(|| AppError::MalformedTime {
                index,
                raw: record.time.clone(),
            })?;
            Ok(PlottablePoint {
                year: Year::new(record.year),
                duration,
                doping_flag: DopingFlag::from_description(&record.doping),
                record: record.clone(),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    crate::log_debug!(LogComponent::Domain("RaceData"), "normalized {} records", points.len());

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_components() {
        let d = parse_race_time("36:40").unwrap();
        assert_eq!(d.minute_of_hour(), 36);
        assert_eq!(d.second_of_minute(), 40);
    }

    #[test]
    fn rejects_wrong_component_count() {
        assert!(parse_race_time("36").is_none());
        assert!(parse_race_time("1:36:40").is_none());
        assert!(parse_race_time("").is_none());
    }

    #[test]
    fn rejects_non_numeric_components() {
        assert!(parse_race_time("ab:12").is_none());
        assert!(parse_race_time("12:-3").is_none());
        assert!(parse_race_time("12:").is_none());
    }

    #[test]
    fn malformed_time_names_the_record() {
        let records = vec![
            RaceRecord::new("A", "FRA", 1994, "36:40", ""),
            RaceRecord::new("B", "ITA", 1995, "36x41", ""),
        ];
        let err = normalize(&records).unwrap_err();
        assert_eq!(err, AppError::MalformedTime { index: 1, raw: "36x41".into() });
    }
}
