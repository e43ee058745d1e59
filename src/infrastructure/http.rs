use crate::domain::{
    errors::{AppError, AppResult, FetchError},
    logging::{LogComponent, get_logger},
    race_data::{RaceDataRepository, RaceRecord},
};
use gloo::net::http::Request;

/// Decode the dataset body: a JSON array of race records.
pub fn parse_dataset(body: &str) -> AppResult<Vec<RaceRecord>> {
    let records: Vec<RaceRecord> = serde_json::from_str(body)?;
    Ok(records)
}

/// HTTP client for the published cyclist dataset
#[derive(Clone, Default)]
pub struct RaceDataClient;

impl RaceDataClient {
    pub fn new() -> Self {
        Self
    }
}

impl RaceDataRepository for RaceDataClient {
    async fn fetch_records(&self, url: &str) -> AppResult<Vec<RaceRecord>> {
        get_logger().info(
            LogComponent::Infrastructure("RaceDataClient"),
            &format!("📡 GET {url}"),
        );

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(format!("{e:?}")))?;

        if !response.ok() {
            return Err(AppError::Fetch(FetchError::Status(response.status())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(format!("Failed to read response: {e:?}")))?;
        let records = parse_dataset(&body)?;

        get_logger().info(
            LogComponent::Infrastructure("RaceDataClient"),
            &format!("✅ Loaded {} race records", records.len()),
        );

        Ok(records)
    }
}

/// Dataset already held in memory, e.g. passed in by a host page.
#[derive(Clone, Debug)]
pub struct StaticRaceData {
    body: String,
}

impl StaticRaceData {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl RaceDataRepository for StaticRaceData {
    async fn fetch_records(&self, _url: &str) -> AppResult<Vec<RaceRecord>> {
        parse_dataset(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"Time": "36:50", "Place": 1, "Seconds": 2210, "Name": "Marco Pantani",
         "Year": 1995, "Nationality": "ITA",
         "Doping": "Alleged drug use during 1995 due to high hematocrit levels",
         "URL": "https://en.wikipedia.org/wiki/Marco_Pantani#Alleged_drug_use"},
        {"Time": "39:23", "Name": "Nairo Quintana", "Year": 2015,
         "Nationality": "COL", "Doping": ""}
    ]"#;

    #[test]
    fn parses_required_and_optional_fields() {
        let records = parse_dataset(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].place, Some(1));
        assert_eq!(records[0].seconds, Some(2210));
        assert_eq!(records[1].url, None);
        assert_eq!(records[1].doping, "");
    }

    #[test]
    fn missing_required_field_is_a_fetch_error() {
        let err = parse_dataset(r#"[{"Time": "36:50", "Name": "X", "Year": 1995, "Doping": ""}]"#)
            .unwrap_err();
        match err {
            AppError::Fetch(FetchError::Parse(msg)) => assert!(msg.contains("Nationality"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_array_payload_is_rejected() {
        assert!(matches!(
            parse_dataset(r#"{"Time": "36:50"}"#),
            Err(AppError::Fetch(FetchError::Parse(_)))
        ));
        assert!(matches!(parse_dataset("<html>"), Err(AppError::Fetch(FetchError::Parse(_)))));
    }

    #[test]
    fn static_source_ignores_url() {
        let source = StaticRaceData::new(SAMPLE);
        let records = futures::executor::block_on(source.fetch_records("unused")).unwrap();
        assert_eq!(records[1].name, "Nairo Quintana");
    }
}
