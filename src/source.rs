//! Record sources
//!
//! This module handles:
//! - The embedded flight-log fixture
//! - JSON files on disk
//! - The SKYLinq REST backend over HTTP
//!
//! Every source yields records in the order the payload lists them. The
//! reporting pipeline does not care which one was used.

use crate::error::SourceError;
use crate::types::EventRecord;
use log::debug;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const USER_AGENT: &str = concat!("skylinq-report/", env!("CARGO_PKG_VERSION"));

/// Flight-log events shipped with the binary
const FIXTURE_JSON: &str = include_str!("../data/flight_events.json");

/// Anything that can supply a list of event records
pub trait RecordSource {
    /// Short human-readable origin, used in logs and error messages
    fn describe(&self) -> String;

    fn fetch_records(&self) -> Result<Vec<EventRecord>, SourceError>;
}

/// Payloads are either a bare array or an object wrapping one
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Payload {
    Records(Vec<EventRecord>),
    Wrapped {
        #[serde(alias = "data")]
        records: Vec<EventRecord>,
    },
}

/// Parse a JSON payload into records
pub fn parse_records(json: &str, origin: &str) -> Result<Vec<EventRecord>, SourceError> {
    let payload: Payload =
        serde_json::from_str(json).map_err(|source| SourceError::Parse { origin: origin.to_string(), source })?;

    let records = match payload {
        Payload::Records(records) | Payload::Wrapped { records } => records,
    };

    debug!("parsed {} records from {}", records.len(), origin);
    Ok(records)
}

/// The embedded flight-log fixture
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

impl RecordSource for FixtureSource {
    fn describe(&self) -> String {
        "built-in flight log fixture".to_string()
    }

    fn fetch_records(&self) -> Result<Vec<EventRecord>, SourceError> {
        parse_records(FIXTURE_JSON, &self.describe())
    }
}

/// A JSON file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl RecordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_records(&self) -> Result<Vec<EventRecord>, SourceError> {
        debug!("reading records from {:?}", self.path);
        let json = fs::read_to_string(&self.path).map_err(|source| SourceError::Io { path: self.path.clone(), source })?;
        parse_records(&json, &self.describe())
    }
}

/// A REST endpoint returning a JSON record list
#[derive(Debug, Clone)]
pub struct HttpSource {
    pub url: String,
    pub timeout: Duration,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).user_agent(USER_AGENT).build();
        Self { url: url.into(), timeout, agent }
    }
}

impl RecordSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch_records(&self) -> Result<Vec<EventRecord>, SourceError> {
        debug!("fetching records from {} (timeout {:?})", self.url, self.timeout);

        let resp = self.agent.get(&self.url).set("Accept", "application/json").call().map_err(|e| match e {
            ureq::Error::Status(code, _) => SourceError::Http(format!("{} returned HTTP {}", self.url, code)),
            other => SourceError::Http(format!("{}: {}", self.url, other)),
        })?;

        let body = resp.into_string().map_err(|e| SourceError::Http(format!("{}: {}", self.url, e)))?;
        parse_records(&body, &self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fixture_matches_flight_log() {
        let records = FixtureSource.fetch_records().unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[0].event, "Pickup Completed");
        assert_eq!(records[6].temperature, "6.8°C → 4.2°C");
        assert_eq!(records.iter().filter(|r| r.status == "completed").count(), 5);
        assert_eq!(records.iter().filter(|r| r.status == "resolved").count(), 2);
        assert!(records.iter().all(|r| r.has_status()));
    }

    #[test]
    fn test_parse_bare_array() {
        let records = parse_records(r#"[{"status": "pending", "requestId": "REQ-001"}]"#, "test").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier, "REQ-001");
    }

    #[test]
    fn test_parse_wrapped_payloads() {
        let records = parse_records(r#"{"records": [{"status": "completed"}]}"#, "test").unwrap();
        assert_eq!(records.len(), 1);

        let records = parse_records(r#"{"data": [{"status": "completed"}, {"status": "pending"}]}"#, "test").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_rejects_non_list() {
        let err = parse_records(r#"{"message": "unauthorized"}"#, "backend").unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
        assert!(err.to_string().contains("backend"));
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"flightId": "PEGA-010", "status": "in-transit", "priority": "High"}}]"#).unwrap();

        let source = FileSource { path: file.path().to_path_buf() };
        let records = source.fetch_records().unwrap();
        assert_eq!(records[0].identifier, "PEGA-010");
        assert_eq!(records[0].status, "in-transit");
    }

    #[test]
    fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource { path: dir.path().join("nope.json") };
        assert!(matches!(source.fetch_records(), Err(SourceError::Io { .. })));
    }

    #[test]
    #[ignore] // Requires network access
    fn test_http_source_unreachable() {
        let source = HttpSource::new("http://127.0.0.1:9/api/flightLogs", Duration::from_millis(500));
        assert!(matches!(source.fetch_records(), Err(SourceError::Http(_))));
    }

    #[test]
    #[ignore] // Requires network access
    fn test_http_source_reuses_agent_across_fetches() {
        let source = HttpSource::new("http://127.0.0.1:9/api/flightLogs", Duration::from_millis(500));
        let copy = source.clone();
        for s in [&source, &copy, &source] {
            assert!(matches!(s.fetch_records(), Err(SourceError::Http(_))));
        }
    }

    #[test]
    fn test_http_source_new_keeps_settings() {
        let source = HttpSource::new("https://skylinq.example/api/flightLogs", Duration::from_secs(7));
        assert_eq!(source.describe(), "https://skylinq.example/api/flightLogs");
        assert_eq!(source.timeout, Duration::from_secs(7));
        assert_eq!(source.clone().url, source.url);
    }
}
