//! Core data structures for flight-log records
//!
//! This module defines the record type consumed by the reporting pipeline.
//! Records are ingested as-is from a source (fixture, file, or REST endpoint)
//! and are never mutated afterwards.

/// A single flight/delivery event as reported by the backend or a fixture
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventRecord {
    /// When the event was recorded ("2024-01-15 14:32:15"); kept in input order
    #[serde(default)]
    pub timestamp: String,

    /// Human description of the event ("Pickup Completed")
    #[serde(default, alias = "description", alias = "title")]
    pub event: String,

    /// Shipment grouping key: flight id or request id ("PEGA-001", "REQ-010")
    #[serde(
        default,
        alias = "flightId",
        alias = "flight_id",
        alias = "requestId",
        alias = "request_id",
        alias = "id"
    )]
    pub identifier: String,

    #[serde(default)]
    pub location: String,

    /// Open-ended status tag. Missing fields deserialize to "" and are
    /// rejected by aggregation rather than at parse time.
    #[serde(default)]
    pub status: String,

    /// "STAT" marks an escalated transport; anything else is standard-class
    #[serde(default)]
    pub priority: String,

    /// Opaque temperature reading ("N/A", "6.8°C → 4.2°C")
    #[serde(default = "default_temperature", alias = "temp")]
    pub temperature: String,

    /// Chain-of-custody checkpoint scanned
    #[serde(default, alias = "chainOfCustody", alias = "chain_of_custody")]
    pub coc: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
}

fn default_temperature() -> String {
    "N/A".to_string()
}

impl EventRecord {
    /// Check whether the record carries a usable status tag
    pub fn has_status(&self) -> bool {
        !self.status.trim().is_empty()
    }

    /// Check if this record is flagged with the STAT escalation marker
    pub fn is_stat(&self) -> bool {
        self.priority == "STAT"
    }

    /// Display form of the chain-of-custody flag
    pub fn coc_display(&self) -> &'static str {
        if self.coc { "✓" } else { "—" }
    }
}
