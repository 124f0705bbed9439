//! Typed events streamed from a worker to the consumer.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// One message of a computation run.
///
/// A sequence run emits `Started`, then `Batch`/`Progress` events in
/// position order, then exactly one of `Completed`, `Stopped` or `Error`.
/// A point query emits a single `PointResult` or `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Sequence generation started.
    Started { header: String },
    /// Pre-rendered lines for a contiguous run of positions.
    Batch { text: String },
    /// Number of elements generated so far (1-indexed).
    Progress { completed: u64 },
    /// Sequence generation finished.
    Completed { summary: String },
    /// Sequence generation stopped by a cancellation request.
    Stopped { message: String },
    /// The run failed; no further events follow.
    Error { message: String },
    /// Result of a point query.
    PointResult {
        position: u64,
        #[serde(with = "decimal")]
        value: BigUint,
    },
}

impl Event {
    /// Whether this is the last event of its run.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed { .. }
                | Self::Stopped { .. }
                | Self::Error { .. }
                | Self::PointResult { .. }
        )
    }

    /// Stable event name, as used in the JSON `type` tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Started { .. } => "started",
            Self::Batch { .. } => "batch",
            Self::Progress { .. } => "progress",
            Self::Completed { .. } => "completed",
            Self::Stopped { .. } => "stopped",
            Self::Error { .. } => "error",
            Self::PointResult { .. } => "point_result",
        }
    }
}

/// `BigUint` as a decimal string, so JSON consumers never see limb arrays.
mod decimal {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        BigUint::parse_bytes(s.as_bytes(), 10)
            .ok_or_else(|| de::Error::custom(format!("invalid decimal integer: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_events() {
        assert!(!Event::Started { header: String::new() }.is_terminal());
        assert!(!Event::Batch { text: String::new() }.is_terminal());
        assert!(!Event::Progress { completed: 1 }.is_terminal());
        assert!(Event::Completed { summary: String::new() }.is_terminal());
        assert!(Event::Stopped { message: String::new() }.is_terminal());
        assert!(Event::Error { message: String::new() }.is_terminal());
        assert!(Event::PointResult {
            position: 1,
            value: BigUint::from(1u32)
        }
        .is_terminal());
    }

    #[test]
    fn kind_matches_serde_tag() {
        let event = Event::Progress { completed: 3 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], event.kind());
        assert_eq!(json["completed"], 3);
    }

    #[test]
    fn point_result_value_is_decimal_string() {
        let event = Event::PointResult {
            position: 100,
            value: BigUint::parse_bytes(b"354224848179261915075", 10).unwrap(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"point_result","position":100,"value":"354224848179261915075"}"#
        );
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn point_result_rejects_non_decimal_value() {
        let json = r#"{"type":"point_result","position":1,"value":"0x1"}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }
}
