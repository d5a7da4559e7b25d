//! Why a country code lookup can fail.

use crate::core::Reason;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of lookup failures.
///
/// Handlers match on this without a wildcard arm, so a new variant is a
/// compile error everywhere it has to be handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum FailureReason {
    #[error("person is relocating and has no current address")]
    Relocating,

    #[error("no address or country on record")]
    Missing,

    #[error("address service is unavailable")]
    ServiceUnavailable,
}

impl FailureReason {
    pub const ALL: [FailureReason; 3] = [
        FailureReason::Relocating,
        FailureReason::Missing,
        FailureReason::ServiceUnavailable,
    ];
}

impl Reason for FailureReason {
    fn name(&self) -> &str {
        match self {
            Self::Relocating => "Relocating",
            Self::Missing => "Missing",
            Self::ServiceUnavailable => "ServiceUnavailable",
        }
    }

    fn is_transient(&self) -> bool {
        match self {
            Self::Relocating | Self::Missing => false,
            Self::ServiceUnavailable => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_variants() {
        assert_eq!(FailureReason::Relocating.name(), "Relocating");
        assert_eq!(FailureReason::Missing.name(), "Missing");
        assert_eq!(FailureReason::ServiceUnavailable.name(), "ServiceUnavailable");
    }

    #[test]
    fn only_service_outage_is_transient() {
        let transient: Vec<_> = FailureReason::ALL
            .iter()
            .filter(|r| r.is_transient())
            .collect();
        assert_eq!(transient, vec![&FailureReason::ServiceUnavailable]);
    }

    #[test]
    fn display_comes_from_error_messages() {
        assert_eq!(
            FailureReason::ServiceUnavailable.to_string(),
            "address service is unavailable"
        );
    }

    #[test]
    fn reason_serializes_correctly() {
        let json = serde_json::to_string(&FailureReason::Missing).unwrap();
        let deserialized: FailureReason = serde_json::from_str(&json).unwrap();
        assert_eq!(json, "\"Missing\"");
        assert_eq!(deserialized, FailureReason::Missing);
    }
}
