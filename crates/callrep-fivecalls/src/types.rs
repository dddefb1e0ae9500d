//! 5 Calls API response types.

use callrep_core::representative::null_as_default;
use callrep_core::Representative;
use serde::Deserialize;

/// Body of a successful `GET /representatives` call.
#[derive(Debug, Deserialize)]
pub struct RepresentativesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub representatives: Vec<Representative>,
    /// Set when the location could map to more than one district.
    #[serde(default, rename = "lowAccuracy", deserialize_with = "null_as_default")]
    pub low_accuracy: bool,
    #[serde(default)]
    pub location: Option<String>,
}

/// Body of a failed call: `{ "error": "..." }`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

/// Non-fatal notes about a successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupWarning {
    LowAccuracy,
}

impl std::fmt::Display for LookupWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupWarning::LowAccuracy => write!(
                f,
                "Note: ZIP code may map to multiple districts. Showing the closest match."
            ),
        }
    }
}

/// Result of a successful lookup: the matched legislators plus any warning
/// the caller should surface alongside them.
#[derive(Debug, Clone, Default)]
pub struct LookupOutcome {
    pub representatives: Vec<Representative>,
    pub warning: Option<LookupWarning>,
    /// Location name the API resolved the query to, when it reports one.
    pub location: Option<String>,
}

impl From<RepresentativesResponse> for LookupOutcome {
    fn from(response: RepresentativesResponse) -> Self {
        Self {
            representatives: response.representatives,
            warning: response.low_accuracy.then_some(LookupWarning::LowAccuracy),
            location: response.location.filter(|l| !l.is_empty()),
        }
    }
}
