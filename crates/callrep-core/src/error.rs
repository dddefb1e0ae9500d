use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown issue: {0}")]
    UnknownIssue(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Form-level problems that block script generation.
///
/// The messages are written for the person filling in the form and are shown
/// to them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your ZIP code first.")]
    MissingZip,

    #[error("Please wait for representatives to load.")]
    RepresentativesNotLoaded,

    #[error("Please select a representative to contact.")]
    NoRepresentativeSelected,

    #[error("Representative {index} is not in the list (choose 0 to {}).", .available.saturating_sub(1))]
    SelectionOutOfRange { index: usize, available: usize },

    #[error("Please select at least one issue to discuss.")]
    NoIssuesSelected,
}
