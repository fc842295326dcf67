use std::fmt::{self, Debug, Display};

/// Provides `EpiError` and maps other errors to an `EpiError`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum EpiError {
    /// A constructor parameter failed validation. Raised before any people
    /// exist, so garbage values never propagate into generation.
    InvalidConfig(String),
    EpiError(String),
}

impl From<String> for EpiError {
    fn from(error: String) -> Self {
        EpiError::EpiError(error)
    }
}

impl From<&str> for EpiError {
    fn from(error: &str) -> Self {
        EpiError::EpiError(error.to_string())
    }
}

impl std::error::Error for EpiError {}

impl Display for EpiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {self:?}")?;
        Ok(())
    }
}
