use blogloader_core::policy::{INTERNAL_ERROR, NOT_FOUND};
use blogloader_core::post::NormalizeError;

#[derive(thiserror::Error, Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error [{status}]: {message}")]
    UpstreamError { status: u16, message: String },

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status a caller should render for this failure
    pub fn status(&self) -> u16 {
        match self {
            Error::NotFound(_) => NOT_FOUND,
            Error::UpstreamError { status, .. } => *status,
            Error::MalformedRecord(_) | Error::Config(_) => INTERNAL_ERROR,
        }
    }
}

impl From<NormalizeError> for Error {
    fn from(err: NormalizeError) -> Self {
        match err {
            NormalizeError::MalformedRecord(reason) => Error::MalformedRecord(reason),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(Error::NotFound("hello".to_string()).status(), 404);
        assert_eq!(
            Error::UpstreamError {
                status: 503,
                message: "down".to_string()
            }
            .status(),
            503
        );
        assert_eq!(Error::MalformedRecord("no id".to_string()).status(), 500);
    }

    #[test]
    fn test_from_normalize_error() {
        let err: Error = NormalizeError::MalformedRecord("no id".to_string()).into();
        assert_eq!(err, Error::MalformedRecord("no id".to_string()));
        assert_eq!(err.to_string(), "Malformed record: no id");
    }
}
