use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenDartError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The service answered with a status other than the success sentinel.
    #[error("API response error ({status}): {message}")]
    Api { status: i32, message: String },

    #[error("Resource not found")]
    NotFound,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid receipt number: {0} (expected 14 digits)")]
    InvalidReceiptNo(String),

    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("XML parsing error: {0}")]
    XmlError(String),

    #[error("ZIP archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<quick_xml::Error> for OpenDartError {
    fn from(error: quick_xml::Error) -> Self {
        OpenDartError::XmlError(error.to_string())
    }
}

impl OpenDartError {
    /// Returns `true` for errors reported by the service itself rather than the transport.
    pub fn is_api_error(&self) -> bool {
        matches!(self, OpenDartError::Api { .. })
    }
}

pub type Result<T> = std::result::Result<T, OpenDartError>;
