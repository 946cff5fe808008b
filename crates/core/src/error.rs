use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Preference storage is unavailable")]
    StorageUnavailable,

    #[error("Preference storage error: {0}")]
    Storage(String),

    #[error("Document root is unavailable")]
    DocumentUnavailable,

    #[error("Style class error: {0}")]
    Style(String),
}

pub type Result<T> = std::result::Result<T, Error>;
