use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Invalid time range: {0} (expected today, 7d or 30d)")]
    InvalidTimeRange(String),

    #[error("Invalid sort field: {0}")]
    InvalidSortField(String),

    #[error("Invalid sort direction: {0} (expected asc or desc)")]
    InvalidSortDirection(String),

    #[error("Invalid provider kind: {0} (expected mock, snapshot or unsupported)")]
    InvalidProviderKind(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
