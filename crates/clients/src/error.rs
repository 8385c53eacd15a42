use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    StatusError { url: String, status: u16 },

    #[error("{0} returned no fighter")]
    EmptyDirectory(String),

    #[error("Notification failed: {0}")]
    NotificationError(String),
}

impl ClientError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::RequestError(e) if e.is_timeout())
    }
}
