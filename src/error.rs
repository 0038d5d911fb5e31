use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("unrecognized timestamp: {0:?}")]
    Timestamp(String),
    #[error("login failed")]
    Auth(#[source] reqwest::Error),
    #[error("booking token not found on the member page")]
    Token,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
