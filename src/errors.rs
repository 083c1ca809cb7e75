use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Max attempts ({attempts}) reached, aborting: {source}")]
    MaxAttempts {
        attempts: usize,
        #[source]
        source: zbus::Error,
    },
    #[error("Session bus is not available: {0}")]
    BusUnavailable(String),
    #[error("ZBus error: {0:#?}")]
    ZBus(#[from] zbus::Error),
    #[error("ZBus fdo error: {0:#?}")]
    Fdo(#[from] zbus::fdo::Error),
}
