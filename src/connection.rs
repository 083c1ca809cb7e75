use std::time::Duration;

use crate::{Error, Result};
use tokio::time::sleep;
use tracing::warn;
use zbus::Connection;

/// Connect to the session bus
pub async fn connect(max_attempts: usize) -> Result<Connection> {
    let mut attempts = 0;
    loop {
        attempts += 1;
        match Connection::session().await {
            Ok(connection) => return Ok(connection),
            Err(error) => {
                warn!("Failed to connect to session DBus (attempt {attempts}): {error}");
                if attempts < max_attempts {
                    sleep(Duration::from_secs(1)).await
                } else {
                    return Err(Error::MaxAttempts {
                        attempts,
                        source: error,
                    });
                }
            }
        }
    }
}
