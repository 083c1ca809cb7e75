use std::future::Future;

use tracing::{debug, warn};
use zbus::{Connection, fdo::IntrospectableProxy, proxy::CacheProperties};

use crate::{Result, connect};

/// Answers whether a bus service is up and serving a given object path.
pub trait ServiceProbe {
    fn is_reachable(&self, service: &str, path: &str) -> impl Future<Output = bool> + Send;
}

/// Probes the session bus by introspecting the object.
#[derive(Debug, Clone)]
pub struct DbusServiceProbe {
    connection: Connection,
}

impl DbusServiceProbe {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    async fn introspect(&self, service: &str, path: &str) -> Result<String> {
        let proxy = IntrospectableProxy::builder(&self.connection)
            .destination(service)?
            .path(path)?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;
        Ok(proxy.introspect().await?)
    }
}

impl ServiceProbe for DbusServiceProbe {
    async fn is_reachable(&self, service: &str, path: &str) -> bool {
        match self.introspect(service, path).await {
            Ok(_) => {
                debug!("{service} is reachable at {path}");
                true
            }
            Err(error) => {
                debug!("{service} is not reachable at {path}: {error}");
                false
            }
        }
    }
}

/// Stand-in used when bus integration is switched off. Every service counts as
/// present, so callers fall back to whatever they decide without a bus.
#[derive(Debug, Clone, Copy, Default)]
pub struct DbusDisabled;

impl ServiceProbe for DbusDisabled {
    async fn is_reachable(&self, _service: &str, _path: &str) -> bool {
        true
    }
}

/// Used when bus integration is on but the session bus could not be reached.
/// Nothing answers, so no service is reachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusUnreachable;

impl ServiceProbe for BusUnreachable {
    async fn is_reachable(&self, service: &str, path: &str) -> bool {
        debug!("{service} is not reachable at {path}: no session bus");
        false
    }
}

/// Any of the probes, chosen at runtime.
#[derive(Debug, Clone)]
pub enum AnyProbe {
    Dbus(DbusServiceProbe),
    Disabled(DbusDisabled),
    Unreachable(BusUnreachable),
}

impl AnyProbe {
    /// Live probe on the session bus when enabled, [`DbusDisabled`] when not.
    pub async fn session_or_disabled(enabled: bool) -> Self {
        if !enabled {
            return Self::Disabled(DbusDisabled);
        }
        Self::from_session(connect(1).await)
    }

    /// A failed connection yields [`BusUnreachable`], not [`DbusDisabled`].
    pub fn from_session(connection: Result<Connection>) -> Self {
        match connection {
            Ok(connection) => Self::Dbus(DbusServiceProbe::new(connection)),
            Err(error) => {
                warn!("Session bus unreachable, treating every service as absent: {error}");
                Self::Unreachable(BusUnreachable)
            }
        }
    }

    pub fn connection(&self) -> Option<&Connection> {
        match self {
            Self::Dbus(probe) => Some(probe.connection()),
            Self::Disabled(_) | Self::Unreachable(_) => None,
        }
    }
}

impl ServiceProbe for AnyProbe {
    async fn is_reachable(&self, service: &str, path: &str) -> bool {
        match self {
            Self::Dbus(probe) => probe.is_reachable(service, path).await,
            Self::Disabled(probe) => probe.is_reachable(service, path).await,
            Self::Unreachable(probe) => probe.is_reachable(service, path).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[tokio::test]
    async fn disabled_probe_reports_every_service() {
        assert!(DbusDisabled.is_reachable("org.kde.StatusNotifierWatcher", "/").await);
        assert!(
            AnyProbe::Disabled(DbusDisabled)
                .is_reachable("org.example.Missing", "/")
                .await
        );
        assert!(AnyProbe::Disabled(DbusDisabled).connection().is_none());
    }

    #[tokio::test]
    async fn failed_connection_reports_nothing_reachable() {
        let probe = AnyProbe::from_session(Err(Error::BusUnavailable(
            "unix:path=/nonexistent/bus".to_string(),
        )));

        assert!(matches!(probe, AnyProbe::Unreachable(_)));
        assert!(probe.connection().is_none());
        assert!(!probe.is_reachable("org.kde.StatusNotifierWatcher", "/").await);
    }

    #[tokio::test]
    async fn disabled_integration_never_connects() {
        let probe = AnyProbe::session_or_disabled(false).await;
        assert!(matches!(probe, AnyProbe::Disabled(_)));
    }
}
