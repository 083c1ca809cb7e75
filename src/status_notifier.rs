use zbus::{Connection, proxy::CacheProperties};

use crate::Result;

pub const STATUS_NOTIFIER_WATCHER: &str = "org.kde.StatusNotifierWatcher";

// https://www.freedesktop.org/wiki/Specifications/StatusNotifierItem/StatusNotifierWatcher/
#[zbus::proxy(
    interface = "org.kde.StatusNotifierWatcher",
    default_service = "org.kde.StatusNotifierWatcher",
    default_path = "/StatusNotifierWatcher"
)]
pub trait StatusNotifierWatcher {
    #[zbus(property)]
    fn is_status_notifier_host_registered(&self) -> zbus::Result<bool>;

    #[zbus(property)]
    fn protocol_version(&self) -> zbus::Result<i32>;

    #[zbus(property)]
    fn registered_status_notifier_items(&self) -> zbus::Result<Vec<String>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct WatcherDetails {
    pub host_registered: bool,
    pub protocol_version: i32,
    pub items: Vec<String>,
}

impl WatcherDetails {
    pub async fn fetch(connection: &Connection) -> Result<Self> {
        let proxy = StatusNotifierWatcherProxy::builder(connection)
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(Self {
            host_registered: proxy.is_status_notifier_host_registered().await?,
            protocol_version: proxy.protocol_version().await?,
            items: proxy.registered_status_notifier_items().await?,
        })
    }

    pub fn print(&self) {
        println!("     Host Registered: {}", self.host_registered);
        println!("     Protocol Version: {}", self.protocol_version);
        println!("     Registered Items: {}", self.items.len());
        for (i, item) in self.items.iter().enumerate() {
            println!("       {}. {item}", i + 1);
        }
    }
}
