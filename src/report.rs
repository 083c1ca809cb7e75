use tracing::debug;

use crate::{
    AnyProbe, DesktopEnvironment, Sandbox, ServiceProbe, TrayPolicy,
    status_notifier::WatcherDetails,
};

/// Everything the `tray` command prints, gathered up front.
#[derive(Debug, Clone, PartialEq)]
pub struct TrayReport {
    pub desktop: DesktopEnvironment,
    pub sandbox: Option<Sandbox>,
    pub use_qt_tray_icon: bool,
    pub prefer_app_indicator: bool,
    pub watcher: Option<WatcherDetails>,
}

impl TrayReport {
    pub async fn collect(policy: &TrayPolicy<AnyProbe>) -> Self {
        let watcher = match policy.probe().connection() {
            Some(connection) => match WatcherDetails::fetch(connection).await {
                Ok(details) => Some(details),
                Err(error) => {
                    debug!("No StatusNotifierWatcher details: {error}");
                    None
                }
            },
            None => None,
        };

        Self::from_policy(policy, watcher).await
    }

    pub async fn from_policy<P: ServiceProbe>(
        policy: &TrayPolicy<P>,
        watcher: Option<WatcherDetails>,
    ) -> Self {
        Self {
            desktop: policy.desktop(),
            sandbox: policy.sandbox(),
            use_qt_tray_icon: policy.should_use_qt_tray_icon(),
            prefer_app_indicator: policy.should_prefer_app_indicator_tray_icon().await,
            watcher,
        }
    }

    pub fn print(&self) {
        println!("=== Tray Icon Policy ===");
        println!("Desktop Environment: {}", self.desktop);
        match self.sandbox {
            Some(sandbox) => println!("Sandbox: {sandbox}"),
            None => println!("Sandbox: none"),
        }
        println!("Use Qt Tray Icon: {}", self.use_qt_tray_icon);
        println!("Prefer AppIndicator: {}", self.prefer_app_indicator);

        println!("\nStatusNotifierWatcher:");
        match &self.watcher {
            Some(details) => details.print(),
            None => println!("     Not available"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbusDisabled;

    #[tokio::test]
    async fn report_mirrors_policy() {
        let policy = TrayPolicy::new(DesktopEnvironment::Pantheon, Some(Sandbox::Snap), DbusDisabled);
        let report = TrayReport::from_policy(&policy, None).await;

        assert_eq!(report.desktop, DesktopEnvironment::Pantheon);
        assert_eq!(report.sandbox, Some(Sandbox::Snap));
        assert!(!report.use_qt_tray_icon);
        assert!(report.prefer_app_indicator);
        assert!(report.watcher.is_none());
    }

    #[tokio::test]
    async fn disabled_probe_collects_without_bus() {
        let policy = TrayPolicy::new(
            DesktopEnvironment::Kde5,
            None,
            AnyProbe::Disabled(DbusDisabled),
        );
        let report = TrayReport::collect(&policy).await;

        assert!(report.use_qt_tray_icon);
        assert!(!report.prefer_app_indicator);
        assert!(report.watcher.is_none());
    }
}
