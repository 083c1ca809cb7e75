use crate::{
    detection::{self, DesktopEnvironment},
    environment::ProcessEnv,
    sandbox::Sandbox,
    service_probe::ServiceProbe,
    status_notifier::STATUS_NOTIFIER_WATCHER,
};

/// Tray icon backend decisions for one session.
#[derive(Debug, Clone)]
pub struct TrayPolicy<P> {
    desktop: DesktopEnvironment,
    sandbox: Option<Sandbox>,
    probe: P,
}

impl<P: ServiceProbe> TrayPolicy<P> {
    pub fn new(desktop: DesktopEnvironment, sandbox: Option<Sandbox>, probe: P) -> Self {
        Self {
            desktop,
            sandbox,
            probe,
        }
    }

    /// Policy for the running process, using the cached desktop detection.
    pub fn for_process(probe: P) -> Self {
        Self::new(detection::get(), Sandbox::detect(&ProcessEnv), probe)
    }

    pub fn desktop(&self) -> DesktopEnvironment {
        self.desktop
    }

    pub fn sandbox(&self) -> Option<Sandbox> {
        self.sandbox
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn in_sandbox(&self) -> bool {
        self.sandbox.is_some()
    }

    /// Pantheon has no tray for the Qt icon to live in.
    pub fn should_use_qt_tray_icon(&self) -> bool {
        !self.desktop.is_pantheon()
    }

    /// GNOME only gets an AppIndicator when a StatusNotifierWatcher is
    /// running right now (e.g. via the AppIndicator shell extension); the
    /// bus is asked on every call.
    pub async fn should_prefer_app_indicator_tray_icon(&self) -> bool {
        (self.in_sandbox() && !self.desktop.is_kde())
            || self.desktop.is_unity()
            || self.desktop.is_ubuntu()
            || (self.desktop.is_gnome()
                && self.probe.is_reachable(STATUS_NOTIFIER_WATCHER, "/").await)
    }
}
