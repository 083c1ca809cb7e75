use std::time::Duration;

use futures::StreamExt as _;
use tokio::time::sleep;
use tracing::{debug, warn};
use zbus::fdo::DBusProxy;

use crate::{
    DbusServiceProbe, DesktopEnvironment, Result, Sandbox, TrayPolicy, connect,
    status_notifier::STATUS_NOTIFIER_WATCHER,
};

/// Match rule restricting NameOwnerChanged to the tray watcher's name (arg0).
const WATCHER_OWNER_ARGS: &[(u8, &str)] = &[(0, STATUS_NOTIFIER_WATCHER)];

const WATCHING: &str =
    "\nWatching for StatusNotifierWatcher changes... (Press Ctrl+C to exit)\n";

/// Remembers the last reported preference so only changes get printed.
#[derive(Debug, Default)]
pub struct PreferenceTracker {
    last: Option<bool>,
}

impl PreferenceTracker {
    /// Records `preferred`, returning whether it differs from the previous value.
    pub fn update(&mut self, preferred: bool) -> bool {
        let changed = self.last != Some(preferred);
        self.last = Some(preferred);
        changed
    }
}

fn print_preference(desktop: DesktopEnvironment, preferred: bool) {
    let backend = if preferred { "AppIndicator" } else { "Qt" };
    println!("DE: {desktop}, preferred tray icon: {backend}");
}

/// Follow the session bus and report the AppIndicator preference whenever the
/// StatusNotifierWatcher comes or goes. Reconnects if the signal stream ends.
pub async fn watch(desktop: DesktopEnvironment, sandbox: Option<Sandbox>) -> Result<()> {
    let mut tracker = PreferenceTracker::default();
    let mut attempt = 0;
    loop {
        attempt += 1;
        if attempt > 1 {
            sleep(Duration::from_secs(1)).await;
        }
        debug!("Watch attempt: {attempt}");

        let connection = match connect(10).await {
            Ok(connection) => connection,
            Err(error) => {
                warn!("Watch attempt {attempt}: Failed to connect to DBus: {error}");
                continue;
            }
        };

        let dbus = match DBusProxy::new(&connection).await {
            Ok(proxy) => proxy,
            Err(error) => {
                warn!("Failed to connect to bus proxy: {error}");
                continue;
            }
        };

        let stream = dbus
            .receive_name_owner_changed_with_args(WATCHER_OWNER_ARGS)
            .await;
        let mut stream = match stream {
            Ok(stream) => stream,
            Err(error) => {
                warn!("Failed to get NameOwnerChanged stream: {error}");
                continue;
            }
        };

        let policy = TrayPolicy::new(desktop, sandbox, DbusServiceProbe::new(connection.clone()));

        let preferred = policy.should_prefer_app_indicator_tray_icon().await;
        if tracker.update(preferred) {
            print_preference(desktop, preferred);
        }

        println!("{WATCHING}");

        while let Some(signal) = stream.next().await {
            let args = match signal.args() {
                Ok(args) => args,
                Err(error) => {
                    warn!("Malformed NameOwnerChanged signal: {error}");
                    continue;
                }
            };

            debug!(
                "{STATUS_NOTIFIER_WATCHER} owner changed, present: {}",
                args.new_owner().is_some()
            );

            let preferred = policy.should_prefer_app_indicator_tray_icon().await;
            if tracker.update(preferred) {
                println!("Tray preference changed!");
                print_preference(desktop, preferred);
                println!("{WATCHING}");
            }
        }

        warn!("NameOwnerChanged stream ended, reconnecting...");
    }
}
