//! Desktop environment detection for Linux sessions and the tray icon backend
//! decisions derived from it.

pub mod cli;
mod connection;
pub mod detection;
pub mod environment;
mod errors;
pub mod report;
pub mod sandbox;
pub mod service_probe;
pub mod status_notifier;
pub mod tray_policy;
pub mod watcher;

pub use connection::connect;
pub use detection::{DesktopEnvironment, Detector};
pub use environment::{EnvSource, MapEnv, ProcessEnv, SessionInputs};
pub use errors::{Error, Result};
pub use sandbox::Sandbox;
pub use service_probe::{AnyProbe, BusUnreachable, DbusDisabled, DbusServiceProbe, ServiceProbe};
pub use tray_policy::TrayPolicy;
