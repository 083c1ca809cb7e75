use std::{collections::HashMap, env};

use tracing::debug;

/// Source of environment variables consulted during detection.
pub trait EnvSource {
    /// Returns the value of `name`, or `None` when unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// Fixed set of variables, for tests and for replaying a captured session.
#[derive(Debug, Clone, Default)]
pub struct MapEnv(HashMap<String, String>);

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MapEnv {
    fn from(value: [(&str, &str); N]) -> Self {
        value
            .into_iter()
            .fold(MapEnv::new(), |env, (name, value)| env.with(name, value))
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Reads `name`, treating an unset variable as empty, and logs the raw value.
pub fn env_raw(source: &impl EnvSource, name: &str) -> String {
    let value = source.var(name).unwrap_or_default();
    debug!("Getting DE, {name}: '{value}'");
    value
}

/// Same as [`env_raw`], lower-cased.
pub fn env_lower(source: &impl EnvSource, name: &str) -> String {
    env_raw(source, name).to_lowercase()
}

/// The raw values of every variable the detector and the sandbox check look at.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInputs {
    pub values: Vec<(&'static str, Option<String>)>,
}

impl SessionInputs {
    pub const NAMES: [&'static str; 6] = [
        "XDG_CURRENT_DESKTOP",
        "DESKTOP_SESSION",
        "KDE_SESSION_VERSION",
        "GNOME_DESKTOP_SESSION_ID",
        "KDE_FULL_SESSION",
        "SNAP",
    ];

    pub fn capture(source: &impl EnvSource) -> Self {
        Self {
            values: Self::NAMES
                .iter()
                .map(|&name| (name, source.var(name)))
                .collect(),
        }
    }

    pub fn print(&self) {
        println!("=== Session Environment ===");
        for (name, value) in &self.values {
            match value {
                Some(value) => println!("  {name}='{value}'"),
                None => println!("  {name} (unset)"),
            }
        }
    }
}
