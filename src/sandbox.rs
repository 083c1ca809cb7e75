use std::path::Path;

use strum::Display;
use tracing::debug;

use crate::environment::EnvSource;

const FLATPAK_INFO: &str = "/.flatpak-info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Sandbox {
    Flatpak,
    Snap,
}

impl Sandbox {
    pub fn detect(source: &impl EnvSource) -> Option<Self> {
        Self::detect_with(source, Path::new(FLATPAK_INFO))
    }

    /// Flatpak is recognised by its info file, Snap by the `SNAP` variable.
    pub fn detect_with(source: &impl EnvSource, flatpak_info: &Path) -> Option<Self> {
        let sandbox = if flatpak_info.exists() {
            Some(Self::Flatpak)
        } else if source.var("SNAP").is_some_and(|snap| !snap.is_empty()) {
            Some(Self::Snap)
        } else {
            None
        };
        debug!("Sandbox: {sandbox:?}");
        sandbox
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;
    use crate::environment::MapEnv;

    fn missing() -> &'static Path {
        Path::new("/nonexistent/.flatpak-info")
    }

    #[test]
    fn no_markers_means_unsandboxed() {
        assert_eq!(Sandbox::detect_with(&MapEnv::new(), missing()), None);
        assert_eq!(
            Sandbox::detect_with(&MapEnv::from([("SNAP", "")]), missing()),
            None
        );
    }

    #[test]
    fn snap_variable() {
        let env = MapEnv::from([("SNAP", "/snap/telegram-desktop/1")]);
        assert_eq!(Sandbox::detect_with(&env, missing()), Some(Sandbox::Snap));
    }

    #[test]
    fn flatpak_info_file_takes_precedence() {
        let marker = env::temp_dir().join(format!("de-tray-flatpak-info-{}", process::id()));
        fs::write(&marker, "[Application]\n").unwrap();

        let env = MapEnv::from([("SNAP", "/snap/telegram-desktop/1")]);
        let detected = Sandbox::detect_with(&env, &marker);
        fs::remove_file(&marker).unwrap();

        assert_eq!(detected, Some(Sandbox::Flatpak));
    }
}
