use clap::ValueEnum;
use strum::Display;

use crate::{EnvSource, Sandbox};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum SandboxMode {
    /// Look for /.flatpak-info and $SNAP
    Auto,
    Flatpak,
    Snap,
    /// Treat the process as unsandboxed
    Off,
}

impl SandboxMode {
    pub fn resolve(self, source: &impl EnvSource) -> Option<Sandbox> {
        match self {
            Self::Auto => Sandbox::detect(source),
            Self::Flatpak => Some(Sandbox::Flatpak),
            Self::Snap => Some(Sandbox::Snap),
            Self::Off => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapEnv;

    #[test]
    fn overrides_ignore_the_environment() {
        let env = MapEnv::from([("SNAP", "/snap/app/1")]);
        assert_eq!(SandboxMode::Off.resolve(&env), None);
        assert_eq!(SandboxMode::Flatpak.resolve(&env), Some(Sandbox::Flatpak));
        assert_eq!(SandboxMode::Snap.resolve(&MapEnv::new()), Some(Sandbox::Snap));
    }
}
