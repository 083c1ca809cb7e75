use std::sync::OnceLock;

use strum::Display;
use tracing::info;

use crate::environment::{EnvSource, ProcessEnv, env_lower, env_raw};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DesktopEnvironment {
    Other,
    Gnome,
    #[strum(to_string = "KDE3")]
    Kde3,
    #[strum(to_string = "KDE4")]
    Kde4,
    #[strum(to_string = "KDE5")]
    Kde5,
    Ubuntu,
    Unity,
    Pantheon,
}

impl DesktopEnvironment {
    pub fn is_gnome(self) -> bool {
        self == Self::Gnome
    }

    pub fn is_kde(self) -> bool {
        matches!(self, Self::Kde3 | Self::Kde4 | Self::Kde5)
    }

    pub fn is_ubuntu(self) -> bool {
        self == Self::Ubuntu
    }

    pub fn is_unity(self) -> bool {
        self == Self::Unity
    }

    pub fn is_pantheon(self) -> bool {
        self == Self::Pantheon
    }
}

/// Classifies the session from `XDG_CURRENT_DESKTOP`, `DESKTOP_SESSION` and the
/// older KDE/GNOME session variables.
///
/// `XDG_CURRENT_DESKTOP` wins whenever it names a known desktop. Otherwise the
/// session name is consulted, and only after that the legacy variables, which
/// are not read at all when an earlier tier matched.
pub fn classify(source: &impl EnvSource) -> DesktopEnvironment {
    let xdg_current_desktop = env_lower(source, "XDG_CURRENT_DESKTOP");
    let desktops: Vec<&str> = xdg_current_desktop
        .split(':')
        .filter(|segment| !segment.is_empty())
        .collect();
    let desktop_session = env_lower(source, "DESKTOP_SESSION");
    let kde_session = env_raw(source, "KDE_SESSION_VERSION");

    // DESKTOP_SESSION can contain a path
    let desktop_session = match desktop_session.rfind('/') {
        Some(slash) => &desktop_session[slash + 1..],
        None => desktop_session.as_str(),
    };

    let has = |name: &str| desktops.iter().any(|desktop| *desktop == name);

    if !desktops.is_empty() {
        if has("unity") {
            // gnome-fallback sessions set XDG_CURRENT_DESKTOP to Unity,
            // DESKTOP_SESSION is then gnome-fallback or gnome-fallback-compiz
            if desktop_session.contains("gnome-fallback") {
                return DesktopEnvironment::Gnome;
            }
            return DesktopEnvironment::Unity;
        } else if has("pantheon") {
            return DesktopEnvironment::Pantheon;
        } else if has("gnome") {
            if has("ubuntu") {
                return DesktopEnvironment::Ubuntu;
            }
            return DesktopEnvironment::Gnome;
        } else if has("kde") {
            if kde_session == "5" {
                return DesktopEnvironment::Kde5;
            }
            return DesktopEnvironment::Kde4;
        }
    }

    match desktop_session {
        "gnome" => return DesktopEnvironment::Gnome,
        "kde4" | "kde-plasma" => return DesktopEnvironment::Kde4,
        // Newer systems still say "kde" for KDE4, only the version tells them apart
        "kde" if !kde_session.is_empty() => return DesktopEnvironment::Kde4,
        "kde" => return DesktopEnvironment::Kde3,
        _ => {}
    }

    // Useful particularly in the DESKTOP_SESSION=default case
    if !env_raw(source, "GNOME_DESKTOP_SESSION_ID").is_empty() {
        DesktopEnvironment::Gnome
    } else if !env_raw(source, "KDE_FULL_SESSION").is_empty() {
        if kde_session.is_empty() {
            DesktopEnvironment::Kde3
        } else {
            DesktopEnvironment::Kde4
        }
    } else {
        DesktopEnvironment::Other
    }
}

pub fn classify_and_log(source: &impl EnvSource) -> DesktopEnvironment {
    let result = classify(source);
    info!("DE: {result}");
    result
}

/// Classification computed at most once for the lifetime of the detector.
#[derive(Debug)]
pub struct Detector<E> {
    source: E,
    cached: OnceLock<DesktopEnvironment>,
}

impl<E: EnvSource> Detector<E> {
    pub const fn new(source: E) -> Self {
        Self {
            source,
            cached: OnceLock::new(),
        }
    }

    pub fn get(&self) -> DesktopEnvironment {
        *self
            .cached
            .get_or_init(|| classify_and_log(&self.source))
    }
}

static PROCESS: Detector<ProcessEnv> = Detector::new(ProcessEnv);

/// Desktop environment of the running process, detected on first use.
pub fn get() -> DesktopEnvironment {
    PROCESS.get()
}
