mod command;
use clap::Parser;
pub use command::Command;
mod sandbox_mode;
pub use sandbox_mode::SandboxMode;

/// Detect the desktop environment and decide which tray icon backend to use.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Never talk to the session bus (GNOME then always prefers AppIndicator)
    #[arg(long, global = true)]
    pub no_dbus: bool,

    /// Sandbox to assume instead of detecting it
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub sandbox: SandboxMode,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["de-tray", "detect"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_dbus);
        assert_eq!(cli.sandbox, SandboxMode::Auto);
        assert!(matches!(cli.command, Command::Detect));
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["de-tray", "tray", "--no-dbus", "--sandbox", "snap", "-vv"])
                .unwrap();
        assert!(cli.no_dbus);
        assert_eq!(cli.sandbox, SandboxMode::Snap);
        assert!(matches!(cli.command, Command::Tray));
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["de-tray"]).is_err());
        assert!(Cli::try_parse_from(["de-tray", "--sandbox", "docker", "env"]).is_err());
    }
}
