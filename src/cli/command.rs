use clap::Subcommand;

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the detected desktop environment
    Detect,

    /// Show the session variables detection looks at
    Env,

    /// Show the tray icon decisions and the StatusNotifierWatcher state
    Tray,

    /// Follow the session bus and report when the tray preference changes
    Watch,
}
