use clap::Parser;
use de_tray::{
    AnyProbe, Error, ProcessEnv, Result, SessionInputs, TrayPolicy,
    cli::{Cli, Command},
    detection,
    report::TrayReport,
    watcher,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let sandbox = cli.sandbox.resolve(&ProcessEnv);

    match cli.command {
        Command::Detect => {
            println!("{}", detection::get());
        }
        Command::Env => {
            SessionInputs::capture(&ProcessEnv).print();
        }
        Command::Tray => {
            let probe = AnyProbe::session_or_disabled(!cli.no_dbus).await;
            let policy = TrayPolicy::new(detection::get(), sandbox, probe);
            TrayReport::collect(&policy).await.print();
        }
        Command::Watch => {
            if cli.no_dbus {
                return Err(Error::BusUnavailable(
                    "watch follows the session bus and cannot run with --no-dbus".to_string(),
                ));
            }
            watcher::watch(detection::get(), sandbox).await?;
        }
    }

    Ok(())
}
