use std::io;
use std::time::Duration;

use clap::Parser;
use tracing::Level;

use deskshell::config::{Cli, ShellConfig, default_config_path, default_log_path, write_template};
use deskshell::drivers::OutputDriver;
use deskshell::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use deskshell::runner::{Host, run};
use deskshell::tracing_sub;

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.write_config {
        let path = cli
            .config
            .clone()
            .or_else(default_config_path)
            .ok_or_else(|| io::Error::other("no home directory for the default config path"))?;
        write_template(&path).map_err(io::Error::other)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let config = ShellConfig::resolve(&cli).map_err(io::Error::other)?;
    // the UI owns the terminal, so logs go to a file unless told otherwise
    let log_file = cli.log_file.clone().or_else(default_log_path);
    tracing_sub::init(cli.log_level.unwrap_or(Level::INFO), log_file.as_deref())?;
    tracing::info!(
        workspaces = config.workspace_count,
        theme = %config.theme,
        "starting deskshell"
    );

    let mut output = ConsoleOutputDriver::new()?;
    let cells = output.size()?;
    let mut host = Host::new(&config, cells);
    if let Some(path) = cli.config.clone().or_else(default_config_path) {
        host = host.persist_to(path);
    }
    let result = run(
        &mut host,
        ConsoleInputDriver::new(),
        &mut output,
        Duration::from_millis(16),
    );
    if let Err(err) = &result {
        tracing::error!(%err, "host loop failed");
    }
    result
}
