mod config;
mod http;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use platform_obs::{ObsConfig, init_tracing};
use products_hr::seed_employees;

use crate::{
    config::AppConfig,
    http::{AppState, ServeConfig},
};

#[derive(Parser, Debug)]
#[command(name = "employee-registry", version, about = "In-memory employee registry")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server.
    Serve(ServeCommand),
    /// Print the seed roster as JSON.
    Seed,
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, default_value = "0.0.0.0")]
    host: std::net::IpAddr,
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

impl From<ServeCommand> for ServeConfig {
    fn from(value: ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();
    match cli.command {
        Command::Serve(cmd) => {
            let config = Arc::new(AppConfig::load()?);
            http::serve(cmd.into(), AppState::new(config)).await
        }
        Command::Seed => print_seed(),
    }
}

fn print_seed() -> Result<()> {
    let roster = serde_json::to_string_pretty(&seed_employees())
        .context("failed to encode seed roster")?;
    println!("{roster}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["employee-registry", "serve"]).unwrap();
        let Command::Serve(cmd) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(cmd.port, 8080);
        assert_eq!(cmd.host.to_string(), "0.0.0.0");
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "employee-registry",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
        ])
        .unwrap();
        let Command::Serve(cmd) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(cmd.port, 9000);
        assert_eq!(cmd.host.to_string(), "127.0.0.1");
    }
}
