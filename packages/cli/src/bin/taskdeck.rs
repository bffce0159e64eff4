use std::net::IpAddr;
use std::process;

use clap::{Parser, Subcommand};
use colored::*;

use taskdeck_cli::{init_tracing, run_server, Config};

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "Taskdeck - to-do service with a chat assistant")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Port to listen on (overrides TASKDECK_API_PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Address to bind (overrides TASKDECK_API_HOST)
        #[arg(long)]
        host: Option<IpAddr>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = handle_command(cli.command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve { port, host } => {
            let mut config = Config::from_env()?;
            if let Some(port) = port.filter(|p| *p != 0) {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }

            println!(
                "{} http://{}:{}",
                "Starting Taskdeck on".green().bold(),
                config.host,
                config.port
            );
            run_server(config).await
        }
    }
}
