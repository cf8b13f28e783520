use clap::{Parser, Subcommand};

use crate::config::{AppConfig, SourceArgs, DEFAULT_BIND_ADDR};
use crate::server;
use crate::server::api;

#[derive(Debug, Parser)]
#[command(name = "fight_bridge")]
#[command(about = "Serves generator fight records in the game client's fight schema")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to bind the HTTP listener to
        #[arg(long, env = "FIGHT_BRIDGE_BIND", default_value = DEFAULT_BIND_ADDR)]
        bind: String,

        #[command(flatten)]
        sources: SourceArgs,
    },
    /// Project the configured fight once and print the response JSON
    Project {
        /// Fight id stamped on the response
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        fight_id: u64,

        #[command(flatten)]
        sources: SourceArgs,

        /// Print single-line JSON instead of pretty output
        #[arg(long)]
        compact: bool,
    },
}

pub fn run_with_args(args: &[String]) -> i32 {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return err.exit_code();
        }
    };

    match cli.command {
        Command::Serve { bind, sources } => handle_serve(AppConfig::from_sources(bind, &sources)),
        Command::Project {
            fight_id,
            sources,
            compact,
        } => handle_project(
            &AppConfig::from_sources(DEFAULT_BIND_ADDR, &sources),
            fight_id,
            compact,
        ),
    }
}

fn handle_serve(config: AppConfig) -> i32 {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("failed to start async runtime: {err}");
            return 1;
        }
    };
    match runtime.block_on(server::run_server(config)) {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!("server error: {err}");
            1
        }
    }
}

fn handle_project(config: &AppConfig, fight_id: u64, compact: bool) -> i32 {
    let response = match api::fight_payload(config, fight_id) {
        Ok(response) => response,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };

    let serialized = if compact {
        serde_json::to_string(&response)
    } else {
        serde_json::to_string_pretty(&response)
    };
    match serialized {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            tracing::error!("failed to serialize fight response: {err}");
            1
        }
    }
}
