//! tokenmngr CLI — run the token service or issue one operation against it.
//!
//! Two modes:
//! - **Server mode**: `tokenmngr serve [--config PATH] [--host H] [--port P]`
//! - **Client mode**: `tokenmngr [--host H] [--port P] OPERATION [ARGS]` — one
//!   request, print the result, exit

mod commands;
mod format;
mod parse;

use std::path::Path;
use std::process;

use clap::ArgMatches;
use tokenmngr_executor::{
    Client, Executor, Server, ServiceConfig, CONFIG_FILE_NAME, DEFAULT_HOST, DEFAULT_PORT,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use parse::matches_to_command;

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();
    init_tracing();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let exit_code = match matches.subcommand() {
        Some(("serve", sub)) => run_server(&matches, sub).await,
        Some((name, sub)) => run_client(&matches, name, sub, output_mode).await,
        None => {
            eprintln!("(error) Operation not given");
            2
        }
    };
    process::exit(exit_code);
}

/// Initialize tracing with `RUST_LOG` filtering, writing to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_config(matches: &ArgMatches, sub: &ArgMatches) -> Result<ServiceConfig, String> {
    let mut config = match sub.get_one::<String>("config") {
        Some(path) => ServiceConfig::from_file(path).map_err(|e| e.to_string())?,
        None if Path::new(CONFIG_FILE_NAME).exists() => {
            ServiceConfig::from_file(CONFIG_FILE_NAME).map_err(|e| e.to_string())?
        }
        None => ServiceConfig::default(),
    };

    if let Some(host) = matches.get_one::<String>("host") {
        config.host = host.clone();
    }
    if let Some(port) = matches.get_one::<u16>("port") {
        config.port = *port;
    }
    Ok(config)
}

async fn run_server(matches: &ArgMatches, sub: &ArgMatches) -> i32 {
    let config = match load_config(matches, sub) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("(error) {}", e);
            return 1;
        }
    };

    let server = match Server::bind(&config, Executor::default()).await {
        Ok(server) => server,
        Err(e) => {
            eprintln!("(error) {}", e);
            return 1;
        }
    };

    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!(target: "tokenmngr::server", "Interrupt received");
        }
    };

    match server.serve_with_shutdown(shutdown).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("(error) Serving failed: {}", e);
            1
        }
    }
}

async fn run_client(matches: &ArgMatches, name: &str, sub: &ArgMatches, mode: OutputMode) -> i32 {
    let command = match matches_to_command(name, sub) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("(error) {}", e);
            return 1;
        }
    };

    let host = matches
        .get_one::<String>("host")
        .map(String::as_str)
        .unwrap_or(DEFAULT_HOST);
    let port = matches.get_one::<u16>("port").copied().unwrap_or(DEFAULT_PORT);

    let mut client = match Client::connect((host, port)).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("(error) Connection failed: {}", e);
            return 1;
        }
    };

    match client.execute(command).await {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}
