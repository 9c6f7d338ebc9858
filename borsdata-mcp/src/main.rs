//! borsdata-mcp: MCP tool server for the Borsdata API.

use std::process::ExitCode;

use borsdata::{API_KEY_ENV, BorsdataClient};
use borsdata_mcp::McpServer;
use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// Serve the Borsdata API as MCP tools over stdio.
#[derive(Parser, Debug)]
#[command(name = "borsdata-mcp", author, version, about, long_about = None)]
struct Args {
    /// Override the API base URL
    #[arg(long, env = "BORSDATA_BASE_URL")]
    base_url: Option<String>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

const fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(log_level(args.verbose, args.quiet));

    let api_key = match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("error: {API_KEY_ENV} must be set to your Borsdata API key");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = BorsdataClient::builder(api_key);
    if let Some(url) = args.base_url {
        builder = builder.base_url(url);
    }
    let client = match builder.build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(version = env!("CARGO_PKG_VERSION"), "borsdata-mcp ready");
    let mut server = McpServer::new(client);
    match runtime.block_on(server.run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server stopped");
            ExitCode::FAILURE
        }
    }
}
