use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use transfer_desk::record::download;
use transfer_desk::{collect_lines, form_schema, run_server, util, Config, WebAppState};

#[derive(Debug, Parser)]
#[command(name = "transfer-desk", version, about)]
struct Cli {
    /// Data directory (defaults to ~/.transfer-desk)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log to stderr instead of the log file
    #[arg(long, global = true)]
    log_stderr: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Read one JSON form per line and write the CSV export
    Collect {
        /// Input file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the form schema as JSON
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    util::init_data_dir(cli.data_dir);
    let config = Config::load().context("Failed to load configuration")?;
    init_logging(&config, cli.log_stderr)?;

    let command = cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    });

    match command {
        Command::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config = config.with_host(host);
            }
            if let Some(port) = port {
                config = config.with_port(port);
            }
            let state = WebAppState::from_config(&config);
            run_server(state, config.server).await
        }
        Command::Collect { input, output } => run_collect(&config, input, output),
        Command::Schema => {
            let schema = serde_json::to_string_pretty(&form_schema(&config.export))?;
            println!("{}", schema);
            Ok(())
        }
    }
}

fn run_collect(config: &Config, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let session = match &input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            collect_lines(BufReader::new(file))?
        }
        None => collect_lines(io::stdin().lock())?,
    };

    let download = download(&session.store, &config.export)?;

    match &output {
        Some(path) => {
            fs::write(path, download.payload.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                records = session.store.len(),
                "Wrote export"
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(download.payload.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn init_logging(config: &Config, to_stderr: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
        return Ok(());
    }

    // Log to file (~/.transfer-desk/logs/transfer-desk.log)
    fs::create_dir_all(util::logs_dir())?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}
