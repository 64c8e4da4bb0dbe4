//! Binary entrypoint for the meshscope CLI.
//!
//! Commands:
//! - `watch [--file <path>]` - decode a capture stream (stdin by default)
//! - `init` - create a starter `config.toml` with the default channel map
//!
//! See the library crate docs for module-level details: `meshscope::`.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};

use meshscope::config::Config;
use meshscope::watch::Watcher;

#[derive(Parser)]
#[command(name = "meshscope")]
#[command(about = "A real-time MeshCore RF capture decoder for LoRa mesh networks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a capture stream and print per-packet reports
    Watch {
        /// Read a recorded capture file instead of stdin
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Initialize a new decoder configuration
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    init_logging(&pre_config, cli.verbose);

    match cli.command {
        Commands::Watch { file } => {
            // A missing config file is fine for watching; the built-in
            // channel map covers the common public channels.
            let config = match pre_config {
                Some(config) => config,
                None => {
                    debug!("no config at {}, using defaults", cli.config);
                    Config::default()
                }
            };
            info!("Starting meshscope v{}", env!("CARGO_PKG_VERSION"));

            let mut watcher = Watcher::new(config);
            match file {
                Some(path) => {
                    let f = tokio::fs::File::open(&path)
                        .await
                        .with_context(|| format!("Failed to open capture file {}", path))?;
                    info!("Decoding capture file {}", path);
                    watcher.run(tokio::io::BufReader::new(f)).await?;
                }
                None => {
                    info!("Listening on stdin...");
                    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                    watcher.run(stdin).await?;
                }
            }
        }
        Commands::Init => {
            info!("Initializing new decoder configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
    }

    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|c| c.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    if let Some(file) = config.as_ref().and_then(|c| c.logging.file.clone()) {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));

            // When stderr is a terminal, log to both file and console; when
            // redirected, log to the file only so the report stream on
            // stdout stays clean.
            let is_tty = atty::is(atty::Stream::Stderr);

            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());

                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }

                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        } else {
            builder.format(|fmt, record| {
                writeln!(
                    fmt,
                    "{} [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                    record.level(),
                    record.args()
                )
            });
        }
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
