//! Command line interface

use clap::{Parser, Subcommand};
use hms_domain::constants::{PERCENTILE_MAX, PERCENTILE_MIN};
use hms_domain::error::Result;
use hms_domain::value_objects::{MetricsSnapshot, PercentileQuery};
use hms_infrastructure::config::{AppConfig, ConfigLoader};
use hms_infrastructure::logging::{init_logging, log_config_loaded};
use hms_infrastructure::runtime::MetricsRuntime;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Command line interface for Host Metrics Sampler
#[derive(Parser, Debug)]
#[command(name = "hms")]
#[command(about = "Host Metrics Sampler - CPU, memory, disk and network sampling")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sample until interrupted, logging a summary periodically
    Run {
        /// Seconds between summary lines
        #[arg(long, default_value_t = 10)]
        report_secs: u64,
    },
    /// Print one snapshot as JSON
    Snapshot {
        /// Seconds to sample before printing
        #[arg(long, default_value_t = 3)]
        warmup_secs: u64,
    },
    /// Print network percentiles and link capacity as JSON
    Capacity {
        /// Most recent samples to consider
        #[arg(long, default_value_t = 60)]
        window: usize,
        /// Percentile to report (clamped to 1..=99)
        #[arg(long, default_value_t = 95, allow_negative_numbers = true)]
        percentile: i64,
        /// Seconds to sample before reporting
        #[arg(long, default_value_t = 10)]
        warmup_secs: u64,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Run { report_secs: 10 }
    }
}

/// Load configuration, set up logging and execute the command
pub async fn run(cli: Cli) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;
    if let Some((path, found)) = loader.config_source() {
        log_config_loaded(&path, found);
    }

    match cli.command.unwrap_or_default() {
        Command::Run { report_secs } => run_until_interrupted(&config, report_secs).await,
        command => {
            let report = capture(&config, &command).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

/// Start a runtime, warm it up, and build the JSON report for a one-shot
/// command
///
/// `Run` has no one-shot report and yields the current snapshot right away.
pub async fn capture(config: &AppConfig, command: &Command) -> Result<Value> {
    let runtime = MetricsRuntime::start(config).await?;

    let report = match *command {
        Command::Snapshot { warmup_secs } => {
            tokio::time::sleep(Duration::from_secs(warmup_secs)).await;
            serde_json::to_value(runtime.snapshot())?
        }
        Command::Capacity {
            window,
            percentile,
            warmup_secs,
        } => {
            tokio::time::sleep(Duration::from_secs(warmup_secs)).await;
            let percentiles = runtime.network_percentile(percentile_query(window, percentile));
            let capacity = runtime.network_capacity().await;
            json!({
                "percentile": percentiles,
                "capacity": capacity,
            })
        }
        Command::Run { .. } => serde_json::to_value(runtime.snapshot())?,
    };

    runtime.shutdown().await;
    Ok(report)
}

async fn run_until_interrupted(config: &AppConfig, report_secs: u64) -> Result<()> {
    let runtime = MetricsRuntime::start(config).await?;
    let mut report = tokio::time::interval(Duration::from_secs(report_secs.max(1)));
    // The first tick completes immediately and nothing has been collected yet
    report.tick().await;

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal?;
                info!("Interrupt received");
                break;
            }
            _ = report.tick() => {
                info!("{}", summary_line(&runtime.snapshot()));
            }
        }
    }

    runtime.shutdown().await;
    Ok(())
}

/// Build a percentile query from raw command line values
///
/// Any integer is accepted and clamped into `PERCENTILE_MIN..=PERCENTILE_MAX`.
pub fn percentile_query(window: usize, percentile: i64) -> PercentileQuery {
    let clamped = percentile.clamp(i64::from(PERCENTILE_MIN), i64::from(PERCENTILE_MAX));
    PercentileQuery::new(window, u8::try_from(clamped).unwrap_or(PERCENTILE_MAX))
}

/// One-line human summary of a snapshot
pub fn summary_line(snapshot: &MetricsSnapshot) -> String {
    let load = snapshot.cpu_load.current;
    let disk = snapshot.disk_io.current;
    let net = snapshot.network_traffic.current;
    format!(
        "load {:.2}/{:.2}/{:.2} | mem {}% | disk r {} B/s w {} B/s | net rx {} B/s tx {} B/s{}",
        load.one_min,
        load.five_min,
        load.fifteen_min,
        snapshot.memory.current,
        disk.read_rate,
        disk.write_rate,
        net.received_rate,
        net.sent_rate,
        if net.is_heuristic { " (estimated)" } else { "" },
    )
}
