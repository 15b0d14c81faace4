//! Host Metrics Sampler - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `hms` / `hms run` | Sample until Ctrl-C, logging a summary periodically |
//! | `hms snapshot` | Print one snapshot as JSON |
//! | `hms capacity` | Print network percentiles and link capacity as JSON |

use clap::Parser;
use hms::cli::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli).await?;
    Ok(())
}
