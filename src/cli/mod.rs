//! CLI module for keepwarm
//!
//! Provides `-h`/`--help` and `-V`/`--version` only.
//! All runtime configuration is taken from environment variables.

use clap::Parser;

/// keepwarm - Keep-alive prober for the vector search backend
#[derive(Parser, Debug)]
#[command(name = "keepwarm")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    KEEPWARM_TARGET_URL       Base URL of the monitored backend
                              (default: https://your-app.up.railway.app)
    KEEPWARM_INTERVAL_SECS    Probe interval in seconds (default: 600)
    KEEPWARM_TIMEOUT_SECS     Per-probe timeout in seconds (default: 30)
    KEEPWARM_LOG_LEVEL        Log level (default: info)
"#)]
pub struct Cli;
