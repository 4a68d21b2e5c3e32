//! keepwarm Entry Point

use clap::Parser;
use keepwarm::cli::Cli;
use keepwarm::config::ProbeConfig;
use keepwarm::health::{startup, Prober};
use keepwarm::logging;
use tracing::info;

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();

    logging::init().expect("failed to initialize logging");

    info!("keepwarm v{}", env!("CARGO_PKG_VERSION"));

    let config = ProbeConfig::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let prober = Prober::new(config);

    // コールドスタート対策の即時プローブ。その後は固定間隔で
    // プロセス終了（外部シグナル）までプローブし続ける。
    startup::run_warmup_probe(&prober).await;
    prober.run().await;
}
