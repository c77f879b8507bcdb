use clap::Parser;
use small_lookup::utils::{logger, validation::Validate};
use small_lookup::{seed_entries, CliConfig, Directory, SessionEngine, StdinSource, StdoutSink};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-lookup CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 建立唯讀目錄並啟動會話
    let directory = Arc::new(Directory::from_entries(seed_entries()));
    tracing::debug!("Directory ready with {} entries", directory.len());

    let engine = SessionEngine::new_with_monitoring(config, directory, monitor_enabled);

    match engine.run(StdinSource::new(), StdoutSink).await {
        Ok(signal) => {
            tracing::info!("✅ Session finished: {:?}", signal);
        }
        Err(e) => {
            tracing::error!("❌ Session failed: {}", e);
            eprintln!("❌ {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
