use clap::Parser;
use recipe_aggregator::adapters::server;
use recipe_aggregator::core::ConfigProvider;
use recipe_aggregator::utils::{logger, validation::Validate};
use recipe_aggregator::{AggregatorEngine, CliConfig, HttpRecipeFetcher};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let verbose = cli.verbose;

    let settings = match cli.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    logger::init_logger(settings.log_format, verbose);

    tracing::info!("Starting recipe-aggregator");
    tracing::debug!("Settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let fetcher = HttpRecipeFetcher::from_config(&settings)?;
    let engine = AggregatorEngine::from_config(Arc::new(fetcher), &settings);

    tracing::info!(
        "📡 Upstream {} (deadline {:?}, client timeout {:?})",
        settings.base_url(),
        settings.batch_deadline(),
        settings.client_timeout()
    );

    if let Err(e) = server::serve(settings.listen_addr(), engine).await {
        tracing::error!("❌ Server failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
