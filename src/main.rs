use anyhow::Context;
use clap::Parser;
use csv_gateway::domain::ports::Storage;
use csv_gateway::utils::{logger, validation::Validate};
use csv_gateway::{start_http_server, CliArgs, GatewayConfig, HttpState, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 載入配置，未指定檔案時使用預設值
    let config = match &args.config {
        Some(path) => GatewayConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        None => GatewayConfig::default(),
    };

    logger::init_logger(args.verbose, config.logging.format);

    tracing::info!("🚀 Starting csv-gateway");
    if args.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e.into());
    }

    // 啟動時確保輸出目錄存在
    let storage = LocalStorage::init(config.output_directory()).with_context(|| {
        format!(
            "Failed to create output directory '{}'",
            config.output_directory()
        )
    })?;
    tracing::info!("📁 Output directory: {}", storage.root().display());

    let (host, port) = config.bind_address();
    let host = host.to_string();

    let server = start_http_server(HttpState::new(storage, config), (host.as_str(), port))
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;

    tracing::info!("Server is running on http://{}:{}", host, port);
    server.await?;

    Ok(())
}
