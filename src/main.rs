use clap::Parser;
use ticket_stats::core::ConfigProvider;
use ticket_stats::utils::{logger, validation::Validate};
use ticket_stats::{CliConfig, EtlEngine, LocalStorage, TicketError, TicketPipeline, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting ticket-stats");
    tracing::debug!("CLI config: {:?}", cli);

    let result = match cli.config.clone() {
        Some(path) => match TomlConfig::from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded configuration from {}", path);
                run(config).await
            }
            Err(e) => Err(e),
        },
        None => run(cli).await,
    };

    match result {
        Ok(report) => {
            print!("{}", report);
            tracing::info!("✅ Analysis completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Analysis failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> Result<String, TicketError> {
    config.validate()?;

    // 相對路徑以目前工作目錄為準
    let storage = LocalStorage::new(".");
    let pipeline = TicketPipeline::new(storage, config);
    EtlEngine::new(pipeline).run().await
}
