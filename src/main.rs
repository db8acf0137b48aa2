use clap::Parser;
use nginx_blocklist::config::toml_config::BlocklistConfig;
use nginx_blocklist::core::ConfigProvider;
use nginx_blocklist::utils::error::{BlocklistError, ErrorSeverity};
use nginx_blocklist::utils::{logger, validation::Validate};
use nginx_blocklist::{BlocklistEngine, BlocklistPipeline, CliConfig, LocalStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    let config_path = args.config_path();
    tracing::info!("Loading configuration from: {}", config_path.display());

    // 載入並驗證配置，失敗時不做任何抓取或寫入
    let config = match BlocklistConfig::from_file(&config_path) {
        Ok(config) => config,
        Err(e) => fail(e),
    };
    if let Err(e) = config.validate() {
        fail(e);
    }

    if args.dry_run {
        tracing::info!("DRY RUN MODE - nothing will be fetched or written");
        display_config_summary(&config);
        return;
    }

    let pipeline = match BlocklistPipeline::new(LocalStorage::new(), config) {
        Ok(pipeline) => pipeline,
        Err(e) => fail(e),
    };

    match BlocklistEngine::new(pipeline).run().await {
        Ok(summary) => {
            println!(
                "Blocklist written to {} ({} unique entries, {} of {} sources failed)",
                summary.output_path,
                summary.total_entries,
                summary.sources_failed,
                summary.sources_ok + summary.sources_failed
            );
        }
        Err(e) => fail(e),
    }
}

fn display_config_summary(config: &BlocklistConfig) {
    println!("Output file:     {}", config.output_file());
    println!("Request timeout: {}s", config.request_timeout());
    println!(
        "Ordering:        {}",
        if config.cidr_first() {
            "CIDR ranges first"
        } else {
            "single sorted pass"
        }
    );
    println!("Sources ({}):", config.sources().len());
    for source in config.sources() {
        println!("  - {}", source.trim());
    }
}

fn fail(e: BlocklistError) -> ! {
    tracing::error!(
        "Blocklist generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
