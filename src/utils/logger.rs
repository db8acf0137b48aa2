use tracing_subscriber::EnvFilter;

const CRATE_TARGET: &str = "nginx_blocklist";

/// Directive used when `RUST_LOG` is not set. Verbose mode also lets
/// `reqwest` connection warnings through.
pub fn default_directive(verbose: bool) -> String {
    if verbose {
        format!("{}=debug,reqwest=warn,info", CRATE_TARGET)
    } else {
        format!("{}=info", CRATE_TARGET)
    }
}

// 每個來源一行進度、每個失敗來源一行錯誤，輸出到 stdout
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .compact()
        .init();
}
