use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directives used when `RUST_LOG` is unset. Request tracing from
/// tower-http is only shown when asked for.
pub fn default_directives(verbose: bool, json: bool) -> &'static str {
    match (verbose, json) {
        (true, _) => "portfolio_site=debug,tower_http=debug,info",
        (false, true) => "portfolio_site=info,tower_http=info",
        (false, false) => "portfolio_site=info",
    }
}

fn filter(verbose: bool, json: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, json)))
}

/// Human-readable output for the terminal.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(verbose, false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(filter(false, true))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .json(), // 給日誌收集器用的 JSON 格式
        )
        .init();
}
