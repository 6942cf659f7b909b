use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 依旗標決定日誌過濾條件；未帶任何旗標時回傳 None，不安裝 subscriber
pub fn log_filter(verbose: bool, json_logs: bool) -> Option<&'static str> {
    if verbose {
        Some("neuro_boost=debug")
    } else if json_logs {
        Some("neuro_boost=info")
    } else {
        None
    }
}

/// 過濾條件只來自旗標，不讀取環境變數
pub fn init_cli_logger(directive: &str) {
    // stdout 只留給序列訊息，日誌一律寫到 stderr
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

pub fn init_json_logger(directive: &str) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init();
}
