use anyhow::Context;
use neuro_boost::utils::logger;
use neuro_boost::{default_sequence, CliConfig, StdoutAnnouncer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let (config, rejected) = CliConfig::parse_lenient();

    // 只有帶旗標時才初始化日誌，否則 stderr 保持空白
    if let Some(directive) = logger::log_filter(config.verbose, config.json_logs) {
        if config.json_logs {
            logger::init_json_logger(directive);
        } else {
            logger::init_cli_logger(directive);
        }
    }

    if let Some(reason) = rejected {
        tracing::debug!("Arguments ignored ({}), using default configuration", reason);
    }
    tracing::debug!("CLI config: {}", serde_json::to_string(&config)?);

    let runner = default_sequence(StdoutAnnouncer::new());

    let report = runner
        .run()
        .await
        .context("Neuro-AI Boost sequence did not complete")?;

    tracing::debug!("📋 Execution summary: {}", report.summary());

    Ok(())
}
