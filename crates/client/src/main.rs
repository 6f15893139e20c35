//! Terminal client entry point.
mod app;
mod config;
mod presentation;

use anyhow::Result;
use app::CliApp;
use config::CliConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = CliConfig::from_env();

    // The TUI owns the terminal, so logs go to a file instead of stderr.
    std::fs::create_dir_all(&config.log_dir)?;
    let appender = tracing_appender::rolling::never(&config.log_dir, "brawl.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    CliApp::new(config)?.run().await
}
