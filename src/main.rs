/// esconf: boot-time Elasticsearch configuration generator
///
/// Runs once at container start, before the search server. Exits non-zero if
/// either file could not be produced.

use anyhow::Context;
use esconf::{config::Config, env::EnvSnapshot, generator::Generator};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the server's stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    // Snapshot once; everything below reads this, never the live environment
    let env = EnvSnapshot::from_process();
    let config = Config::from_env(&env);

    let report = Generator::new(config)
        .run(&env)
        .context("Failed to generate Elasticsearch configuration")?;

    tracing::info!(
        "✅ Configuration ready: {} ({} bytes), {} ({} bytes), aws credentials: {}",
        report.settings_path.display(),
        report.settings_bytes,
        report.logging_path.display(),
        report.logging_bytes,
        report.aws_credentials
    );

    Ok(())
}
