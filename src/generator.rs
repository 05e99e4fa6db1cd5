/// Generation pass
///
/// Wires together the environment snapshot, the document builders and the
/// writer. Both documents are built before anything touches the filesystem,
/// so a malformed input never leaves a half-written configuration behind.

use crate::{
    config::Config,
    env::EnvSnapshot,
    error::Result,
    settings::{build_cluster_settings, build_logging_settings},
    writer::write_document,
};
use std::path::PathBuf;

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub settings_path: PathBuf,
    pub settings_bytes: usize,
    pub logging_path: PathBuf,
    pub logging_bytes: usize,
    /// Whether AWS credentials were merged into the cloud section
    pub aws_credentials: bool,
}

/// Single-pass configuration generator
#[derive(Debug, Clone)]
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Regenerate both files from `env`, overwriting whatever was there
    pub fn run(&self, env: &EnvSnapshot) -> Result<GenerationReport> {
        tracing::info!("⚙️ Generating Elasticsearch configuration from {} environment variables", env.len());

        let cluster = build_cluster_settings(env)?;
        tracing::info!(
            "📋 Built cluster settings: cluster={} node={} zone={}",
            cluster.cluster.name,
            cluster.node.name.as_deref().unwrap_or("<unset>"),
            cluster.node.zone
        );

        let logging = build_logging_settings();
        tracing::debug!("📋 Built logging settings");

        let output = &self.config.output;
        let settings_bytes = write_document(&output.settings_path, &cluster)?;
        tracing::info!("💾 Wrote {}", output.settings_path.display());

        let logging_bytes = write_document(&output.logging_path, &logging)?;
        tracing::info!("💾 Wrote {}", output.logging_path.display());

        Ok(GenerationReport {
            settings_path: output.settings_path.clone(),
            settings_bytes,
            logging_path: output.logging_path.clone(),
            logging_bytes,
            aws_credentials: cluster.cloud.aws.has_credentials(),
        })
    }
}
