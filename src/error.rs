use crate::env::EnvError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid environment: {0}")]
    Env(#[from] EnvError),

    #[error("failed to render YAML: {0}")]
    Render(#[from] serde_yaml::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
