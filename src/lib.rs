/// esconf: boot-time Elasticsearch configuration generator
///
/// Reads the container environment once and renders elasticsearch.yml and
/// logging.yml before the search server starts.

// Generator configuration (output destinations)
pub mod config;

// Environment snapshot and typed coercions
pub mod env;

// Typed documents and their builders
pub mod settings;

// YAML rendering and file replacement
pub mod writer;

// Error types shared by the pipeline
pub mod error;

// Single generation pass
pub mod generator;

// Re-export commonly used types for external consumers
pub use config::Config;
pub use env::{EnvError, EnvSnapshot};
pub use error::GenerateError;
pub use generator::{GenerationReport, Generator};
pub use settings::{ClusterSettings, LoggingSettings};
