/// Document Builder
///
/// Produces the two configuration documents consumed by the search server:
/// - Cluster settings (elasticsearch.yml) from the environment snapshot
/// - Logging settings (logging.yml), fully static

// Typed document definitions
pub mod types;

// Environment-driven cluster/node/index document
pub mod cluster;

// Static logging document
pub mod logging;

pub use cluster::build_cluster_settings;
pub use logging::build_logging_settings;
pub use types::{ClusterSettings, LoggingSettings};
