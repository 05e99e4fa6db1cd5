/// Typed configuration documents
///
/// Each struct serializes to the exact key layout the search server expects.
/// Dotted keys are flattened setting paths, not nesting, so they are renamed
/// verbatim. Fields are declared in key order to keep the rendering stable.

use crate::env::Scalar;
use serde::Serialize;

/// Cluster, node, network and index settings (elasticsearch.yml)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSettings {
    pub action: ActionSettings,
    pub bootstrap: BootstrapSettings,
    pub cloud: CloudSettings,
    pub cluster: ClusterSection,
    pub discovery: DiscoverySettings,
    pub gateway: GatewaySettings,
    pub http: HttpSettings,
    pub index: IndexSettings,
    pub indices: IndicesSettings,
    pub marvel: MarvelSettings,
    pub network: NetworkSettings,
    pub node: NodeSettings,
    pub path: PathSettings,
    pub script: ScriptSettings,
    /// Node-to-node communication port
    #[serde(rename = "transport.tcp.port")]
    pub transport_tcp_port: Scalar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionSettings {
    /// Refuse index deletion through wildcards or `_all`
    pub destructive_requires_name: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BootstrapSettings {
    /// Lock the heap into RAM so it is never swapped out
    pub mlockall: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudSettings {
    pub aws: AwsSettings,
}

/// AWS cloud plugin section
///
/// The credential pair is only present when both halves were supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwsSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

impl AwsSettings {
    pub fn has_credentials(&self) -> bool {
        self.access_key.is_some() && self.secret_key.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSection {
    pub name: String,
    /// Awareness attribute: a shard and its replica never share a value of it
    #[serde(rename = "routing.allocation.awareness.attributes")]
    pub awareness_attributes: String,
    #[serde(rename = "routing.allocation.cluster_concurrent_rebalance")]
    pub cluster_concurrent_rebalance: i64,
    #[serde(rename = "routing.allocation.disk.threshold_enabled")]
    pub disk_threshold_enabled: bool,
    #[serde(rename = "routing.allocation.disk.watermark.high")]
    pub disk_watermark_high: String,
    #[serde(rename = "routing.allocation.disk.watermark.low")]
    pub disk_watermark_low: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoverySettings {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "zen.fd.ping_interval")]
    pub fd_ping_interval: String,
    #[serde(rename = "zen.fd.ping_retries")]
    pub fd_ping_retries: i64,
    #[serde(rename = "zen.fd.ping_timeout")]
    pub fd_ping_timeout: String,
    #[serde(rename = "zen.ping.multicast.enabled")]
    pub multicast_enabled: bool,
    #[serde(rename = "zen.ping.unicast.hosts")]
    pub unicast_hosts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatewaySettings {
    pub recover_after_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpSettings {
    /// REST API toggle
    pub enabled: bool,
    pub port: Scalar,
}

/// Index defaults and slow-log thresholds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexSettings {
    #[serde(rename = "indexing.slowlog.threshold.index.debug")]
    pub indexing_index_debug: String,
    #[serde(rename = "indexing.slowlog.threshold.index.info")]
    pub indexing_index_info: String,
    #[serde(rename = "indexing.slowlog.threshold.index.trace")]
    pub indexing_index_trace: String,
    #[serde(rename = "indexing.slowlog.threshold.index.warn")]
    pub indexing_index_warn: String,
    pub number_of_replicas: i64,
    pub number_of_shards: i64,
    #[serde(rename = "search.slowlog.threshold.fetch.debug")]
    pub search_fetch_debug: String,
    #[serde(rename = "search.slowlog.threshold.fetch.info")]
    pub search_fetch_info: String,
    #[serde(rename = "search.slowlog.threshold.fetch.trace")]
    pub search_fetch_trace: String,
    #[serde(rename = "search.slowlog.threshold.fetch.warn")]
    pub search_fetch_warn: String,
    #[serde(rename = "search.slowlog.threshold.query.debug")]
    pub search_query_debug: String,
    #[serde(rename = "search.slowlog.threshold.query.info")]
    pub search_query_info: String,
    #[serde(rename = "search.slowlog.threshold.query.trace")]
    pub search_query_trace: String,
    #[serde(rename = "search.slowlog.threshold.query.warn")]
    pub search_query_warn: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicesSettings {
    #[serde(rename = "cluster.send_refresh_mapping")]
    pub send_refresh_mapping: bool,
    /// Heap share reserved for field data used in sorting and faceting
    #[serde(rename = "fielddata.cache.size")]
    pub fielddata_cache_size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarvelSettings {
    pub agent: MarvelAgentSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarvelAgentSettings {
    pub enabled: bool,
    /// Stats go to the first reachable host, in order
    #[serde(rename = "exporter.es.hosts")]
    pub exporter_hosts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSettings {
    /// Address other nodes use to reach this one
    pub publish_host: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSettings {
    pub data: bool,
    pub master: bool,
    pub name: Option<String>,
    pub zone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSettings {
    pub data: Vec<String>,
    pub logs: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptSettings {
    pub indexed: String,
    pub inline: String,
}

/// Logging settings (logging.yml)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggingSettings {
    pub appender: AppenderSection,
    #[serde(rename = "es.logger.level")]
    pub level: String,
    pub logger: LoggerOverrides,
    #[serde(rename = "rootLogger")]
    pub root_logger: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppenderSection {
    #[serde(rename = "R")]
    pub rolling: RollingFileAppender,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollingFileAppender {
    #[serde(rename = "File")]
    pub file: String,
    /// Kept as a string; the server reads it as one
    #[serde(rename = "MaxBackupIndex")]
    pub max_backup_index: String,
    #[serde(rename = "MaxFileSize")]
    pub max_file_size: String,
    pub layout: PatternLayout,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternLayout {
    #[serde(rename = "ConversionPattern")]
    pub conversion_pattern: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Per-category logger levels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggerOverrides {
    pub action: String,
    #[serde(rename = "com.amazonaws")]
    pub amazonaws: String,
}
