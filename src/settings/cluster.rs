/// Cluster settings builder
///
/// Maps the environment snapshot onto elasticsearch.yml. Apart from coercion
/// the only logic here is the conditional AWS credential merge.

use crate::env::{Coercion, EnvError, EnvSnapshot};
use crate::settings::types::*;

/// Zone used for both the node awareness attribute and the AWS region
pub const DEFAULT_ZONE: &str = "ether";
pub const DEFAULT_CLUSTER_NAME: &str = "local-elasticsearch";
pub const DEFAULT_DATA_PATH: &str = "/usr/share/elasticsearch/data";
pub const LOGS_PATH: &str = "/var/log/docker/elasticsearch";
pub const DEFAULT_MARVEL_TARGET: &str = "localhost:9200";
pub const DEFAULT_TRANSPORT_PORT: i64 = 9300;
pub const DEFAULT_HTTP_PORT: i64 = 9200;
pub const DEFAULT_REPLICAS: i64 = 1;
pub const DEFAULT_SHARDS: i64 = 5;

/// Every environment key read by the builder, with its coercion
pub const ENV_INPUTS: &[(&str, Coercion)] = &[
    ("CLUSTER_NAME", Coercion::Raw),
    ("NODE_NAME", Coercion::Raw),
    ("ZONE_NAME", Coercion::Raw),
    ("IS_DATA_NODE", Coercion::Bool),
    ("IS_MASTER_NODE", Coercion::Bool),
    ("PATH_DATA", Coercion::List),
    ("CONTAINER_HOST_ADDRESS", Coercion::Raw),
    ("NUM_INDEX_REPLICAS", Coercion::Integer),
    ("NUM_INDEX_SHARDS", Coercion::Integer),
    ("TRANSPORT_TCP_PORT", Coercion::Scalar),
    ("HTTP_ENABLED", Coercion::Bool),
    ("HTTP_PORT", Coercion::Scalar),
    ("UNICAST_HOSTS", Coercion::List),
    ("MARVEL_ENABLED", Coercion::Bool),
    ("MARVEL_TARGETS", Coercion::List),
    ("AWS_ACCESS_KEY", Coercion::Raw),
    ("AWS_SECRET_KEY", Coercion::Raw),
];

/// Build the cluster document from the environment
///
/// Fails on the first malformed integer so the container stops before the
/// server can start with a silently wrong value.
pub fn build_cluster_settings(env: &EnvSnapshot) -> Result<ClusterSettings, EnvError> {
    for (key, coercion) in ENV_INPUTS {
        tracing::debug!("🔍 {}", env.describe(key, *coercion));
    }

    let zone = env.string_or("ZONE_NAME", DEFAULT_ZONE);

    let index = build_index_settings(env)?;

    let settings = ClusterSettings {
        action: ActionSettings {
            destructive_requires_name: true,
        },
        bootstrap: BootstrapSettings { mlockall: true },
        cloud: CloudSettings {
            aws: build_aws_settings(env, zone.clone()),
        },
        cluster: ClusterSection {
            name: env.string_or("CLUSTER_NAME", DEFAULT_CLUSTER_NAME),
            awareness_attributes: "zone".to_string(),
            cluster_concurrent_rebalance: 2,
            disk_threshold_enabled: true,
            disk_watermark_high: "90%".to_string(),
            disk_watermark_low: "85%".to_string(),
        },
        discovery: DiscoverySettings {
            kind: "zen".to_string(),
            fd_ping_interval: "15s".to_string(),
            fd_ping_retries: 5,
            fd_ping_timeout: "30s".to_string(),
            multicast_enabled: false,
            unicast_hosts: env.list("UNICAST_HOSTS"),
        },
        gateway: GatewaySettings {
            recover_after_time: "5m".to_string(),
        },
        http: HttpSettings {
            enabled: env.bool_or("HTTP_ENABLED", true),
            port: env.scalar_or("HTTP_PORT", DEFAULT_HTTP_PORT),
        },
        index,
        indices: IndicesSettings {
            send_refresh_mapping: false,
            fielddata_cache_size: "25%".to_string(),
        },
        marvel: MarvelSettings {
            agent: MarvelAgentSettings {
                enabled: env.bool_or("MARVEL_ENABLED", true),
                exporter_hosts: env.list_or("MARVEL_TARGETS", &[DEFAULT_MARVEL_TARGET]),
            },
        },
        network: NetworkSettings {
            publish_host: env.string("CONTAINER_HOST_ADDRESS"),
        },
        node: NodeSettings {
            data: env.bool_or("IS_DATA_NODE", true),
            master: env.bool_or("IS_MASTER_NODE", true),
            name: env.string("NODE_NAME"),
            zone,
        },
        path: PathSettings {
            data: env.list_or("PATH_DATA", &[DEFAULT_DATA_PATH]),
            logs: LOGS_PATH.to_string(),
        },
        script: ScriptSettings {
            indexed: "off".to_string(),
            inline: "off".to_string(),
        },
        transport_tcp_port: env.scalar_or("TRANSPORT_TCP_PORT", DEFAULT_TRANSPORT_PORT),
    };

    Ok(settings)
}

fn build_index_settings(env: &EnvSnapshot) -> Result<IndexSettings, EnvError> {
    let number_of_replicas = env
        .int_or("NUM_INDEX_REPLICAS", DEFAULT_REPLICAS)
        .inspect_err(|_| {
            tracing::error!("❌ {}", env.describe("NUM_INDEX_REPLICAS", Coercion::Integer))
        })?;
    let number_of_shards = env
        .int_or("NUM_INDEX_SHARDS", DEFAULT_SHARDS)
        .inspect_err(|_| {
            tracing::error!("❌ {}", env.describe("NUM_INDEX_SHARDS", Coercion::Integer))
        })?;

    Ok(IndexSettings {
        indexing_index_debug: "2s".to_string(),
        indexing_index_info: "5s".to_string(),
        indexing_index_trace: "500ms".to_string(),
        indexing_index_warn: "10s".to_string(),
        number_of_replicas,
        number_of_shards,
        search_fetch_debug: "500ms".to_string(),
        search_fetch_info: "800ms".to_string(),
        search_fetch_trace: "200ms".to_string(),
        search_fetch_warn: "1s".to_string(),
        search_query_debug: "2s".to_string(),
        search_query_info: "5s".to_string(),
        search_query_trace: "500ms".to_string(),
        search_query_warn: "10s".to_string(),
    })
}

/// Region always; credentials only when both keys are non-empty
fn build_aws_settings(env: &EnvSnapshot, region: String) -> AwsSettings {
    match (env.non_empty("AWS_ACCESS_KEY"), env.non_empty("AWS_SECRET_KEY")) {
        (Some(access_key), Some(secret_key)) => {
            tracing::info!("🔑 Merging AWS credentials into cloud.aws");
            AwsSettings {
                access_key: Some(access_key),
                region,
                secret_key: Some(secret_key),
            }
        }
        _ => {
            tracing::debug!(
                "AWS credentials incomplete ({}, {}), emitting region only",
                env.describe("AWS_ACCESS_KEY", Coercion::Raw),
                env.describe("AWS_SECRET_KEY", Coercion::Raw)
            );
            AwsSettings {
                access_key: None,
                region,
                secret_key: None,
            }
        }
    }
}
