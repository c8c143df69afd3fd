//! Driver configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Cluster connection settings for the ScyllaDB adapter.
#[derive(Debug, Clone, Deserialize)]
pub struct ScyllaConfig {
    #[serde(default = "default_nodes")]
    pub nodes: Vec<String>,
    #[serde(default = "default_keyspace")]
    pub keyspace: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

fn default_nodes() -> Vec<String> {
    vec!["127.0.0.1:9042".to_string()]
}

fn default_keyspace() -> String {
    "tenant_store".to_string()
}

fn default_connect_timeout() -> u64 {
    5
}

impl Default for ScyllaConfig {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            keyspace: default_keyspace(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl ScyllaConfig {
    /// Loads settings from `TENANT_STORE_*` environment variables,
    /// e.g. `TENANT_STORE_NODES=10.0.0.1:9042,10.0.0.2:9042` and
    /// `TENANT_STORE_KEYSPACE=tenant_store`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                Environment::with_prefix("TENANT_STORE")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("nodes"),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_localhost() {
        let config = ScyllaConfig::default();

        assert_eq!(config.nodes, vec!["127.0.0.1:9042".to_string()]);
        assert_eq!(config.keyspace, "tenant_store");
        assert_eq!(config.connect_timeout_seconds, 5);
    }
}
