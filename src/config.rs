use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Ordered set of simulated edges used when a request carries no hint.
    /// Read from a comma-separated `KNOWN_EDGES` variable.
    #[serde(default = "default_known_edges")]
    pub known_edges: Vec<String>,

    /// Optional JSON file replacing the built-in catalog
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_known_edges() -> Vec<String> {
    vec![
        "edge-us-1".to_string(),
        "edge-eu-1".to_string(),
        "edge-apac-1".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            known_edges: default_known_edges(),
            catalog_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>()
            .map(Config::normalized)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Trims edge names and drops blank entries left by stray commas.
    /// An empty result is rejected later when the edge resolver is built.
    fn normalized(mut self) -> Self {
        self.known_edges = self
            .known_edges
            .into_iter()
            .map(|edge| edge.trim().to_string())
            .filter(|edge| !edge.is_empty())
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(vars: &[(&str, &str)]) -> Config {
        let iter = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()));
        envy::from_iter::<_, Config>(iter).unwrap().normalized()
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(
            config.known_edges,
            vec!["edge-us-1", "edge-eu-1", "edge-apac-1"]
        );
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_known_edges_from_comma_list() {
        let config = load(&[("KNOWN_EDGES", "edge-sa-1, edge-af-1")]);
        assert_eq!(config.known_edges, vec!["edge-sa-1", "edge-af-1"]);
    }

    #[test]
    fn test_blank_edges_are_dropped() {
        let config = load(&[("KNOWN_EDGES", " , ,")]);
        assert!(config.known_edges.is_empty());
    }

    #[test]
    fn test_port_and_catalog_path() {
        let config = load(&[("PORT", "9100"), ("CATALOG_PATH", "/etc/livestack/catalog.json")]);
        assert_eq!(config.port, 9100);
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/livestack/catalog.json"))
        );
        assert_eq!(config.bind_addr(), "127.0.0.1:9100");
    }
}
