//! Server and tenant configuration
//!
//! Server settings come from environment variables:
//! - `PORT` - HTTP server port (default: 8080)
//! - `TENANTS_FILE` - JSON file with tenant definitions (optional)
//!
//! Tenant files look like:
//!
//! ```json
//! {
//!   "tenants": [
//!     {
//!       "name": "oil",
//!       "rules": [
//!         {
//!           "kinds": ["Namespace"],
//!           "apiGroups": [""],
//!           "operations": ["List"],
//!           "selector": { "matchLabels": { "tenant": "oil" } }
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{AuthzError, Result};
use crate::types::Tenant;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8080;

/// Diagnostic server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP server port
    pub port: u16,

    /// Tenant definitions to load at startup
    pub tenants_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            tenants_file: None,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through a variable lookup; unparseable values fall
    /// back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let tenants_file = lookup("TENANTS_FILE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self { port, tenants_file }
    }

    /// Loads the configured tenants, or none when no file is set
    pub fn load_tenants(&self) -> Result<Vec<Tenant>> {
        match &self.tenants_file {
            Some(path) => Ok(TenantsFile::load(path)?.tenants),
            None => Ok(Vec::new()),
        }
    }
}

/// On-disk tenant definitions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantsFile {
    #[serde(default)]
    pub tenants: Vec<Tenant>,
}

impl TenantsFile {
    /// Parses tenant definitions from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let file: TenantsFile = serde_json::from_str(json)?;
        file.validate()?;
        Ok(file)
    }

    /// Reads and parses a tenant file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let file = Self::from_json(&contents)
            .map_err(|e| AuthzError::Config(format!("{}: {}", path.display(), e)))?;

        info!(path = %path.display(), tenants = file.tenants.len(), "Loaded tenant configuration");

        Ok(file)
    }

    /// Tenant names must be non-empty and unique
    fn validate(&self) -> Result<()> {
        for (index, tenant) in self.tenants.iter().enumerate() {
            if tenant.name.is_empty() {
                return Err(AuthzError::Config(format!(
                    "tenant at index {} has an empty name",
                    index
                )));
            }

            if self.tenants[..index].iter().any(|t| t.name == tenant.name) {
                return Err(AuthzError::Config(format!(
                    "duplicate tenant name '{}'",
                    tenant.name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Operation;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_server_config_from_vars() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "9443"),
            ("TENANTS_FILE", "/etc/proxy/tenants.json"),
        ]));

        assert_eq!(config.port, 9443);
        assert_eq!(config.tenants_file, Some(PathBuf::from("/etc/proxy/tenants.json")));
    }

    #[test]
    fn test_server_config_invalid_port_falls_back() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_tenants_from_json() {
        let file = TenantsFile::from_json(
            r#"{
                "tenants": [{
                    "name": "oil",
                    "rules": [{
                        "kinds": ["Namespace"],
                        "apiGroups": [""],
                        "operations": ["List"],
                        "selector": {"matchLabels": {"tenant": "oil"}}
                    }]
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(file.tenants.len(), 1);
        assert_eq!(file.tenants[0].rules[0].operations, vec![Operation::List]);
    }

    #[test]
    fn test_tenants_rejects_duplicates() {
        let result = TenantsFile::from_json(r#"{"tenants": [{"name": "a"}, {"name": "a"}]}"#);
        assert!(matches!(result, Err(AuthzError::Config(_))));
    }

    #[test]
    fn test_tenants_rejects_empty_name() {
        let result = TenantsFile::from_json(r#"{"tenants": [{"name": ""}]}"#);
        assert!(matches!(result, Err(AuthzError::Config(_))));
    }

    #[test]
    fn test_tenants_invalid_json() {
        let result = TenantsFile::from_json("{");
        assert!(matches!(result, Err(AuthzError::Json(_))));
    }

    #[test]
    fn test_no_tenants_file() {
        let config = ServerConfig::default();
        assert!(config.load_tenants().unwrap().is_empty());
    }
}
