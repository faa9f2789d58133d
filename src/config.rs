//! Server Configuration
//!
//! Defines the runtime configuration for the activity service including:
//! - Listen address
//! - Static front-end directory
//! - Optional seed catalog file (JSON or TOML)
//! - Capacity enforcement

use crate::activity::{default_catalog, ActivityCatalog};
use crate::error::RegistryResult;
use crate::registry::ActivityRegistry;
use std::path::{Path, PathBuf};
use tracing::info;

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Seed catalog file; the built-in catalog is used when absent
    pub catalog_path: Option<PathBuf>,
    /// Reject signups once an activity reaches `max_participants`
    pub enforce_capacity: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            catalog_path: None,
            enforce_capacity: false,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load the seed catalog and build the registry from it
    pub fn build_registry(&self) -> RegistryResult<ActivityRegistry> {
        let catalog = match &self.catalog_path {
            Some(path) => load_catalog(path)?,
            None => default_catalog(),
        };

        Ok(ActivityRegistry::new(catalog)?.with_capacity_enforcement(self.enforce_capacity))
    }
}

/// Read a seed catalog from disk. `.toml` files are parsed as TOML,
/// anything else as JSON.
pub fn load_catalog(path: &Path) -> RegistryResult<ActivityCatalog> {
    let contents = std::fs::read_to_string(path)?;

    let catalog: ActivityCatalog = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&contents)?,
        _ => serde_json::from_str(&contents)?,
    };

    info!(
        path = %path.display(),
        activities = catalog.len(),
        "Loaded activity catalog"
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(config.catalog_path.is_none());
        assert!(!config.enforce_capacity);
    }

    #[test]
    fn test_build_registry_uses_default_catalog() {
        let registry = ServerConfig::default().build_registry().unwrap();
        assert_eq!(registry.list(), default_catalog());
    }

    #[test]
    fn test_load_json_catalog_preserves_order() {
        let file = write_temp(
            ".json",
            r#"{
                "Robotics": {
                    "description": "Build robots",
                    "schedule": "Saturdays",
                    "max_participants": 8,
                    "participants": ["ada@mergington.edu"]
                },
                "Choir": {
                    "description": "Sing together",
                    "schedule": "Mondays",
                    "max_participants": 40
                }
            }"#,
        );

        let catalog = load_catalog(file.path()).unwrap();
        let names: Vec<_> = catalog.keys().cloned().collect();
        assert_eq!(names, vec!["Robotics", "Choir"]);
        assert_eq!(catalog["Robotics"].participants, vec!["ada@mergington.edu"]);
        assert!(catalog["Choir"].participants.is_empty());
    }

    #[test]
    fn test_load_toml_catalog() {
        let file = write_temp(
            ".toml",
            r#"
            ["Robotics"]
            description = "Build robots"
            schedule = "Saturdays"
            max_participants = 8
            participants = ["ada@mergington.edu"]
            "#,
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog["Robotics"].max_participants, 8);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(RegistryError::Internal(_))));
    }

    #[test]
    fn test_load_catalog_malformed() {
        let file = write_temp(".json", "{ not json");
        let result = load_catalog(file.path());
        assert!(matches!(result, Err(RegistryError::Serialization(_))));
    }

    #[test]
    fn test_build_registry_from_file_with_enforcement() {
        let file = write_temp(
            ".json",
            r#"{"Robotics": {"description": "d", "schedule": "s", "max_participants": 1}}"#,
        );

        let config = ServerConfig {
            catalog_path: Some(file.path().to_path_buf()),
            enforce_capacity: true,
            ..ServerConfig::default()
        };

        let registry = config.build_registry().unwrap();
        assert!(registry.enforces_capacity());
        registry.signup("Robotics", "a@mergington.edu").unwrap();
        assert!(registry.signup("Robotics", "b@mergington.edu").is_err());
    }
}
