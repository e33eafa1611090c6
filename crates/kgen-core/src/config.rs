use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level project configuration loaded from `.kgen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KgenConfig {
    pub input: String,
    pub output: String,
    pub naming: NamingMode,
    /// Kinds to generate. Empty means every discovered resource.
    pub include: Vec<String>,
    /// Skip resources that fail to emit instead of aborting the run.
    pub keep_going: bool,
    pub no_docs: bool,
}

impl Default for KgenConfig {
    fn default() -> Self {
        Self {
            input: "k8s.json".to_string(),
            output: "imports".to_string(),
            naming: NamingMode::Short,
            include: Vec::new(),
            keep_going: false,
            no_docs: false,
        }
    }
}

impl KgenConfig {
    pub fn includes_kind(&self, kind: &str) -> bool {
        self.include.is_empty() || self.include.iter().any(|k| k == kind)
    }
}

/// How referenced definitions are turned into type names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingMode {
    /// Trailing `.`-separated component: `io.k8s.api.core.v1.PodSpec` → `PodSpec`.
    #[default]
    Short,
    /// Whole definition name: `io.k8s.api.core.v1.PodSpec` → `IoK8sApiCoreV1PodSpec`.
    Qualified,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".kgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<KgenConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: KgenConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# kgen configuration
input: k8s.json         # JSON or YAML schema document with a `definitions` map
output: imports

naming: short           # short | qualified (qualified avoids collisions across API versions)

include: []             # kinds to generate; empty generates every resource
  # - Deployment
  # - Service

keep_going: false       # skip resources that fail instead of aborting
no_docs: false          # omit doc comments from generated code
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KgenConfig::default();
        assert_eq!(config.input, "k8s.json");
        assert_eq!(config.output, "imports");
        assert_eq!(config.naming, NamingMode::Short);
        assert!(config.include.is_empty());
        assert!(!config.keep_going);
        assert!(!config.no_docs);
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: crds.yaml
output: out
naming: qualified
include:
  - Deployment
  - Service
keep_going: true
no_docs: true
"#;
        let config: KgenConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "crds.yaml");
        assert_eq!(config.output, "out");
        assert_eq!(config.naming, NamingMode::Qualified);
        assert!(config.includes_kind("Service"));
        assert!(!config.includes_kind("Pod"));
        assert!(config.keep_going);
        assert!(config.no_docs);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: KgenConfig = serde_yaml_ng::from_str("input: api.json\n").unwrap();
        assert_eq!(config.input, "api.json");
        // Defaults applied
        assert_eq!(config.output, "imports");
        assert!(config.includes_kind("Anything"));
    }

    #[test]
    fn test_default_content_parses() {
        let config: KgenConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.input, "k8s.json");
        assert!(config.include.is_empty());
    }

    #[test]
    fn test_load_config_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(load_config(&path).unwrap().is_none());

        fs::write(&path, "output: generated\nkeep_going: true\n").unwrap();
        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config.output, "generated");
        assert!(config.keep_going);

        fs::write(&path, "naming: [not, a, mode]\n").unwrap();
        assert!(load_config(&path).is_err());
    }
}
