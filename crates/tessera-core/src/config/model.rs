use crate::error::{Result, TesseraError};
use crate::template::Template;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// tessera.json schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Storage location, display-only
    #[serde(default)]
    pub path: String,
    /// Templates in load order
    #[serde(default)]
    pub templates: Vec<Template>,
}

impl Config {
    /// Read tessera.json
    ///
    /// An empty or whitespace-only file is an empty config.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TesseraError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&content).map_err(|e| TesseraError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write tessera.json
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content =
            serde_json::to_string_pretty(self).map_err(|e| TesseraError::ConfigSerialize {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        std::fs::write(path, content).map_err(|source| TesseraError::ConfigCreate {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Drop templates with an invalid or repeated name
    ///
    /// Each dropped template is logged and the rest keep their order.
    /// Returns the number of templates removed.
    pub fn drop_invalid(&mut self) -> usize {
        let before = self.templates.len();
        let mut seen = HashSet::new();
        let mut position = 0;
        self.templates.retain(|template| {
            position += 1;
            if let Err(e) = template.validate() {
                tracing::warn!(template = position, error = %e, "skipping invalid template");
                return false;
            }
            if !seen.insert(template.name.clone()) {
                tracing::warn!(
                    template = position,
                    name = %template.name,
                    "skipping duplicate template name"
                );
                return false;
            }
            true
        });
        before - self.templates.len()
    }

    /// Look up a template by name
    pub fn find(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tessera_testkit::temp_dir_in_workspace;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "path": "~/.config/tessera/tessera.json",
            "templates": [
                {"name": "go", "description": "go module"},
                {"name": "py", "description": "python package"}
            ]
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.templates.len(), 2);
        assert_eq!(config.templates[1].name, "py");
        assert_eq!(config.find("go").unwrap().desc, "go module");
        assert!(config.find("rust").is_none());
    }

    #[test]
    fn test_from_file_empty_is_default() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join("tessera.json");
        fs::write(&path, "  \n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(config.templates.is_empty());
    }

    #[test]
    fn test_from_file_malformed() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join("tessera.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("CONFIG_PARSE_ERROR"));
    }

    #[test]
    fn test_to_file_then_from_file() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join("tessera.json");
        let config = Config {
            path: "somewhere".to_string(),
            templates: vec![Template::new("go").with_lang("go")],
        };

        config.to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_to_file_into_directory_is_a_create_error() {
        let temp = temp_dir_in_workspace();
        let err = Config::default().to_file(temp.path()).unwrap_err();
        assert!(matches!(err, TesseraError::ConfigCreate { .. }));
    }

    #[test]
    fn test_drop_invalid_skips_duplicates() {
        let mut config = Config {
            path: String::new(),
            templates: vec![
                Template::new("go").with_lang("go"),
                Template::new("py"),
                Template::new("go").with_lang("other"),
            ],
        };
        assert_eq!(config.drop_invalid(), 1);
        let names: Vec<_> = config.templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["go", "py"]);
        assert_eq!(config.templates[0].lang, "go");
    }

    #[test]
    fn test_drop_invalid_skips_blank_names() {
        let mut config = Config {
            path: String::new(),
            templates: vec![Template::new("  "), Template::new("go"), Template::new("")],
        };
        assert_eq!(config.drop_invalid(), 2);
        assert_eq!(config.templates.len(), 1);
        assert_eq!(config.templates[0].name, "go");
    }
}
