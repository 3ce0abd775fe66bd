#![doc = include_str!("../README.md")]

use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the root directory when no config path is given.
pub const CONFIG_FILE_NAME: &str = "labels.toml";

#[derive(Debug, Error)]
pub enum LabelsConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Which locale files to rewrite and how to find their parameter section.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LabelsConfig {
    /// Directory holding the locale files, relative to the root directory.
    pub locales_dir: PathBuf,
    /// Language codes, processed in this order. Each maps to
    /// `{locales_dir}/{language}.{extension}`.
    pub languages: Vec<String>,
    /// Locale file extension, without the dot.
    pub extension: String,
    /// Key whose mapping literal opens the parameter section.
    pub section_start: String,
    /// Key prefix whose first occurrence closes the parameter section.
    pub section_end: String,
    /// How many before/after pairs to print per file.
    pub examples_shown: usize,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            locales_dir: PathBuf::from("frontend/lib/i18n/locales"),
            languages: ["en", "de", "es", "fr", "it"]
                .into_iter()
                .map(String::from)
                .collect(),
            extension: "ts".to_string(),
            section_start: "parameters".to_string(),
            section_end: "configEditor.parameters.".to_string(),
            examples_shown: 5,
        }
    }
}

/// One configured locale file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleFile {
    /// Language code, e.g. `de`.
    pub language: String,
    /// File name shown in progress output, e.g. `de.ts`.
    pub file_name: String,
    /// Full path to the file.
    pub path: PathBuf,
}

impl LabelsConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LabelsConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LabelsConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: LabelsConfig = toml::from_str(&content)?;

        tracing::debug!(path = %path.display(), "loaded labels configuration");

        Ok(config)
    }

    /// Resolves the configuration for a run rooted at `root`.
    ///
    /// An explicit path must exist. Without one, `{root}/labels.toml` is used
    /// when present and the defaults otherwise.
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<Self, LabelsConfigError> {
        if let Some(path) = explicit {
            return Self::read_from_path(path);
        }

        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::read_from_path(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the absolute locales directory for `root`.
    pub fn locales_dir_from_base(&self, root: &Path) -> PathBuf {
        root.join(&self.locales_dir)
    }

    /// Returns the configured locale files, in language order.
    pub fn locale_files(&self, root: &Path) -> Vec<LocaleFile> {
        let dir = self.locales_dir_from_base(root);
        self.languages
            .iter()
            .map(|language| {
                let file_name = format!("{}.{}", language, self.extension);
                LocaleFile {
                    language: language.clone(),
                    path: dir.join(&file_name),
                    file_name,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_from_path_success() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        let config_content = r#"
locales_dir = "i18n"
languages = ["en", "pt"]
examples_shown = 2
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = LabelsConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config.locales_dir, PathBuf::from("i18n"));
        assert_eq!(config.languages, vec!["en", "pt"]);
        assert_eq!(config.examples_shown, 2);
        // Unset keys keep their defaults.
        assert_eq!(config.extension, "ts");
        assert_eq!(config.section_end, "configEditor.parameters.");
    }

    #[test]
    fn test_read_from_path_file_not_found() {
        let non_existent_path = Path::new("/non/existent/path/labels.toml");
        let result = LabelsConfig::read_from_path(non_existent_path);
        assert!(matches!(result, Err(LabelsConfigError::NotFound(_))));
    }

    #[test]
    fn test_read_from_path_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_path, "languages = [\"en\"\n[broken").unwrap();

        let result = LabelsConfig::read_from_path(&config_path);
        assert!(matches!(result, Err(LabelsConfigError::ParseError(_))));
    }

    #[test]
    fn test_read_from_path_wrong_type() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_path, "examples_shown = \"five\"").unwrap();

        let result = LabelsConfig::read_from_path(&config_path);
        assert!(matches!(result, Err(LabelsConfigError::ParseError(_))));
    }

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = LabelsConfig::resolve(temp_dir.path(), None).unwrap();
        assert_eq!(config, LabelsConfig::default());
    }

    #[test]
    fn test_resolve_picks_up_root_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "languages = [\"fr\"]\n",
        )
        .unwrap();

        let config = LabelsConfig::resolve(temp_dir.path(), None).unwrap();
        assert_eq!(config.languages, vec!["fr"]);
    }

    #[test]
    fn test_resolve_explicit_path_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("custom.toml");

        let result = LabelsConfig::resolve(temp_dir.path(), Some(missing.as_path()));
        assert!(matches!(result, Err(LabelsConfigError::NotFound(p)) if p == missing));
    }

    #[rstest]
    #[case(0, "en", "en.ts")]
    #[case(1, "de", "de.ts")]
    #[case(4, "it", "it.ts")]
    fn test_default_locale_files(
        #[case] index: usize,
        #[case] language: &str,
        #[case] file_name: &str,
    ) {
        let root = Path::new("/repo");
        let files = LabelsConfig::default().locale_files(root);

        assert_eq!(files.len(), 5);
        assert_eq!(files[index].language, language);
        assert_eq!(files[index].file_name, file_name);
        assert_eq!(
            files[index].path,
            root.join("frontend/lib/i18n/locales").join(file_name)
        );
    }
}
