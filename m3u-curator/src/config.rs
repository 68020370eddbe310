use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use m3u_groups_rs::{ALLOWLIST_FILE_NAME, FILTERED_TAG};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "curator.yml";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub allowlist_file: Option<String>,
    pub filtered_tag: Option<String>,
    pub skip_export_header: Option<bool>,
}

impl Config {
    pub fn allowlist_file(&self) -> &str {
        self.allowlist_file.as_deref().unwrap_or(ALLOWLIST_FILE_NAME)
    }

    pub fn filtered_tag(&self) -> &str {
        self.filtered_tag.as_deref().unwrap_or(FILTERED_TAG)
    }

    pub fn skip_export_header(&self) -> bool {
        self.skip_export_header.unwrap_or(false)
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let file = File::open(path.as_ref())?;
    let config: Config = serde_yaml::from_reader(file)?;
    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to the defaults
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Config::default());
    }

    load_config(path).with_context(|| format!("Failed to load config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::{load_config, load_config_or_default};

    #[test]
    fn test_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_or_default(dir.path().join("curator.yml")).unwrap();

        assert_eq!(config.allowlist_file(), "GroupTitles.txt");
        assert_eq!(config.filtered_tag(), "_filtered_");
        assert!(!config.skip_export_header());
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curator.yml");
        fs::write(
            &path,
            "allowlistFile: Keep.txt\nfilteredTag: \"-kept-\"\nskipExportHeader: true\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.allowlist_file(), "Keep.txt");
        assert_eq!(config.filtered_tag(), "-kept-");
        assert!(config.skip_export_header());
    }

    #[test]
    fn test_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curator.yml");
        fs::write(&path, "skipExportHeader: true\n").unwrap();

        let config = load_config_or_default(&path).unwrap();
        assert_eq!(config.allowlist_file(), "GroupTitles.txt");
        assert!(config.skip_export_header());
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curator.yml");
        fs::write(&path, "skipExportHeader: [1, 2]\n").unwrap();

        assert!(load_config_or_default(&path).is_err());
    }
}
