//! Optional, read-only override of the presenter defaults.
//!
//! herald never writes to disk. A `config.toml` placed in the user's config
//! directory by hand replaces the built-in defaults; without one the
//! presenter runs on [`Config::default`].

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use herald_bridge::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No home directory could be resolved for the current user.
    #[error("no configuration directory for the current user")]
    NoConfigDir,
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid override in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where a hand-written override is looked up.
pub fn override_path() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("dev", "herald", "herald")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Reads the override from the user's config directory, if there is one.
pub async fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&override_path()?).await
}

/// Reads the override at `path`. A missing file yields the defaults and
/// leaves the filesystem untouched.
pub async fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No override at {path:?}, using built-in defaults");
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_owned(),
                source,
            });
        }
    };

    log::info!("Applying configuration override from {path:?}");
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use herald_bridge::{Position, Theme};

    use super::*;

    #[tokio::test]
    async fn missing_override_yields_defaults_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).await.unwrap();

        assert_eq!(config, Config::default());
        assert!(!path.exists());
        assert!(!dir.path().join("nested").exists());
    }

    #[tokio::test]
    async fn partial_override_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(
            &path,
            "[notice]\nposition = \"bottom-end\"\n\n[dialog]\nconfirm_button_theme = \"blue\"\n",
        )
        .await
        .unwrap();

        let config = load_config_from(&path).await.unwrap();

        assert_eq!(config.notice.position, Position::BottomEnd);
        assert_eq!(config.notice.theme, Theme::Light);
        assert_eq!(config.dialog.confirm_button_theme, Theme::Blue);
        assert_eq!(config.dialog.confirm_button_text, "OK");
    }

    #[tokio::test]
    async fn invalid_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "notice = 3").await.unwrap();

        let error = load_config_from(&path).await.unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
    }
}
