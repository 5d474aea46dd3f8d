use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub paths: PathsConfig,
    pub genius: GeniusConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
    /// Where saved lyrics files land. Falls back to the platform Downloads
    /// dir, then the data dir.
    pub download_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeniusConfig {
    /// Genius API token (https://genius.com/api-clients). The link
    /// fallback is skipped when unset.
    pub token: Option<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let proj = ProjectDirs::from("dev", "verso", "verso");
        let data_dir = proj
            .as_ref()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("verso"));
        Self {
            data_dir,
            download_dir: None,
        }
    }
}

impl Config {
    /// Resolve the directory for saved lyrics files.
    pub fn download_dir(&self) -> PathBuf {
        if let Some(dir) = &self.paths.download_dir {
            return dir.clone();
        }
        if let Some(dirs) = directories::UserDirs::new()
            && let Some(dl) = dirs.download_dir()
        {
            return dl.to_path_buf();
        }
        self.paths.data_dir.clone()
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(&path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "verso", "verso").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = Config::default();
        save(&cfg, Some(&path))?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_creates_defaults() {
        let path = std::env::temp_dir().join(format!(
            "verso-config-{}-defaults/config.toml",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let cfg = load(Some(&path)).unwrap();
        assert!(cfg.input.mouse);
        assert!(cfg.genius.token.is_none());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_round_trip_preserves_token() {
        let path = std::env::temp_dir().join(format!(
            "verso-config-{}-roundtrip/config.toml",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let mut cfg = Config::default();
        cfg.genius.token = Some("abc123".to_string());
        save(&cfg, Some(&path)).unwrap();

        let loaded = load(Some(&path)).unwrap();
        assert_eq!(loaded.genius.token.as_deref(), Some("abc123"));

        let _ = fs::remove_file(&path);
    }
}
