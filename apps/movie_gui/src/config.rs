use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use catalog_client::{CatalogConfig, DEFAULT_API_BASE_URL};
use shared::domain::DEFAULT_IMAGE_BASE_URL;

pub const DEFAULT_CONFIG_FILE: &str = "movie_list.toml";

/// Key baked in at compile time, e.g. `TMDB_API_KEY=... cargo build`.
const BUILD_TIME_API_KEY: Option<&str> = option_env!("TMDB_API_KEY");

#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub api_base_url: String,
    pub image_base_url: String,
    pub font_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: BUILD_TIME_API_KEY.unwrap_or_default().to_string(),
            api_base_url: DEFAULT_API_BASE_URL.into(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.into(),
            font_path: None,
        }
    }
}

impl Settings {
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig::new(self.api_key.clone())
            .with_api_base_url(self.api_base_url.clone())
            .with_image_base_url(self.image_base_url.clone())
    }
}

/// Defaults, then the TOML file, then environment variables.
///
/// A missing default file is fine; a missing file passed explicitly is an error.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with_env(config_path, |name| std::env::var(name).ok())
}

fn load_settings_with_env(
    config_path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let (path, explicit) = match config_path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let file_contents = match fs::read_to_string(&path) {
        Ok(raw) => Some(raw),
        Err(err) if !explicit && err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    };

    let settings = resolve_settings(file_contents.as_deref(), env)
        .with_context(|| format!("invalid config file '{}'", path.display()))?;

    if settings.api_key.trim().is_empty() {
        tracing::warn!("no catalog API key configured; the movie list will stay empty");
    }
    Ok(settings)
}

fn resolve_settings(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = file_contents {
        let file_cfg: HashMap<String, String> =
            toml::from_str(raw).context("expected a flat table of string values")?;
        if let Some(v) = file_cfg.get("tmdb_api_key") {
            settings.api_key = v.clone();
        }
        if let Some(v) = file_cfg.get("api_base_url") {
            settings.api_base_url = v.clone();
        }
        if let Some(v) = file_cfg.get("image_base_url") {
            settings.image_base_url = v.clone();
        }
        if let Some(v) = file_cfg.get("font_path") {
            settings.font_path = Some(PathBuf::from(v));
        }
    }

    let non_empty = |name: &str| env(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("TMDB_API_KEY") {
        settings.api_key = v;
    }
    if let Some(v) = non_empty("APP__TMDB_API_KEY") {
        settings.api_key = v;
    }
    if let Some(v) = non_empty("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = non_empty("APP__IMAGE_BASE_URL") {
        settings.image_base_url = v;
    }
    if let Some(v) = non_empty("MOVIE_LIST_FONT") {
        settings.font_path = Some(PathBuf::from(v));
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_point_at_public_catalog() {
        let settings = resolve_settings(None, no_env).expect("settings");
        assert_eq!(settings.api_base_url, "https://api.themoviedb.org/3");
        assert_eq!(settings.image_base_url, "https://image.tmdb.org/t/p");
        assert_eq!(settings.font_path, None);
    }

    #[test]
    fn file_values_override_defaults() {
        let raw = r#"
            tmdb_api_key = "from-file"
            api_base_url = "http://127.0.0.1:9000/3"
            font_path = "/usr/share/fonts/NanumGothic.ttf"
        "#;
        let settings = resolve_settings(Some(raw), no_env).expect("settings");
        assert_eq!(settings.api_key, "from-file");
        assert_eq!(settings.api_base_url, "http://127.0.0.1:9000/3");
        assert_eq!(settings.image_base_url, "https://image.tmdb.org/t/p");
        assert_eq!(
            settings.font_path,
            Some(PathBuf::from("/usr/share/fonts/NanumGothic.ttf"))
        );
    }

    #[test]
    fn environment_wins_over_file_and_ignores_blank_values() {
        let raw = r#"tmdb_api_key = "from-file""#;
        let env = |name: &str| match name {
            "TMDB_API_KEY" => Some("from-env".to_string()),
            "APP__IMAGE_BASE_URL" => Some("   ".to_string()),
            _ => None,
        };
        let settings = resolve_settings(Some(raw), env).expect("settings");
        assert_eq!(settings.api_key, "from-env");
        assert_eq!(settings.image_base_url, "https://image.tmdb.org/t/p");
    }

    #[test]
    fn prefixed_key_wins_over_plain_key() {
        let env = |name: &str| match name {
            "TMDB_API_KEY" => Some("plain".to_string()),
            "APP__TMDB_API_KEY" => Some("prefixed".to_string()),
            _ => None,
        };
        let settings = resolve_settings(None, env).expect("settings");
        assert_eq!(settings.api_key, "prefixed");
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(resolve_settings(Some("tmdb_api_key = 42"), no_env).is_err());
    }

    #[test]
    fn catalog_config_carries_settings() {
        let env = |name: &str| match name {
            "APP__TMDB_API_KEY" => Some("k".to_string()),
            "APP__API_BASE_URL" => Some("http://localhost:1/3".to_string()),
            _ => None,
        };
        let config = resolve_settings(None, env)
            .expect("settings")
            .catalog_config();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.api_base_url, "http://localhost:1/3");
    }

    #[test]
    fn explicit_missing_config_file_is_an_error() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("movie_list_missing_{suffix}.toml"));

        let err = load_settings_with_env(Some(&path), no_env)
            .err()
            .expect("missing file must fail");
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn explicit_config_file_is_read() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("movie_list_config_{suffix}.toml"));
        fs::write(&path, "api_base_url = \"http://127.0.0.1:7/3\"\n").expect("write config");

        let settings = load_settings_with_env(Some(&path), no_env).expect("settings");
        assert_eq!(settings.api_base_url, "http://127.0.0.1:7/3");

        let env = |name: &str| match name {
            "APP__API_BASE_URL" => Some("http://127.0.0.1:8/3".to_string()),
            _ => None,
        };
        let settings = load_settings_with_env(Some(&path), env).expect("settings");
        assert_eq!(settings.api_base_url, "http://127.0.0.1:8/3");

        fs::remove_file(path).expect("cleanup");
    }
}
