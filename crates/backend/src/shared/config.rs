use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub frontend: FrontendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    /// Request body limit for `/upload`, bytes
    pub max_body_bytes: usize,
    /// How many CSV rows end up in the chart
    pub sample_rows: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FrontendConfig {
    /// Directory with the built WASM bundle (`trunk build` output)
    pub static_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[upload]
max_body_bytes = 16777216
sample_rows = 10

[frontend]
static_dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.upload.sample_rows == 0 {
        anyhow::bail!("upload.sample_rows must be greater than zero");
    }
    Ok(config)
}

/// Get the static files directory from configuration
///
/// Relative paths are tried against the working directory first, then
/// against the executable directory.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir_str = &config.frontend.static_dir;
    let dir = Path::new(dir_str);

    if dir.is_absolute() || dir.exists() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }

    PathBuf::from(dir_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.upload.max_body_bytes, 16 * 1024 * 1024);
        assert_eq!(config.upload.sample_rows, 10);
        assert_eq!(config.frontend.static_dir, "dist");
    }

    #[test]
    fn test_zero_sample_rows_rejected() {
        let contents = DEFAULT_CONFIG.replace("sample_rows = 10", "sample_rows = 0");
        assert!(parse_config(&contents).is_err());
    }

    #[test]
    fn test_absolute_static_dir_kept() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        let absolute = std::env::temp_dir().join("u508-dist");
        config.frontend.static_dir = absolute.to_string_lossy().into_owned();
        assert_eq!(get_static_dir(&config), absolute);
    }
}
