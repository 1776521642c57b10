use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Prefix for collection requests (`/api` is proxied to the backend in dev)
    pub base_url: String,
    /// Origin serving the `uploads/` directory
    pub image_base_url: String,
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DataConfig {
    pub mode: DataModeSetting,
}

/// Data mode as written in the config file
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataModeSetting {
    /// Mock fallback in debug builds, live data in release builds
    Auto,
    /// Always live data, even in debug builds
    Live,
}

/// Which collection source the app is wired with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    Live,
    MockFallback,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "/api"
image_base_url = "/"
timeout_ms = 2000

[data]
mode = "auto"
"#;

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "/api".to_string(),
                image_base_url: "/".to_string(),
                timeout_ms: 2000,
            },
            data: DataConfig {
                mode: DataModeSetting::Auto,
            },
        }
    }
}

impl Config {
    /// Resolve the data mode for the current build
    pub fn data_mode(&self) -> DataMode {
        resolve_data_mode(self.data.mode, cfg!(debug_assertions))
    }
}

/// Mock fallback is only ever enabled for development builds.
fn resolve_data_mode(setting: DataModeSetting, dev_build: bool) -> DataMode {
    match setting {
        DataModeSetting::Auto if dev_build => DataMode::MockFallback,
        _ => DataMode::Live,
    }
}

/// Load the embedded configuration
///
/// Base URLs may be overridden at compile time through the
/// `CATALOG_API_BASE` and `CATALOG_IMAGE_BASE` environment variables.
pub fn load_config() -> anyhow::Result<Config> {
    let config = parse_config(DEFAULT_CONFIG)?;
    Ok(apply_overrides(
        config,
        option_env!("CATALOG_API_BASE"),
        option_env!("CATALOG_IMAGE_BASE"),
    ))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.api.timeout_ms == 0 {
        anyhow::bail!("api.timeout_ms must be greater than zero");
    }
    Ok(config)
}

fn apply_overrides(mut config: Config, api_base: Option<&str>, image_base: Option<&str>) -> Config {
    if let Some(base) = api_base.filter(|s| !s.is_empty()) {
        log::info!("API base overridden: {}", base);
        config.api.base_url = base.to_string();
    }
    if let Some(base) = image_base.filter(|s| !s.is_empty()) {
        log::info!("Image base overridden: {}", base);
        config.api.image_base_url = base.to_string();
    }
    config
}
