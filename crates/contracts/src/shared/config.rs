use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Базовый адрес API справочников (без завершающего "/")
    pub base_url: String,
    /// Сколько ждать загрузку всех справочников, мс
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

fn default_timeout_ms() -> u32 {
    15_000
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://app.tablecrm.com/api/v1"
timeout_ms = 15000
"#;

/// Overrides taken from the page query string (`?api_base=...&timeout_ms=...`)
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ConfigOverrides {
    pub api_base: Option<String>,
    pub timeout_ms: Option<u32>,
}

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    if config.api.base_url.is_empty() {
        anyhow::bail!("api.base_url must not be empty");
    }
    if config.api.timeout_ms == 0 {
        anyhow::bail!("api.timeout_ms must be positive");
    }
    Ok(config)
}

/// Load configuration: embedded default with optional overrides applied
///
/// An override that would make the config invalid is ignored with a warning.
pub fn load_config(overrides: &ConfigOverrides) -> anyhow::Result<Config> {
    let mut config = parse_config(DEFAULT_CONFIG)?;

    if let Some(base) = overrides.api_base.as_deref() {
        let base = base.trim().trim_end_matches('/');
        if base.is_empty() {
            log::warn!("Ignoring empty api_base override");
        } else {
            log::info!("Using API base override: {}", base);
            config.api.base_url = base.to_string();
        }
    }

    match overrides.timeout_ms {
        Some(0) => log::warn!("Ignoring zero timeout_ms override"),
        Some(ms) => config.api.timeout_ms = ms,
        None => {}
    }

    Ok(config)
}
