use contracts::shared::config::{load_config, Config, ConfigOverrides};
use web_sys::window;

/// Configuration for this page: embedded defaults plus query-string overrides
///
/// `?api_base=http://localhost:8000/api/v1&timeout_ms=5000`
pub fn client_config() -> Result<Config, String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let overrides: ConfigOverrides = serde_qs::from_str(search.trim_start_matches('?'))
        .unwrap_or_else(|e| {
            log::warn!("Ignoring malformed query string overrides: {}", e);
            ConfigOverrides::default()
        });

    load_config(&overrides).map_err(|e| e.to_string())
}
