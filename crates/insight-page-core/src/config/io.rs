use super::models::AppConfig;
use super::tables::ConfigTables;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Parse the table layout (`[scroll]`, `[navigation]`, ...) into a flat config.
pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    let tables: ConfigTables = toml::from_str(contents)?;
    Ok(tables.into())
}

pub fn serialize_config(config: &AppConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string(&ConfigTables::from(config))?)
}

/// Load configuration from optional inline TOML, falling back to defaults on error.
pub fn load_config(source: Option<&str>) -> AppConfig {
    let Some(contents) = source.map(str::trim).filter(|s| !s.is_empty()) else {
        debug!("No inline config present; using defaults");
        return AppConfig::default();
    };

    match parse_config(contents) {
        Ok(cfg) => {
            debug!("Parsed inline configuration");
            cfg
        }
        Err(err) => {
            warn!("Falling back to default config: {err}");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn missing_source_yields_defaults() {
        assert_eq!(load_config(None), AppConfig::default());
        assert_eq!(load_config(Some("   \n")), AppConfig::default());
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        assert_eq!(load_config(Some("[scroll\nfoo = ")), AppConfig::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let cfg = parse_config(
            r#"
            [scroll]
            click_offset_px = 32.0

            [logging]
            log_level = "debug"
            "#,
        )
        .expect("partial config parses");
        assert_eq!(cfg.click_offset_px, 32.0);
        assert_eq!(cfg.highlight_offset_px, 100.0);
        assert_eq!(cfg.fallback_click_offset_px, 80.0);
        assert_eq!(cfg.date_param, "date");
        assert_eq!(cfg.log_level, LogLevel::Debug);
    }

    #[test]
    fn sample_config_matches_defaults() {
        let sample = include_str!("../../../../conf/config.toml");
        let cfg = parse_config(sample).expect("sample config parses");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn serialized_tables_parse_back() {
        let mut cfg = AppConfig::default();
        cfg.base_path = "/daily".to_string();
        cfg.stagger_ms = 60;
        let text = serialize_config(&cfg).expect("serialize");
        assert!(text.contains("[navigation]"));
        assert_eq!(parse_config(&text).expect("parse"), cfg);
    }
}
