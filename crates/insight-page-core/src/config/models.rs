use serde::Deserialize;

/// Flat view of every tunable setting; deserializable from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct AppConfig {
    /// Added to the TOC bar height when deciding which section is current.
    #[serde(default = "crate::config::defaults::default_highlight_offset_px")]
    pub highlight_offset_px: f64,
    /// Added to the TOC bar height when scrolling to a clicked section.
    #[serde(default = "crate::config::defaults::default_click_offset_px")]
    pub click_offset_px: f64,
    /// Whole click offset used when the page has no TOC bar.
    #[serde(default = "crate::config::defaults::default_fallback_click_offset_px")]
    pub fallback_click_offset_px: f64,
    #[serde(default = "crate::config::defaults::default_smooth_scroll")]
    pub smooth_scroll: bool,
    #[serde(default = "crate::config::defaults::default_base_path")]
    pub base_path: String,
    #[serde(default = "crate::config::defaults::default_date_param")]
    pub date_param: String,
    #[serde(default = "crate::config::defaults::default_stagger_ms")]
    pub stagger_ms: u32,
    #[serde(default = "crate::config::defaults::default_duration_ms")]
    pub duration_ms: u32,
    #[serde(default = "crate::config::defaults::default_lift_px")]
    pub lift_px: f64,
    #[serde(default = "crate::config::defaults::default_pulse_period_secs")]
    pub pulse_period_secs: f32,
    #[serde(default = "crate::config::defaults::default_date_picker_id")]
    pub date_picker_id: String,
    #[serde(default = "crate::config::defaults::default_today_button_id")]
    pub today_button_id: String,
    #[serde(default = "crate::config::defaults::default_toc_id")]
    pub toc_id: String,
    #[serde(default = "crate::config::defaults::default_toc_link")]
    pub toc_link_selector: String,
    #[serde(default = "crate::config::defaults::default_section")]
    pub section_selector: String,
    #[serde(default = "crate::config::defaults::default_item")]
    pub item_selector: String,
    #[serde(default = "crate::config::defaults::default_highlight_badge")]
    pub highlight_badge_selector: String,
    #[serde(default = "crate::config::defaults::default_active_class")]
    pub active_class: String,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            highlight_offset_px: crate::config::defaults::default_highlight_offset_px(),
            click_offset_px: crate::config::defaults::default_click_offset_px(),
            fallback_click_offset_px: crate::config::defaults::default_fallback_click_offset_px(),
            smooth_scroll: crate::config::defaults::default_smooth_scroll(),
            base_path: crate::config::defaults::default_base_path(),
            date_param: crate::config::defaults::default_date_param(),
            stagger_ms: crate::config::defaults::default_stagger_ms(),
            duration_ms: crate::config::defaults::default_duration_ms(),
            lift_px: crate::config::defaults::default_lift_px(),
            pulse_period_secs: crate::config::defaults::default_pulse_period_secs(),
            date_picker_id: crate::config::defaults::default_date_picker_id(),
            today_button_id: crate::config::defaults::default_today_button_id(),
            toc_id: crate::config::defaults::default_toc_id(),
            toc_link_selector: crate::config::defaults::default_toc_link(),
            section_selector: crate::config::defaults::default_section(),
            item_selector: crate::config::defaults::default_item(),
            highlight_badge_selector: crate::config::defaults::default_highlight_badge(),
            active_class: crate::config::defaults::default_active_class(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
