use super::defaults;
use super::models::{AppConfig, LogLevel};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    scroll: ScrollConfig,
    #[serde(default)]
    navigation: NavigationConfig,
    #[serde(default)]
    animation: AnimationConfig,
    #[serde(default)]
    selectors: SelectorConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            highlight_offset_px: tables.scroll.highlight_offset_px,
            click_offset_px: tables.scroll.click_offset_px,
            fallback_click_offset_px: tables.scroll.fallback_click_offset_px,
            smooth_scroll: tables.scroll.smooth_scroll,
            base_path: tables.navigation.base_path,
            date_param: tables.navigation.date_param,
            stagger_ms: tables.animation.stagger_ms,
            duration_ms: tables.animation.duration_ms,
            lift_px: tables.animation.lift_px,
            pulse_period_secs: tables.animation.pulse_period_secs,
            date_picker_id: tables.selectors.date_picker_id,
            today_button_id: tables.selectors.today_button_id,
            toc_id: tables.selectors.toc_id,
            toc_link_selector: tables.selectors.toc_link,
            section_selector: tables.selectors.section,
            item_selector: tables.selectors.item,
            highlight_badge_selector: tables.selectors.highlight_badge,
            active_class: tables.selectors.active_class,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            scroll: ScrollConfig {
                highlight_offset_px: config.highlight_offset_px,
                click_offset_px: config.click_offset_px,
                fallback_click_offset_px: config.fallback_click_offset_px,
                smooth_scroll: config.smooth_scroll,
            },
            navigation: NavigationConfig {
                base_path: config.base_path.clone(),
                date_param: config.date_param.clone(),
            },
            animation: AnimationConfig {
                stagger_ms: config.stagger_ms,
                duration_ms: config.duration_ms,
                lift_px: config.lift_px,
                pulse_period_secs: config.pulse_period_secs,
            },
            selectors: SelectorConfig {
                date_picker_id: config.date_picker_id.clone(),
                today_button_id: config.today_button_id.clone(),
                toc_id: config.toc_id.clone(),
                toc_link: config.toc_link_selector.clone(),
                section: config.section_selector.clone(),
                item: config.item_selector.clone(),
                highlight_badge: config.highlight_badge_selector.clone(),
                active_class: config.active_class.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ScrollConfig {
    #[serde(default = "defaults::default_highlight_offset_px")]
    highlight_offset_px: f64,
    #[serde(default = "defaults::default_click_offset_px")]
    click_offset_px: f64,
    #[serde(default = "defaults::default_fallback_click_offset_px")]
    fallback_click_offset_px: f64,
    #[serde(default = "defaults::default_smooth_scroll")]
    smooth_scroll: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            highlight_offset_px: defaults::default_highlight_offset_px(),
            click_offset_px: defaults::default_click_offset_px(),
            fallback_click_offset_px: defaults::default_fallback_click_offset_px(),
            smooth_scroll: defaults::default_smooth_scroll(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct NavigationConfig {
    #[serde(default = "defaults::default_base_path")]
    base_path: String,
    #[serde(default = "defaults::default_date_param")]
    date_param: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            base_path: defaults::default_base_path(),
            date_param: defaults::default_date_param(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AnimationConfig {
    #[serde(default = "defaults::default_stagger_ms")]
    stagger_ms: u32,
    #[serde(default = "defaults::default_duration_ms")]
    duration_ms: u32,
    #[serde(default = "defaults::default_lift_px")]
    lift_px: f64,
    #[serde(default = "defaults::default_pulse_period_secs")]
    pulse_period_secs: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            stagger_ms: defaults::default_stagger_ms(),
            duration_ms: defaults::default_duration_ms(),
            lift_px: defaults::default_lift_px(),
            pulse_period_secs: defaults::default_pulse_period_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct SelectorConfig {
    #[serde(default = "defaults::default_date_picker_id")]
    date_picker_id: String,
    #[serde(default = "defaults::default_today_button_id")]
    today_button_id: String,
    #[serde(default = "defaults::default_toc_id")]
    toc_id: String,
    #[serde(default = "defaults::default_toc_link")]
    toc_link: String,
    #[serde(default = "defaults::default_section")]
    section: String,
    #[serde(default = "defaults::default_item")]
    item: String,
    #[serde(default = "defaults::default_highlight_badge")]
    highlight_badge: String,
    #[serde(default = "defaults::default_active_class")]
    active_class: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            date_picker_id: defaults::default_date_picker_id(),
            today_button_id: defaults::default_today_button_id(),
            toc_id: defaults::default_toc_id(),
            toc_link: defaults::default_toc_link(),
            section: defaults::default_section(),
            item: defaults::default_item(),
            highlight_badge: defaults::default_highlight_badge(),
            active_class: defaults::default_active_class(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
