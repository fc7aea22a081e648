pub(crate) fn default_highlight_offset_px() -> f64 {
    100.0
}

pub(crate) fn default_click_offset_px() -> f64 {
    20.0
}

pub(crate) fn default_fallback_click_offset_px() -> f64 {
    80.0
}

pub(crate) fn default_smooth_scroll() -> bool {
    true
}

pub(crate) fn default_base_path() -> String {
    "/".to_string()
}

pub(crate) fn default_date_param() -> String {
    "date".to_string()
}

pub(crate) fn default_stagger_ms() -> u32 {
    100
}

pub(crate) fn default_duration_ms() -> u32 {
    500
}

pub(crate) fn default_lift_px() -> f64 {
    20.0
}

pub(crate) fn default_pulse_period_secs() -> f32 {
    2.0
}

pub(crate) fn default_date_picker_id() -> String {
    "datePicker".to_string()
}

pub(crate) fn default_today_button_id() -> String {
    "todayBtn".to_string()
}

pub(crate) fn default_toc_id() -> String {
    "toc".to_string()
}

pub(crate) fn default_toc_link() -> String {
    ".toc-link".to_string()
}

pub(crate) fn default_section() -> String {
    ".insight-section".to_string()
}

pub(crate) fn default_item() -> String {
    ".insight-item".to_string()
}

pub(crate) fn default_highlight_badge() -> String {
    ".insight-item.highlight .badge".to_string()
}

pub(crate) fn default_active_class() -> String {
    "active".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
