//! Page configuration lookup.
//!
//! Settings come from an optional inline block:
//! `<script id="insight-page-config" type="application/toml">`. Without it,
//! or when it does not parse, defaults apply (see `conf/config.toml`).

use insight_page_core::config::{AppConfig, load_config};
use tracing::info;
use web_sys::Document;

pub(crate) const CONFIG_ELEMENT_ID: &str = "insight-page-config";

pub(crate) fn load_page_config(document: &Document) -> AppConfig {
    let inline = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    if inline.is_some() {
        info!(id = CONFIG_ELEMENT_ID, "Loaded inline page config");
    }
    load_config(inline.as_deref())
}
