//! Browser runtime for the daily insight page.
//!
//! Responsibilities here are intentionally thin:
//! - Install console logging and the panic hook.
//! - Read the inline page config.
//! - Locate the server-rendered elements and wire their events.
//! - Forward events to `insight_page_core::Page` and apply its effects.
//!
//! JavaScript calls [`mount`] once the document is parsed and keeps the
//! returned [`PageHandle`] for teardown.

mod app;
mod config;
mod dom;
mod logging;

pub use app::PageHandle;

use tracing::error;
use wasm_bindgen::prelude::*;

/// Wire the page. Missing elements disable their feature instead of failing.
#[wasm_bindgen]
pub fn mount() -> Result<PageHandle, JsValue> {
    console_error_panic_hook::set_once();
    logging::init_tracing();
    app::run_app().map_err(|err| {
        error!("{err:?}");
        JsValue::from_str(&format!("{err:#}"))
    })
}
