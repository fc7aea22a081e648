mod listeners;
mod runtime;

use crate::config::load_page_config;
use crate::dom::DomPage;
use crate::logging::set_log_level;
use anyhow::{Context, Result};
use insight_page_core::Page;
use listeners::Listener;
use runtime::Runtime;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;
use wasm_bindgen::prelude::*;

/// A mounted page. Dropping or disposing it detaches every listener.
#[wasm_bindgen]
pub struct PageHandle {
    runtime: Rc<RefCell<Runtime>>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl PageHandle {
    /// Id of the section whose TOC link is highlighted.
    #[wasm_bindgen(js_name = activeSection)]
    pub fn active_section(&self) -> Option<String> {
        self.runtime
            .try_borrow()
            .ok()
            .and_then(|rt| rt.page().toc().active().map(str::to_string))
    }

    pub fn dispose(mut self) {
        self.teardown();
    }
}

impl PageHandle {
    fn teardown(&mut self) {
        let detached = self.listeners.len();
        self.listeners.clear();
        let mut passes = 0;
        if let Ok(mut runtime) = self.runtime.try_borrow_mut() {
            runtime.teardown();
            passes = runtime.page().resolution_passes();
        }
        if detached > 0 {
            info!(listeners = detached, passes, "Page disposed");
        }
    }
}

impl Drop for PageHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

pub(crate) fn run_app() -> Result<PageHandle> {
    let window = web_sys::window().context("no global window")?;
    let document = window.document().context("window has no document")?;

    let config = load_page_config(&document);
    set_log_level(config.log_level.as_filter_str());
    info!(
        level = %config.log_level,
        base_path = %config.base_path,
        "Mounting insight page"
    );

    let dom = DomPage::locate(window, document, &config);
    let runtime = Rc::new(RefCell::new(Runtime::new(Page::new(config), dom)));
    runtime
        .borrow_mut()
        .install_frame_callback(Rc::downgrade(&runtime));
    let listeners = listeners::attach_all(&runtime).context("Failed to wire page events")?;

    {
        let mut rt = runtime.borrow_mut();
        let loaded = rt.loaded_message();
        rt.dispatch(loaded);
        let page = rt.page();
        info!(
            toc_links = page.toc().links().len(),
            active = page.toc().active().unwrap_or("-"),
            date_control = page.date_nav().has_control(),
            "Insight page mounted"
        );
    }

    Ok(PageHandle {
        runtime,
        listeners,
    })
}
