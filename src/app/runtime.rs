use crate::dom::DomPage;
use insight_page_core::{Effect, Message, NavigationDate, Page};
use std::cell::RefCell;
use std::rc::Weak;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Page state plus the document it drives.
pub(crate) struct Runtime {
    page: Page,
    dom: DomPage,
    frame_callback: Option<Closure<dyn FnMut(f64)>>,
    frame_id: Option<i32>,
}

impl Runtime {
    pub(crate) fn new(page: Page, dom: DomPage) -> Self {
        Self {
            page,
            dom,
            frame_callback: None,
            frame_id: None,
        }
    }

    pub(crate) fn dom(&self) -> &DomPage {
        &self.dom
    }

    pub(crate) fn page(&self) -> &Page {
        &self.page
    }

    /// The frame callback samples layout itself, so the handler always reads live state.
    pub(crate) fn install_frame_callback(&mut self, runtime: Weak<RefCell<Runtime>>) {
        let callback = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
            run_frame(&runtime);
        });
        self.frame_callback = Some(callback);
    }

    pub(crate) fn loaded_message(&self) -> Message {
        Message::Loaded {
            layout: self.dom.sample_layout(),
            links: self.dom.toc_links(),
            item_count: self.dom.item_count(),
            date_control: self.dom.date_value(),
            query_date: self.dom.query_date(),
            today: today(),
        }
    }

    pub(crate) fn dispatch(&mut self, message: Message) {
        let effects = self.page.reduce(message);
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::RegisterStyle(rule) => {
                self.dom.inject_style_once(&rule);
            }
            Effect::AnimateEntrance { reveals, styles } => {
                self.dom.animate_entrance(&reveals, &styles);
            }
            Effect::PulseBadges { animation } => self.dom.pulse_badges(&animation),
            Effect::SetDateValue(date) => self.dom.set_date_value(&date.to_string()),
            Effect::SetDateMax(date) => self.dom.set_date_max(&date.to_string()),
            Effect::RequestFrame => self.request_frame(),
            Effect::HighlightTocLink(index) => self.dom.highlight_toc_link(index),
            Effect::ScrollTo { top, smooth } => self.dom.scroll_to(top, smooth),
            Effect::Navigate(target) => self.dom.navigate(&target.to_string()),
        }
    }

    fn request_frame(&mut self) {
        let Some(callback) = self.frame_callback.as_ref() else {
            self.page.cancel_pending_frame();
            return;
        };
        match self
            .dom
            .window()
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.frame_id = Some(id),
            Err(err) => {
                warn!(?err, "requestAnimationFrame failed");
                self.page.cancel_pending_frame();
            }
        }
    }

    pub(crate) fn teardown(&mut self) {
        if let Some(id) = self.frame_id.take() {
            if let Err(err) = self.dom.window().cancel_animation_frame(id) {
                warn!(?err, "cancelAnimationFrame failed");
            }
        }
        if self.page.cancel_pending_frame() {
            debug!("Dropped pending scroll frame");
        }
        self.frame_callback = None;
    }
}

pub(crate) fn today() -> NavigationDate {
    NavigationDate::new(chrono::Local::now().date_naive())
}

/// Resolve against a fresh layout. A busy runtime retries on the next task,
/// which keeps the scheduler from staying pending with no frame queued.
fn run_frame(runtime: &Weak<RefCell<Runtime>>) {
    let Some(shared) = runtime.upgrade() else {
        return;
    };
    let Ok(mut rt) = shared.try_borrow_mut() else {
        warn!("Runtime busy during animation frame; retrying");
        retry_frame(runtime.clone());
        return;
    };
    rt.frame_id = None;
    let layout = rt.dom.sample_layout();
    rt.dispatch(Message::FrameFired(layout));
}

fn retry_frame(runtime: Weak<RefCell<Runtime>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let retry = Closure::once_into_js(move || run_frame(&runtime));
    if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        retry.unchecked_ref::<js_sys::Function>(),
        0,
    ) {
        warn!(?err, "Failed to schedule frame retry");
    }
}
