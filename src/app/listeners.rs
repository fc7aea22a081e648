use super::runtime::{Runtime, today};
use anyhow::{Result, anyhow};
use insight_page_core::Message;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

/// An attached DOM listener; detaches on drop.
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| anyhow!("failed to attach {event} listener: {err:?}"))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!(event = self.event, ?err, "Failed to detach listener");
        }
    }
}

/// Run `f` against the runtime unless the page was disposed or is mid-dispatch.
fn with_runtime(runtime: &Weak<RefCell<Runtime>>, f: impl FnOnce(&mut Runtime)) {
    let Some(runtime) = runtime.upgrade() else {
        return;
    };
    match runtime.try_borrow_mut() {
        Ok(mut runtime) => f(&mut runtime),
        Err(_) => warn!("Runtime busy; dropping event"),
    };
}

pub(crate) fn attach_all(runtime: &Rc<RefCell<Runtime>>) -> Result<Vec<Listener>> {
    let shared = runtime.borrow();
    let dom = shared.dom();
    let mut listeners = Vec::new();

    let weak = Rc::downgrade(runtime);
    listeners.push(Listener::attach(dom.window(), "scroll", move |_| {
        with_runtime(&weak, |rt| rt.dispatch(Message::Scrolled));
    })?);

    for (link_index, (link, section_id)) in dom.toc_link_elements().iter().enumerate() {
        let weak = Rc::downgrade(runtime);
        let section_id = section_id.clone();
        listeners.push(Listener::attach(link, "click", move |event: Event| {
            event.prevent_default();
            with_runtime(&weak, |rt| {
                let message = Message::TocLinkClicked {
                    link_index,
                    section_id: section_id.clone(),
                    target_offset: rt.dom().section_offset(&section_id),
                    toc_height: rt.dom().toc_height(),
                };
                rt.dispatch(message);
            });
        })?);
    }

    if let Some(picker) = dom.date_picker() {
        let weak = Rc::downgrade(runtime);
        listeners.push(Listener::attach(picker, "change", move |_| {
            with_runtime(&weak, |rt| {
                let value = rt.dom().date_value().unwrap_or_default();
                rt.dispatch(Message::DateChanged {
                    value,
                    today: today(),
                });
            });
        })?);
    }

    if let Some(button) = dom.today_button() {
        let weak = Rc::downgrade(runtime);
        listeners.push(Listener::attach(button, "click", move |_| {
            with_runtime(&weak, |rt| rt.dispatch(Message::TodayPressed { today: today() }));
        })?);
    }

    let weak = Rc::downgrade(runtime);
    listeners.push(Listener::attach(dom.window(), "popstate", move |_| {
        with_runtime(&weak, |rt| {
            let query_date = rt.dom().query_date();
            rt.dispatch(Message::HistoryRestored {
                query_date,
                today: today(),
            });
        });
    })?);

    Ok(listeners)
}
