//! Reads and writes for the server-rendered document.
//!
//! Every lookup is optional: an element the page does not carry disables
//! the matching feature and is logged once at `debug`.

use insight_page_core::animate::{Reveal, RevealStyles, StyleRule};
use insight_page_core::config::AppConfig;
use insight_page_core::toc::TocLink;
use insight_page_core::{LayoutSnapshot, Section, ViewportState};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollToOptions,
    UrlSearchParams, Window,
};
use tracing::{debug, warn};

pub(crate) struct DomPage {
    window: Window,
    document: Document,
    date_picker: Option<HtmlInputElement>,
    today_button: Option<Element>,
    toc: Option<HtmlElement>,
    toc_links: Vec<(Element, String)>,
    section_selector: String,
    item_selector: String,
    badge_selector: String,
    active_class: String,
    date_param: String,
}

impl DomPage {
    pub(crate) fn locate(window: Window, document: Document, config: &AppConfig) -> Self {
        let date_picker = document
            .get_element_by_id(&config.date_picker_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        if date_picker.is_none() {
            debug!(id = %config.date_picker_id, "No date picker on page");
        }
        let today_button = document.get_element_by_id(&config.today_button_id);
        if today_button.is_none() {
            debug!(id = %config.today_button_id, "No today button on page");
        }
        let toc = document
            .get_element_by_id(&config.toc_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if toc.is_none() {
            debug!(id = %config.toc_id, "No TOC bar on page");
        }
        let toc_links = query_all::<Element>(&document, &config.toc_link_selector)
            .into_iter()
            .filter_map(|link| {
                let href = link.get_attribute("href")?;
                let section_id = TocLink::from_href(&href, false)?.section_id;
                Some((link, section_id))
            })
            .collect::<Vec<_>>();
        debug!(links = toc_links.len(), "Located TOC links");

        Self {
            window,
            document,
            date_picker,
            today_button,
            toc,
            toc_links,
            section_selector: config.section_selector.clone(),
            item_selector: config.item_selector.clone(),
            badge_selector: config.highlight_badge_selector.clone(),
            active_class: config.active_class.clone(),
            date_param: config.date_param.clone(),
        }
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn date_picker(&self) -> Option<&HtmlInputElement> {
        self.date_picker.as_ref()
    }

    pub(crate) fn today_button(&self) -> Option<&Element> {
        self.today_button.as_ref()
    }

    pub(crate) fn toc_link_elements(&self) -> &[(Element, String)] {
        &self.toc_links
    }

    pub(crate) fn toc_height(&self) -> Option<f64> {
        self.toc.as_ref().map(|toc| f64::from(toc.offset_height()))
    }

    /// Fresh geometry for one resolution pass.
    pub(crate) fn sample_layout(&self) -> LayoutSnapshot {
        let scroll = self.window.scroll_y().unwrap_or(0.0);
        let sections = query_all::<HtmlElement>(&self.document, &self.section_selector)
            .into_iter()
            .filter_map(|section| {
                let id = section.id();
                if id.is_empty() {
                    return None;
                }
                Some(Section::new(
                    id,
                    f64::from(section.offset_top()),
                    f64::from(section.client_height()),
                ))
            })
            .collect();
        LayoutSnapshot {
            viewport: ViewportState::new(scroll, self.toc_height()),
            sections,
        }
    }

    pub(crate) fn toc_links(&self) -> Vec<TocLink> {
        self.toc_links
            .iter()
            .map(|(link, section_id)| TocLink {
                section_id: section_id.clone(),
                active: link.class_list().contains(&self.active_class),
            })
            .collect()
    }

    pub(crate) fn section_offset(&self, section_id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(section_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| f64::from(el.offset_top()))
    }

    pub(crate) fn item_count(&self) -> usize {
        query_all::<HtmlElement>(&self.document, &self.item_selector).len()
    }

    pub(crate) fn date_value(&self) -> Option<String> {
        self.date_picker.as_ref().map(HtmlInputElement::value)
    }

    pub(crate) fn set_date_value(&self, value: &str) {
        if let Some(picker) = &self.date_picker {
            picker.set_value(value);
        }
    }

    pub(crate) fn set_date_max(&self, value: &str) {
        if let Some(picker) = &self.date_picker {
            picker.set_max(value);
        }
    }

    /// The `date` parameter of the current URL.
    pub(crate) fn query_date(&self) -> Option<String> {
        let search = self.window.location().search().ok()?;
        UrlSearchParams::new_with_str(&search)
            .ok()?
            .get(&self.date_param)
    }

    pub(crate) fn navigate(&self, url: &str) {
        debug!(url, "Navigating");
        if let Err(err) = self.window.location().set_href(url) {
            warn!(url, ?err, "Navigation failed");
        }
    }

    pub(crate) fn highlight_toc_link(&self, active_index: usize) {
        for (index, (link, id)) in self.toc_links.iter().enumerate() {
            let classes = link.class_list();
            let result = if index == active_index {
                classes.add_1(&self.active_class)
            } else {
                classes.remove_1(&self.active_class)
            };
            if let Err(err) = result {
                warn!(section_id = %id, ?err, "Failed to toggle TOC link class");
            }
        }
    }

    pub(crate) fn scroll_to(&self, top: f64, smooth: bool) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    /// Append `rule` as a `<style>` element unless one with its id exists.
    pub(crate) fn inject_style_once(&self, rule: &StyleRule) -> bool {
        if self.document.get_element_by_id(rule.id).is_some() {
            debug!(id = rule.id, "Style already registered");
            return false;
        }
        let Some(head) = self.document.head() else {
            debug!("Document has no <head>; skipping style");
            return false;
        };
        let style = match self.document.create_element("style") {
            Ok(style) => style,
            Err(err) => {
                warn!(?err, "Failed to create <style>");
                return false;
            }
        };
        style.set_id(rule.id);
        style.set_text_content(Some(&rule.css));
        match head.append_child(&style) {
            Ok(_) => true,
            Err(err) => {
                warn!(?err, "Failed to append <style>");
                false
            }
        }
    }

    pub(crate) fn animate_entrance(&self, reveals: &[Reveal], styles: &RevealStyles) {
        let items = query_all::<HtmlElement>(&self.document, &self.item_selector);
        for reveal in reveals {
            let Some(item) = items.get(reveal.index).cloned() else {
                continue;
            };
            set_styles(
                &item,
                &[
                    ("opacity", styles.hidden_opacity),
                    ("transform", styles.hidden_transform.as_str()),
                ],
            );

            let transition = styles.transition.clone();
            let shown_opacity = styles.shown_opacity;
            let shown_transform = styles.shown_transform;
            let callback = Closure::once_into_js(move || {
                set_styles(
                    &item,
                    &[
                        ("transition", transition.as_str()),
                        ("opacity", shown_opacity),
                        ("transform", shown_transform),
                    ],
                );
            });
            let delay_ms = i32::try_from(reveal.delay.as_millis()).unwrap_or(i32::MAX);
            if let Err(err) = self
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref::<js_sys::Function>(),
                    delay_ms,
                )
            {
                warn!(index = reveal.index, ?err, "Failed to schedule reveal");
            }
        }
    }

    pub(crate) fn pulse_badges(&self, animation: &str) {
        for badge in query_all::<HtmlElement>(&self.document, &self.badge_selector) {
            set_styles(&badge, &[("animation", animation)]);
        }
    }
}

fn set_styles(element: &HtmlElement, properties: &[(&str, &str)]) {
    let style = element.style();
    for (name, value) in properties {
        if let Err(err) = style.set_property(name, value) {
            warn!(property = *name, ?err, "Failed to set style");
        }
    }
}

/// Elements matching `selector` that cast to `T`, in document order.
fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            warn!(selector, ?err, "Invalid selector");
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.get(idx))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}
