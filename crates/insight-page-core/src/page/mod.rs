//! Page-level state machine.
//!
//! The runtime feeds DOM events in as [`Message`]s; [`Page::reduce`] updates
//! state and returns the [`Effect`]s the runtime must apply to the document.

mod messages;
mod navigation;
mod reducer;
mod scroll;

pub use messages::Message;

use crate::animate::{EntranceAnimator, Reveal, RevealStyles, StyleRegistry, StyleRule};
use crate::config::AppConfig;
use crate::date_nav::{DateNavController, NavigationDate, NavigationTarget};
use crate::resolver::ActiveSectionResolver;
use crate::scheduler::ScrollScheduler;
use crate::toc::TocSyncController;
use std::time::Duration;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    RegisterStyle(StyleRule),
    AnimateEntrance {
        reveals: Vec<Reveal>,
        styles: RevealStyles,
    },
    PulseBadges {
        animation: String,
    },
    SetDateValue(NavigationDate),
    SetDateMax(NavigationDate),
    RequestFrame,
    /// Index of the TOC link, in document order, that takes the highlight.
    HighlightTocLink(usize),
    ScrollTo {
        top: f64,
        smooth: bool,
    },
    Navigate(NavigationTarget),
}

pub struct Page {
    config: AppConfig,
    resolver: ActiveSectionResolver,
    scheduler: ScrollScheduler,
    toc: TocSyncController,
    date_nav: DateNavController,
    animator: EntranceAnimator,
    styles: StyleRegistry,
    resolution_passes: u64,
}

impl Page {
    pub fn new(config: AppConfig) -> Self {
        let animator = EntranceAnimator::new(
            Duration::from_millis(u64::from(config.stagger_ms)),
            Duration::from_millis(u64::from(config.duration_ms)),
            config.lift_px,
        );
        Self {
            resolver: ActiveSectionResolver::new(config.highlight_offset_px),
            scheduler: ScrollScheduler::new(),
            toc: TocSyncController::default(),
            date_nav: DateNavController::new(&config.base_path, &config.date_param, false),
            animator,
            styles: StyleRegistry::default(),
            resolution_passes: 0,
            config,
        }
    }

    pub fn toc(&self) -> &TocSyncController {
        &self.toc
    }

    pub fn date_nav(&self) -> &DateNavController {
        &self.date_nav
    }

    /// Number of scroll-driven resolver runs, including the initial pass.
    pub fn resolution_passes(&self) -> u64 {
        self.resolution_passes
    }

    pub fn frame_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Forget a pending frame on teardown. Returns whether one was pending.
    pub fn cancel_pending_frame(&mut self) -> bool {
        self.scheduler.cancel()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::geometry::{LayoutSnapshot, Section, ViewportState};
    use crate::toc::TocLink;

    pub(crate) fn today() -> NavigationDate {
        NavigationDate::from_ymd(2026, 10, 14).expect("valid date")
    }

    pub(crate) fn sections() -> Vec<Section> {
        vec![
            Section::new("insight-1", 0.0, 500.0),
            Section::new("insight-2", 500.0, 700.0),
            Section::new("insight-3", 1200.0, 400.0),
        ]
    }

    pub(crate) fn layout_at(scroll: f64) -> LayoutSnapshot {
        LayoutSnapshot {
            viewport: ViewportState::new(scroll, Some(60.0)),
            sections: sections(),
        }
    }

    pub(crate) fn links() -> Vec<TocLink> {
        sections()
            .iter()
            .filter_map(|s| TocLink::from_href(&format!("#{}", s.id), false))
            .collect()
    }

    pub(crate) fn loaded_page(scroll: f64, control: Option<&str>, query: Option<&str>) -> (Page, Vec<Effect>) {
        let mut page = Page::new(AppConfig::default());
        let effects = page.reduce(Message::Loaded {
            layout: layout_at(scroll),
            links: links(),
            item_count: 3,
            date_control: control.map(str::to_string),
            query_date: query.map(str::to_string),
            today: today(),
        });
        (page, effects)
    }
}
