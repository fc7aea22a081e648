use super::{Effect, Page};
use crate::geometry::{LayoutSnapshot, sanitize_px};
use tracing::{debug, trace};

impl Page {
    pub(super) fn handle_scrolled(&mut self, effects: &mut Vec<Effect>) {
        if self.scheduler.request() {
            effects.push(Effect::RequestFrame);
        }
    }

    pub(super) fn handle_frame_fired(&mut self, layout: &LayoutSnapshot, effects: &mut Vec<Effect>) {
        // Cleared before the pass so scrolls during it schedule one more frame.
        self.scheduler.on_frame();
        self.sync_toc_with_layout(layout, effects);
    }

    pub(super) fn sync_toc_with_layout(&mut self, layout: &LayoutSnapshot, effects: &mut Vec<Effect>) {
        self.resolution_passes += 1;
        let current = self.resolver.resolve_layout(layout);
        trace!(
            scroll = layout.viewport.scroll_offset,
            current = current.unwrap_or("-"),
            pass = self.resolution_passes,
            "Resolved active section"
        );
        // A `None` result keeps the previous highlight.
        if self.toc.set_active(current) {
            if let Some(index) = self.toc.active_index() {
                effects.push(Effect::HighlightTocLink(index));
            }
        }
    }

    pub(super) fn handle_toc_link_clicked(
        &mut self,
        link_index: usize,
        section_id: &str,
        target_offset: Option<f64>,
        toc_height: Option<f64>,
        effects: &mut Vec<Effect>,
    ) {
        let Some(target_offset) = target_offset else {
            debug!(section_id, "TOC target missing; ignoring click");
            return;
        };
        let top = self.click_scroll_target(target_offset, toc_height);
        debug!(section_id, top, "Scrolling to TOC target");
        effects.push(Effect::ScrollTo {
            top,
            smooth: self.config.smooth_scroll,
        });
        // Click intent wins over scroll-derived state; no need to wait for the scroll.
        // The clicked element takes the highlight even when another link shares its target.
        if self.toc.activate(link_index) {
            effects.push(Effect::HighlightTocLink(link_index));
        }
    }

    /// `offsetTop - (toc_height + click_offset)`, or the fallback offset without a TOC bar.
    pub fn click_scroll_target(&self, target_offset: f64, toc_height: Option<f64>) -> f64 {
        let offset = match toc_height {
            Some(height) => sanitize_px(height) + self.config.click_offset_px,
            None => self.config.fallback_click_offset_px,
        };
        sanitize_px(target_offset - offset)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::{Effect, Message, Page};
    use crate::config::AppConfig;
    use crate::toc::TocLink;

    #[test]
    fn scroll_burst_requests_a_single_frame() {
        let (mut page, _) = loaded_page(0.0, Some(""), None);
        let passes_before = page.resolution_passes();

        let requests = (0..40)
            .flat_map(|_| page.reduce(Message::Scrolled))
            .filter(|effect| *effect == Effect::RequestFrame)
            .count();
        assert_eq!(requests, 1);
        assert!(page.frame_pending());

        page.reduce(Message::FrameFired(layout_at(700.0)));
        assert_eq!(page.resolution_passes(), passes_before + 1);
        assert!(!page.frame_pending());
    }

    #[test]
    fn frame_moves_highlight_once() {
        let (mut page, _) = loaded_page(0.0, Some(""), None);
        assert_eq!(page.toc().active(), Some("insight-1"));

        page.reduce(Message::Scrolled);
        let effects = page.reduce(Message::FrameFired(layout_at(700.0)));
        assert_eq!(effects, vec![Effect::HighlightTocLink(1)]);

        page.reduce(Message::Scrolled);
        let effects = page.reduce(Message::FrameFired(layout_at(720.0)));
        assert!(effects.is_empty());
    }

    #[test]
    fn dead_zone_keeps_previous_highlight() {
        let (mut page, _) = loaded_page(1300.0, Some(""), None);
        assert_eq!(page.toc().active(), Some("insight-3"));

        page.reduce(Message::Scrolled);
        let effects = page.reduce(Message::FrameFired(layout_at(1600.0)));
        assert!(effects.is_empty());
        assert_eq!(page.toc().active(), Some("insight-3"));
    }

    #[test]
    fn click_activates_link_before_scroll_completes() {
        let (mut page, _) = loaded_page(0.0, Some(""), None);
        assert_eq!(page.toc().active(), Some("insight-1"));

        let effects = page.reduce(Message::TocLinkClicked {
            link_index: 2,
            section_id: "insight-3".to_string(),
            target_offset: Some(1200.0),
            toc_height: Some(60.0),
        });

        assert_eq!(
            effects,
            vec![
                Effect::ScrollTo {
                    top: 1120.0,
                    smooth: true
                },
                Effect::HighlightTocLink(2),
            ]
        );
        assert_eq!(page.toc().active(), Some("insight-3"));
        assert!(
            page.toc()
                .links()
                .iter()
                .any(|link| link.section_id == "insight-1" && !link.active)
        );
    }

    #[test]
    fn click_without_toc_bar_uses_fallback_offset() {
        let (page, _) = loaded_page(0.0, Some(""), None);
        assert_eq!(page.click_scroll_target(500.0, None), 420.0);
        assert_eq!(page.click_scroll_target(30.0, Some(60.0)), 0.0);
    }

    #[test]
    fn click_on_missing_target_does_nothing() {
        let (mut page, _) = loaded_page(0.0, Some(""), None);
        let effects = page.reduce(Message::TocLinkClicked {
            link_index: 0,
            section_id: "insight-9".to_string(),
            target_offset: None,
            toc_height: Some(60.0),
        });
        assert!(effects.is_empty());
        assert_eq!(page.toc().active(), Some("insight-1"));
    }

    #[test]
    fn duplicate_toc_entries_keep_a_single_highlight() {
        let mut page = Page::new(AppConfig::default());
        let mut links = links();
        links.insert(
            2,
            TocLink::from_href("#insight-2", false).expect("anchor"),
        );
        page.reduce(Message::Loaded {
            layout: layout_at(700.0),
            links,
            item_count: 0,
            date_control: None,
            query_date: None,
            today: today(),
        });
        assert_eq!(page.toc().active_index(), Some(1));

        let effects = page.reduce(Message::TocLinkClicked {
            link_index: 2,
            section_id: "insight-2".to_string(),
            target_offset: Some(500.0),
            toc_height: Some(60.0),
        });
        assert!(effects.contains(&Effect::HighlightTocLink(2)));
        assert_eq!(page.toc().active_index(), Some(2));
        let active = page.toc().links().iter().filter(|link| link.active).count();
        assert_eq!(active, 1);

        page.reduce(Message::Scrolled);
        let effects = page.reduce(Message::FrameFired(layout_at(720.0)));
        assert!(effects.is_empty());
        assert_eq!(page.toc().active_index(), Some(2));
    }
}
