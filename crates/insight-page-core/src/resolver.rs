//! Maps a scroll position to the section the reader is currently in.

use crate::geometry::{LayoutSnapshot, Section};

/// Resolves the current section for a scroll offset.
///
/// A section is current when the scroll offset falls inside
/// `[offset - threshold, offset + height - threshold)`, where
/// `threshold = toc_height + highlight_offset`. Sections are scanned in
/// document order and the last match wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSectionResolver {
    highlight_offset: f64,
}

impl ActiveSectionResolver {
    pub fn new(highlight_offset: f64) -> Self {
        Self { highlight_offset }
    }

    pub fn threshold(&self, toc_height: f64) -> f64 {
        toc_height + self.highlight_offset
    }

    pub fn resolve<'a>(
        &self,
        sections: &'a [Section],
        scroll_offset: f64,
        toc_height: f64,
    ) -> Option<&'a str> {
        let threshold = self.threshold(toc_height);
        // Last match in document order wins.
        sections
            .iter()
            .rev()
            .find(|section| {
                scroll_offset >= section.offset - threshold
                    && scroll_offset < section.offset + section.height - threshold
            })
            .map(|section| section.id.as_str())
    }

    /// Resolve against a sampled layout; a missing TOC bar counts as zero height.
    pub fn resolve_layout<'a>(&self, layout: &'a LayoutSnapshot) -> Option<&'a str> {
        self.resolve(
            &layout.sections,
            layout.viewport.scroll_offset,
            layout.viewport.toc_height.unwrap_or(0.0),
        )
    }
}

impl Default for ActiveSectionResolver {
    fn default() -> Self {
        Self::new(crate::config::AppConfig::default().highlight_offset_px)
    }
}
