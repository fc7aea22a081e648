//! Table-of-contents highlight state.

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocLink {
    pub section_id: String,
    pub active: bool,
}

impl TocLink {
    /// Build a link from an in-page anchor (`#section-id`).
    pub fn from_href(href: &str, active: bool) -> Option<Self> {
        let section_id = href.trim().strip_prefix('#')?;
        if section_id.is_empty() {
            return None;
        }
        Some(Self {
            section_id: section_id.to_string(),
            active,
        })
    }
}

/// Keeps at most one TOC link active.
#[derive(Debug, Clone, Default)]
pub struct TocSyncController {
    links: Vec<TocLink>,
}

impl TocSyncController {
    pub fn new(links: impl IntoIterator<Item = TocLink>) -> Self {
        let mut links: Vec<TocLink> = links.into_iter().collect();
        // Server markup may mark several links; only the first survives.
        let mut seen_active = false;
        for link in &mut links {
            if link.active && seen_active {
                link.active = false;
            }
            seen_active |= link.active;
        }
        Self { links }
    }

    pub fn links(&self) -> &[TocLink] {
        &self.links
    }

    pub fn active(&self) -> Option<&str> {
        self.active_index()
            .map(|index| self.links[index].section_id.as_str())
    }

    /// Position of the active link in document order.
    pub fn active_index(&self) -> Option<usize> {
        self.links.iter().position(|link| link.active)
    }

    /// Make the first link for `section_id` the only active one.
    ///
    /// Returns `true` when the highlight moved. `None`, an unknown id, or an
    /// id that already owns the highlight leave everything untouched.
    pub fn set_active(&mut self, section_id: Option<&str>) -> bool {
        let Some(section_id) = section_id else {
            return false;
        };
        if self.active() == Some(section_id) {
            return false;
        }
        let Some(index) = self
            .links
            .iter()
            .position(|link| link.section_id == section_id)
        else {
            debug!(section_id, "No TOC link for section");
            return false;
        };
        self.activate(index)
    }

    /// Make the link at `index` the only active one.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.links.len() {
            debug!(index, links = self.links.len(), "TOC link index out of range");
            return false;
        }
        if self.active_index() == Some(index) {
            return false;
        }
        for (position, link) in self.links.iter_mut().enumerate() {
            link.active = position == index;
        }
        true
    }
}
