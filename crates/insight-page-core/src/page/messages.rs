use crate::date_nav::NavigationDate;
use crate::geometry::LayoutSnapshot;
use crate::toc::TocLink;

/// Events the runtime forwards from the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Document is ready; everything the page reads once at startup.
    Loaded {
        layout: LayoutSnapshot,
        links: Vec<TocLink>,
        item_count: usize,
        /// Current control value; `None` when the page has no date control.
        date_control: Option<String>,
        query_date: Option<String>,
        today: NavigationDate,
    },
    Scrolled,
    /// Animation frame callback with a freshly sampled layout.
    FrameFired(LayoutSnapshot),
    TocLinkClicked {
        /// Position of the clicked link among the TOC links.
        link_index: usize,
        section_id: String,
        /// `offsetTop` of the target section; `None` when it is missing.
        target_offset: Option<f64>,
        toc_height: Option<f64>,
    },
    DateChanged {
        value: String,
        today: NavigationDate,
    },
    TodayPressed {
        today: NavigationDate,
    },
    HistoryRestored {
        query_date: Option<String>,
        today: NavigationDate,
    },
}
