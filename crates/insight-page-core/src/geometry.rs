//! Layout snapshots sampled from the rendered document.
//!
//! Nothing here is cached: the runtime samples a fresh snapshot for every
//! resolution pass.

/// A content block with a stable id and its vertical extent in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub offset: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, offset: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            offset: sanitize_px(offset),
            height: sanitize_px(height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportState {
    pub scroll_offset: f64,
    /// Rendered height of the sticky TOC bar; `None` when the page has none.
    pub toc_height: Option<f64>,
}

impl ViewportState {
    pub fn new(scroll_offset: f64, toc_height: Option<f64>) -> Self {
        Self {
            scroll_offset: sanitize_px(scroll_offset),
            toc_height: toc_height.map(sanitize_px),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutSnapshot {
    pub viewport: ViewportState,
    pub sections: Vec<Section>,
}

/// Clamp a pixel measurement to a finite, non-negative value.
pub(crate) fn sanitize_px(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
