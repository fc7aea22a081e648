//! Platform-agnostic state for the daily insight page.
//!
//! Responsibilities:
//! - Resolve which content section the reader is in from a layout snapshot.
//! - Keep exactly one table-of-contents link active.
//! - Reconcile the date picker, the `?date=` parameter and page navigation.
//! - Plan entrance animations and the one-time pulse stylesheet.
//!
//! The browser runtime samples the document and applies [`page::Effect`]s;
//! nothing in this crate touches the DOM.

pub mod animate;
pub mod config;
pub mod date_nav;
pub mod geometry;
pub mod page;
pub mod resolver;
pub mod scheduler;
pub mod toc;

pub use date_nav::{NavigationDate, NavigationTarget};
pub use geometry::{LayoutSnapshot, Section, ViewportState};
pub use page::{Effect, Message, Page};
