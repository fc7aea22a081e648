//! Date picker, "today" trigger, `?date=` parameter and full-page navigation.
//!
//! Nothing here navigates by itself: every transition yields a
//! [`NavigationTarget`] and the runtime performs the page load.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("empty date value")]
    Empty,
    #[error("expected YYYY-MM-DD, got {0:?}")]
    Format(String),
    #[error("not a calendar date: {value:?} ({source})")]
    Calendar {
        value: String,
        source: chrono::ParseError,
    },
}

/// A local calendar date, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavigationDate(NaiveDate);

impl NavigationDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn parse(value: &str) -> Result<Self, DateError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DateError::Empty);
        }
        let bytes = value.as_bytes();
        let shaped = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(idx, b)| idx == 4 || idx == 7 || b.is_ascii_digit());
        if !shaped {
            return Err(DateError::Format(value.to_string()));
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|source| DateError::Calendar {
                value: value.to_string(),
                source,
            })
    }
}

impl From<NaiveDate> for NavigationDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for NavigationDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NavigationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// URL of the server-rendered page for one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    base_path: String,
    param: String,
    date: NavigationDate,
}

impl NavigationTarget {
    pub fn date(&self) -> NavigationDate {
        self.date
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}?{}={}", self.base_path, self.param, self.date)
    }
}

/// What loading the page does to the date control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInit {
    /// Value to write when the control was empty.
    pub fill: Option<NavigationDate>,
    /// Upper bound for the picker.
    pub max: NavigationDate,
}

/// A navigation, optionally preceded by writing the date into the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAction {
    pub write_control: Option<NavigationDate>,
    pub target: NavigationTarget,
}

#[derive(Debug, Clone)]
pub struct DateNavController {
    base_path: String,
    param: String,
    has_control: bool,
}

impl DateNavController {
    pub fn new(base_path: impl Into<String>, param: impl Into<String>, has_control: bool) -> Self {
        Self {
            base_path: base_path.into(),
            param: param.into(),
            has_control,
        }
    }

    pub fn has_control(&self) -> bool {
        self.has_control
    }

    pub fn build_navigation_target(&self, date: NavigationDate) -> NavigationTarget {
        NavigationTarget {
            base_path: self.base_path.clone(),
            param: self.param.clone(),
            date,
        }
    }

    /// Default an empty control to the `date` parameter, else today, and cap
    /// the picker at today. `None` when the page has no date control.
    pub fn initialize(
        &self,
        control_value: &str,
        query_date: Option<&str>,
        today: NavigationDate,
    ) -> Option<DateInit> {
        if !self.has_control {
            debug!("No date control on page; skipping date init");
            return None;
        }
        let fill = if control_value.trim().is_empty() {
            let from_query = query_date.and_then(|raw| match NavigationDate::parse(raw) {
                Ok(date) => Some(date),
                Err(err) => {
                    warn!(%err, "Ignoring date parameter");
                    None
                }
            });
            Some(from_query.unwrap_or(today))
        } else {
            None
        };
        Some(DateInit { fill, max: today })
    }

    /// The user picked a value in the control.
    pub fn on_change(&self, value: &str, today: NavigationDate) -> Option<NavigationTarget> {
        if value.trim().is_empty() {
            return None;
        }
        let date = self.parse_or_today(value, today);
        info!(%date, "Date selected");
        Some(self.build_navigation_target(date))
    }

    pub fn on_today(&self, today: NavigationDate) -> DateAction {
        info!(%today, "Jumping to today");
        DateAction {
            write_control: self.has_control.then_some(today),
            target: self.build_navigation_target(today),
        }
    }

    /// Back/forward restored a URL; treat its `date` parameter as a fresh selection.
    pub fn on_history_restored(
        &self,
        query_date: Option<&str>,
        today: NavigationDate,
    ) -> Option<DateAction> {
        let raw = query_date.filter(|raw| !raw.trim().is_empty())?;
        if !self.has_control {
            return None;
        }
        let date = self.parse_or_today(raw, today);
        info!(%date, "Restoring date from history");
        Some(DateAction {
            write_control: Some(date),
            target: self.build_navigation_target(date),
        })
    }

    fn parse_or_today(&self, raw: &str, today: NavigationDate) -> NavigationDate {
        NavigationDate::parse(raw).unwrap_or_else(|err| {
            warn!(%err, %today, "Malformed date; falling back to today");
            today
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NavigationDate {
        NavigationDate::from_ymd(y, m, d).expect("valid test date")
    }

    fn controller() -> DateNavController {
        DateNavController::new("/", "date", true)
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(date(2024, 1, 5).to_string(), "2024-01-05");
    }

    #[test]
    fn parse_rejects_loose_shapes() {
        assert_eq!(NavigationDate::parse(""), Err(DateError::Empty));
        assert!(matches!(NavigationDate::parse("2024-1-5"), Err(DateError::Format(_))));
        assert!(matches!(NavigationDate::parse("2024/01/05"), Err(DateError::Format(_))));
        assert!(matches!(
            NavigationDate::parse("2024-02-30"),
            Err(DateError::Calendar { .. })
        ));
        assert_eq!(" 2024-02-29 ".parse::<NavigationDate>(), Ok(date(2024, 2, 29)));
    }

    #[test]
    fn builds_query_url() {
        let target = controller().build_navigation_target(date(2024, 1, 15));
        assert_eq!(target.to_string(), "/?date=2024-01-15");

        let nested = DateNavController::new("/daily", "day", true);
        assert_eq!(
            nested.build_navigation_target(date(2023, 12, 1)).to_string(),
            "/daily?day=2023-12-01"
        );
    }

    #[test]
    fn empty_control_defaults_to_today() {
        let today = date(2026, 10, 14);
        let init = controller().initialize("", None, today).expect("control present");
        assert_eq!(init.fill, Some(today));
        assert_eq!(init.max, today);
        assert_eq!(init.fill.map(|d| d.to_string()).as_deref(), Some("2026-10-14"));
    }

    #[test]
    fn query_parameter_beats_today() {
        let today = date(2026, 10, 14);
        let init = controller()
            .initialize("", Some("2024-01-15"), today)
            .expect("control present");
        assert_eq!(init.fill, Some(date(2024, 1, 15)));
        assert_eq!(init.max, today);
    }

    #[test]
    fn server_rendered_value_is_kept() {
        let today = date(2026, 10, 14);
        let init = controller()
            .initialize("2024-01-15", Some("2024-01-15"), today)
            .expect("control present");
        assert_eq!(init.fill, None);
    }

    #[test]
    fn malformed_query_parameter_falls_back_to_today() {
        let today = date(2026, 10, 14);
        let init = controller()
            .initialize("", Some("yesterday"), today)
            .expect("control present");
        assert_eq!(init.fill, Some(today));
    }

    #[test]
    fn change_navigates_only_for_non_empty_values() {
        let today = date(2026, 10, 14);
        let nav = controller();
        assert_eq!(nav.on_change("", today), None);
        assert_eq!(
            nav.on_change("2025-03-02", today).map(|t| t.to_string()),
            Some("/?date=2025-03-02".to_string())
        );
        // Beyond the picker bound is accepted as-is.
        assert_eq!(
            nav.on_change("2030-01-01", today).map(|t| t.date()),
            Some(date(2030, 1, 1))
        );
        assert_eq!(nav.on_change("garbage", today).map(|t| t.date()), Some(today));
    }

    #[test]
    fn today_writes_control_and_navigates() {
        let today = date(2026, 10, 14);
        let action = controller().on_today(today);
        assert_eq!(action.write_control, Some(today));
        assert_eq!(action.target.to_string(), "/?date=2026-10-14");

        let headless = DateNavController::new("/", "date", false).on_today(today);
        assert_eq!(headless.write_control, None);
        assert_eq!(headless.target.date(), today);
    }

    #[test]
    fn history_restoration_renavigates_when_parameter_present() {
        let today = date(2026, 10, 14);
        let nav = controller();
        assert_eq!(nav.on_history_restored(None, today), None);
        let action = nav
            .on_history_restored(Some("2024-06-01"), today)
            .expect("parameter present");
        assert_eq!(action.write_control, Some(date(2024, 6, 1)));
        assert_eq!(action.target.to_string(), "/?date=2024-06-01");

        let headless = DateNavController::new("/", "date", false);
        assert_eq!(headless.on_history_restored(Some("2024-06-01"), today), None);
    }
}
