use super::{Effect, Page};
use crate::date_nav::{DateAction, NavigationDate};

impl Page {
    pub(super) fn handle_date_changed(
        &mut self,
        value: &str,
        today: NavigationDate,
        effects: &mut Vec<Effect>,
    ) {
        if let Some(target) = self.date_nav.on_change(value, today) {
            effects.push(Effect::Navigate(target));
        }
    }

    pub(super) fn handle_today_pressed(&mut self, today: NavigationDate, effects: &mut Vec<Effect>) {
        let action = self.date_nav.on_today(today);
        Self::push_date_action(action, effects);
    }

    pub(super) fn handle_history_restored(
        &mut self,
        query_date: Option<&str>,
        today: NavigationDate,
        effects: &mut Vec<Effect>,
    ) {
        if let Some(action) = self.date_nav.on_history_restored(query_date, today) {
            Self::push_date_action(action, effects);
        }
    }

    fn push_date_action(action: DateAction, effects: &mut Vec<Effect>) {
        if let Some(date) = action.write_control {
            effects.push(Effect::SetDateValue(date));
        }
        effects.push(Effect::Navigate(action.target));
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::{Effect, Message};
    use crate::date_nav::NavigationDate;

    fn navigated_to(effects: &[Effect]) -> Option<String> {
        effects.iter().find_map(|effect| match effect {
            Effect::Navigate(target) => Some(target.to_string()),
            _ => None,
        })
    }

    #[test]
    fn picking_a_date_navigates_with_query_parameter() {
        let (mut page, _) = loaded_page(0.0, Some("2024-01-15"), Some("2024-01-15"));
        let effects = page.reduce(Message::DateChanged {
            value: "2024-01-10".to_string(),
            today: today(),
        });
        assert_eq!(navigated_to(&effects).as_deref(), Some("/?date=2024-01-10"));

        let effects = page.reduce(Message::DateChanged {
            value: String::new(),
            today: today(),
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn today_button_sets_control_then_navigates() {
        let (mut page, _) = loaded_page(0.0, Some("2024-01-15"), None);
        let effects = page.reduce(Message::TodayPressed { today: today() });
        assert_eq!(
            effects,
            vec![
                Effect::SetDateValue(today()),
                Effect::Navigate(page.date_nav().build_navigation_target(today())),
            ]
        );
    }

    #[test]
    fn today_button_without_control_still_navigates() {
        let (mut page, _) = loaded_page(0.0, None, None);
        let effects = page.reduce(Message::TodayPressed { today: today() });
        assert_eq!(navigated_to(&effects).as_deref(), Some("/?date=2026-10-14"));
        assert!(!effects.iter().any(|e| matches!(e, Effect::SetDateValue(_))));
    }

    #[test]
    fn history_restoration_writes_control_and_reloads() {
        let (mut page, _) = loaded_page(0.0, Some("2024-01-15"), Some("2024-01-15"));
        let effects = page.reduce(Message::HistoryRestored {
            query_date: Some("2023-07-04".to_string()),
            today: today(),
        });
        let restored = NavigationDate::from_ymd(2023, 7, 4).expect("valid date");
        assert_eq!(effects.first(), Some(&Effect::SetDateValue(restored)));
        assert_eq!(navigated_to(&effects).as_deref(), Some("/?date=2023-07-04"));

        let effects = page.reduce(Message::HistoryRestored {
            query_date: None,
            today: today(),
        });
        assert!(effects.is_empty());
    }
}
