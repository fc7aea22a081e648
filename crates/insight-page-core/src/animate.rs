//! Entrance reveal timing and the injected pulse keyframes.

use std::collections::BTreeSet;
use std::time::Duration;

pub const PULSE_STYLE_ID: &str = "insight-page-pulse";

/// When the item at `index` starts its transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    pub index: usize,
    pub delay: Duration,
}

/// Inline style values the runtime applies around each reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStyles {
    pub hidden_opacity: &'static str,
    pub hidden_transform: String,
    pub transition: String,
    pub shown_opacity: &'static str,
    pub shown_transform: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceAnimator {
    stagger: Duration,
    duration: Duration,
    lift_px: f64,
}

impl EntranceAnimator {
    pub fn new(stagger: Duration, duration: Duration, lift_px: f64) -> Self {
        Self {
            stagger,
            duration,
            lift_px,
        }
    }

    /// One reveal per item in document order, delayed by `index × stagger`.
    pub fn plan(&self, item_count: usize) -> Vec<Reveal> {
        (0..item_count)
            .map(|index| Reveal {
                index,
                delay: self.stagger.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX)),
            })
            .collect()
    }

    pub fn styles(&self) -> RevealStyles {
        let secs = self.duration.as_secs_f64();
        RevealStyles {
            hidden_opacity: "0",
            hidden_transform: format!("translateY({}px)", self.lift_px),
            transition: format!("opacity {secs}s ease, transform {secs}s ease"),
            shown_opacity: "1",
            shown_transform: "translateY(0)",
        }
    }
}

/// A stylesheet rule the page needs exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub id: &'static str,
    pub css: String,
}

pub fn pulse_keyframes() -> StyleRule {
    StyleRule {
        id: PULSE_STYLE_ID,
        css: "@keyframes pulse {\n    0%, 100% {\n        opacity: 1;\n    }\n    50% {\n        opacity: 0.7;\n    }\n}\n"
            .to_string(),
    }
}

/// `animation` value for highlighted item badges.
pub fn pulse_animation(period_secs: f32) -> String {
    format!("pulse {period_secs}s infinite")
}

/// Tracks which rules this page instance has asked for.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    registered: BTreeSet<&'static str>,
}

impl StyleRegistry {
    /// Returns the rule when it has not been registered yet.
    pub fn register(&mut self, rule: StyleRule) -> Option<StyleRule> {
        self.registered.insert(rule.id).then_some(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> EntranceAnimator {
        EntranceAnimator::new(Duration::from_millis(100), Duration::from_millis(500), 20.0)
    }

    #[test]
    fn delays_grow_with_index() {
        let plan = animator().plan(4);
        let delays: Vec<u128> = plan.iter().map(|r| r.delay.as_millis()).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert!(animator().plan(0).is_empty());
    }

    #[test]
    fn styles_match_half_second_ease() {
        let styles = animator().styles();
        assert_eq!(styles.hidden_transform, "translateY(20px)");
        assert_eq!(styles.transition, "opacity 0.5s ease, transform 0.5s ease");
        assert_eq!(styles.shown_transform, "translateY(0)");
    }

    #[test]
    fn pulse_rule_registers_once() {
        let mut registry = StyleRegistry::default();
        let first = registry.register(pulse_keyframes());
        assert_eq!(first.map(|rule| rule.id), Some(PULSE_STYLE_ID));
        assert!(registry.register(pulse_keyframes()).is_none());
        assert_eq!(pulse_animation(2.0), "pulse 2s infinite");
    }
}
