use super::{Effect, Message, Page};
use crate::animate::{pulse_animation, pulse_keyframes};
use crate::date_nav::{DateNavController, NavigationDate};
use crate::geometry::LayoutSnapshot;
use crate::toc::{TocLink, TocSyncController};
use tracing::{debug, info};

impl Page {
    pub fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Loaded {
                layout,
                links,
                item_count,
                date_control,
                query_date,
                today,
            } => self.handle_loaded(
                layout,
                links,
                item_count,
                date_control,
                query_date,
                today,
                &mut effects,
            ),
            Message::Scrolled => self.handle_scrolled(&mut effects),
            Message::FrameFired(layout) => self.handle_frame_fired(&layout, &mut effects),
            Message::TocLinkClicked {
                link_index,
                section_id,
                target_offset,
                toc_height,
            } => self.handle_toc_link_clicked(
                link_index,
                &section_id,
                target_offset,
                toc_height,
                &mut effects,
            ),
            Message::DateChanged { value, today } => {
                self.handle_date_changed(&value, today, &mut effects)
            }
            Message::TodayPressed { today } => self.handle_today_pressed(today, &mut effects),
            Message::HistoryRestored { query_date, today } => {
                self.handle_history_restored(query_date.as_deref(), today, &mut effects)
            }
        }

        effects
    }

    #[allow(clippy::too_many_arguments)]
    fn handle_loaded(
        &mut self,
        layout: LayoutSnapshot,
        links: Vec<TocLink>,
        item_count: usize,
        date_control: Option<String>,
        query_date: Option<String>,
        today: NavigationDate,
        effects: &mut Vec<Effect>,
    ) {
        info!(
            sections = layout.sections.len(),
            links = links.len(),
            items = item_count,
            date_control = date_control.is_some(),
            "Page loaded"
        );

        if let Some(rule) = self.styles.register(pulse_keyframes()) {
            effects.push(Effect::RegisterStyle(rule));
        }

        self.date_nav = DateNavController::new(
            &self.config.base_path,
            &self.config.date_param,
            date_control.is_some(),
        );
        if let Some(init) = self.date_nav.initialize(
            date_control.as_deref().unwrap_or_default(),
            query_date.as_deref(),
            today,
        ) {
            if let Some(fill) = init.fill {
                debug!(%fill, "Defaulting empty date control");
                effects.push(Effect::SetDateValue(fill));
            }
            effects.push(Effect::SetDateMax(init.max));
        }

        if item_count > 0 {
            effects.push(Effect::AnimateEntrance {
                reveals: self.animator.plan(item_count),
                styles: self.animator.styles(),
            });
        }

        self.toc = TocSyncController::new(links);
        // Reflect a restored mid-page scroll position before any interaction.
        self.sync_toc_with_layout(&layout, effects);

        effects.push(Effect::PulseBadges {
            animation: pulse_animation(self.config.pulse_period_secs),
        });
    }
}
