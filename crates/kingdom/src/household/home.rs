//! Shopping, calendar and announcements.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use kingdom_core::{
    Activity, Announcement, EventKind, KingdomError, KingdomEvent, Priority, Result, ShoppingItem,
};
use kingdom_rules::views;
use kingdom_store::{Collection, Fields};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::Household;

impl Household {
    /// The shopping list, high priority first.
    pub fn shopping_list(&self) -> Vec<&ShoppingItem> {
        views::shopping_list(&self.snapshot)
    }

    pub fn add_item(&mut self, text: impl Into<String>, priority: Priority) -> Option<String> {
        let item = ShoppingItem {
            id: String::new(),
            text: text.into(),
            completed: false,
            priority,
            owner: Some(self.profile),
        };
        let id = self.create_record(Collection::Shopping, &item);
        self.sync();
        id
    }

    /// Ticks an item off the list, or puts it back.
    pub fn toggle_item(&mut self, id: &str) -> Result<()> {
        self.refresh();
        let item = self
            .snapshot
            .shopping
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| KingdomError::UnknownItem(id.to_string()))?;
        let completed = !item.completed;
        self.update(Collection::Shopping, id, Fields::new().set("completed", completed));
        self.sync();
        Ok(())
    }

    pub fn delete_item(&mut self, id: &str) -> Result<bool> {
        self.refresh();
        let item = self
            .snapshot
            .shopping
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| KingdomError::UnknownItem(id.to_string()))?;
        if !self.confirmed(&format!("Remove {}?", item.text)) {
            return Ok(false);
        }
        let sent = self.delete(Collection::Shopping, id);
        self.sync();
        Ok(sent)
    }

    /// Ends a shopping trip that cost `total`.
    ///
    /// Logs one activity `"Went shopping ($total)"` listing the ticked
    /// items, then removes those items. Returns the activity id.
    pub fn finish_shopping(&mut self, total: Decimal) -> Result<Option<String>> {
        if total < Decimal::ZERO {
            return Err(KingdomError::InvalidAmount(total.to_string()));
        }
        self.refresh();
        let (ids, items): (Vec<String>, Vec<String>) = self
            .snapshot
            .shopping
            .iter()
            .filter(|i| i.completed)
            .map(|i| (i.id.clone(), i.text.clone()))
            .unzip();

        let activity = Activity {
            id: String::new(),
            who: self.profile,
            description: format!("Went shopping (${total})"),
            items,
            created_at: None,
        };
        let Some(activity_id) = self.create_record(Collection::Activities, &activity) else {
            return Ok(None);
        };
        for id in &ids {
            self.delete(Collection::Shopping, id);
        }

        info!(event = "shopping_finished", who = %self.profile, total = %total, items = ids.len());
        self.sync();
        Ok(Some(activity_id))
    }

    /// Calendar entries on `day`.
    pub fn events_on(&self, day: NaiveDate) -> Vec<&KingdomEvent> {
        views::events_on(&self.snapshot.events, day)
    }

    /// Puts an event owned by this profile on the calendar. The owner has
    /// already seen it, so a shared event only waits for the partner's
    /// acknowledgement.
    pub fn add_event(
        &mut self,
        title: impl Into<String>,
        date: NaiveDate,
        time: impl Into<String>,
        kind: EventKind,
    ) -> Option<String> {
        let event = KingdomEvent {
            id: String::new(),
            title: title.into(),
            date: Some(date),
            time: time.into(),
            kind,
            duration: String::new(),
            duration_unit: String::new(),
            owner: self.profile,
            acks: BTreeMap::from([(self.profile, true)]),
        };
        let id = self.create_record(Collection::Events, &event);
        self.sync();
        id
    }

    /// Removes an event from the calendar once confirmed.
    pub fn delete_event(&mut self, event_id: &str) -> Result<bool> {
        self.refresh();
        let event = self
            .snapshot
            .event(event_id)
            .ok_or_else(|| KingdomError::UnknownEvent(event_id.to_string()))?;
        if !self.confirmed(&format!("Delete {}?", event.title)) {
            return Ok(false);
        }
        let sent = self.delete(Collection::Events, event_id);
        self.sync();
        Ok(sent)
    }

    /// Marks an event as seen by this profile. The partner's
    /// acknowledgement is kept.
    pub fn acknowledge(&mut self, event_id: &str) -> Result<()> {
        self.refresh();
        let event = self
            .snapshot
            .event(event_id)
            .ok_or_else(|| KingdomError::UnknownEvent(event_id.to_string()))?;

        let mut acks = event.acks.clone();
        acks.insert(self.profile, true);
        if let Some(fields) = self.encoded(Collection::Events, Fields::new().set_serialized("acks", &acks)) {
            if self.update(Collection::Events, event_id, fields) {
                debug!(event = "event_acknowledged", id = %event_id, by = %self.profile);
            }
        }
        self.sync();
        Ok(())
    }

    /// Posts a banner for the partner.
    pub fn announce(&mut self, message: impl Into<String>) -> Option<String> {
        let announcement = Announcement {
            id: String::new(),
            message: message.into(),
            from: self.profile,
            active: true,
            created_at: None,
        };
        let id = self.create_record(Collection::Announcements, &announcement);
        self.sync();
        id
    }

    pub fn dismiss_announcement(&mut self, id: &str) {
        self.update(Collection::Announcements, id, Fields::new().set("active", false));
        self.sync();
    }

    /// The newest active banner from the partner.
    pub fn active_announcement(&self) -> Option<&Announcement> {
        views::active_announcement(&self.snapshot, self.profile)
    }
}
