//! Live subscriptions feeding the session snapshot.

use kingdom_core::Snapshot;
use kingdom_store::{Collection, Document, DocumentStore, OrderBy, Subscription};
use serde::de::DeserializeOwned;
use tracing::warn;

type CollectionFeed = Subscription<Vec<Document>>;
type DocumentFeed = Subscription<Option<Document>>;

/// One subscription per collection plus the four settings documents.
pub(crate) struct Feeds {
    chores: CollectionFeed,
    coupons: CollectionFeed,
    bills: CollectionFeed,
    ious: CollectionFeed,
    goals: CollectionFeed,
    events: CollectionFeed,
    shopping: CollectionFeed,
    activities: CollectionFeed,
    announcements: CollectionFeed,
    date_nights: CollectionFeed,
    income: DocumentFeed,
    castle: DocumentFeed,
    profiles: DocumentFeed,
    rewards: DocumentFeed,
}

impl Feeds {
    pub(crate) fn open(store: &dyn DocumentStore) -> Self {
        let newest_first = || Some(OrderBy::desc("createdAt"));
        Self {
            chores: store.subscribe(Collection::Chores, Some(OrderBy::asc("createdAt"))),
            coupons: store.subscribe(Collection::Coupons, None),
            bills: store.subscribe(Collection::Bills, None),
            ious: store.subscribe(Collection::Ious, newest_first()),
            goals: store.subscribe(Collection::Goals, None),
            events: store.subscribe(Collection::Events, None),
            shopping: store.subscribe(Collection::Shopping, None),
            activities: store.subscribe(Collection::Activities, newest_first()),
            announcements: store.subscribe(Collection::Announcements, newest_first()),
            date_nights: store.subscribe(Collection::DateNights, newest_first()),
            income: store.subscribe_doc(Collection::Settings, "income"),
            castle: store.subscribe_doc(Collection::Settings, "castle"),
            profiles: store.subscribe_doc(Collection::Settings, "profiles"),
            rewards: store.subscribe_doc(Collection::Settings, "rewards"),
        }
    }

    /// Applies the newest delivery of every feed to `snapshot`.
    ///
    /// Returns true if any feed delivered something.
    pub(crate) fn drain_into(&mut self, snapshot: &mut Snapshot) -> bool {
        let mut changed = false;

        changed |= refresh(&mut self.chores, Collection::Chores, &mut snapshot.chores);
        changed |= refresh(&mut self.coupons, Collection::Coupons, &mut snapshot.coupons);
        changed |= refresh(&mut self.bills, Collection::Bills, &mut snapshot.bills);
        changed |= refresh(&mut self.ious, Collection::Ious, &mut snapshot.ious);
        changed |= refresh(&mut self.goals, Collection::Goals, &mut snapshot.goals);
        changed |= refresh(&mut self.events, Collection::Events, &mut snapshot.events);
        changed |= refresh(&mut self.shopping, Collection::Shopping, &mut snapshot.shopping);
        changed |= refresh(&mut self.activities, Collection::Activities, &mut snapshot.activities);
        changed |= refresh(
            &mut self.announcements,
            Collection::Announcements,
            &mut snapshot.announcements,
        );
        changed |= refresh(&mut self.date_nights, Collection::DateNights, &mut snapshot.date_nights);

        let settings = &mut snapshot.settings;
        if let Some(doc) = self.income.try_latest() {
            changed = true;
            // A missing income document means nobody entered one yet.
            settings.income = match doc {
                Some(doc) => decode_setting(&doc).unwrap_or(settings.income),
                None => Default::default(),
            };
        }
        if let Some(Some(doc)) = self.castle.try_latest() {
            changed = true;
            if let Some(castle) = decode_setting(&doc) {
                settings.castle = castle;
            }
        }
        if let Some(Some(doc)) = self.profiles.try_latest() {
            changed = true;
            if let Some(profiles) = decode_setting(&doc) {
                settings.profiles = profiles;
            }
        }
        if let Some(Some(doc)) = self.rewards.try_latest() {
            changed = true;
            if let Some(rewards) = decode_setting(&doc) {
                settings.rewards = Some(rewards);
            }
        }

        changed
    }
}

fn refresh<T: DeserializeOwned>(
    feed: &mut CollectionFeed,
    collection: Collection,
    target: &mut Vec<T>,
) -> bool {
    match feed.try_latest() {
        Some(docs) => {
            *target = decode_all(collection, &docs);
            true
        }
        None => false,
    }
}

/// Decodes every document, skipping the ones that do not fit the record.
fn decode_all<T: DeserializeOwned>(collection: Collection, docs: &[Document]) -> Vec<T> {
    docs.iter()
        .filter_map(|doc| match doc.decode() {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(event = "decode_failed", collection = %collection, error = %err);
                None
            }
        })
        .collect()
}

fn decode_setting<T: DeserializeOwned>(doc: &Document) -> Option<T> {
    match doc.decode_fields() {
        Ok(setting) => Some(setting),
        Err(err) => {
            warn!(event = "decode_failed", collection = %Collection::Settings, error = %err);
            None
        }
    }
}
