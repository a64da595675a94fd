//! In-memory document store.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::collection::{Collection, OrderBy};
use crate::document::Document;
use crate::error::StoreError;
use crate::subscription::Subscription;
use crate::write::Fields;
use crate::DocumentStore;

struct CollectionWatch {
    collection: Collection,
    order: Option<OrderBy>,
    tx: UnboundedSender<Vec<Document>>,
}

struct DocumentWatch {
    collection: Collection,
    id: String,
    tx: UnboundedSender<Option<Document>>,
}

#[derive(Default)]
struct State {
    collections: HashMap<Collection, BTreeMap<String, Map<String, Value>>>,
    collection_watches: Vec<CollectionWatch>,
    document_watches: Vec<DocumentWatch>,
    last_stamp: Option<DateTime<Utc>>,
    outage: Option<String>,
}

impl State {
    /// Next server timestamp; strictly increasing even if the wall clock
    /// stalls or steps back.
    fn next_stamp(&mut self) -> Value {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        Value::String(stamp.to_rfc3339_opts(SecondsFormat::Micros, true))
    }

    fn check_available(&self) -> Result<(), StoreError> {
        match &self.outage {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }

    fn documents(&self, collection: Collection, order: Option<&OrderBy>) -> Vec<Document> {
        let mut docs: Vec<Document> = self
            .collections
            .get(&collection)
            .map(|c| {
                c.iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default();
        if let Some(order) = order {
            docs.sort_by(|a, b| order.compare(a.get(&order.field), b.get(&order.field)));
        }
        docs
    }

    fn document(&self, collection: Collection, id: &str) -> Option<Document> {
        self.collections
            .get(&collection)
            .and_then(|c| c.get(id))
            .map(|fields| Document::new(id, fields.clone()))
    }

    /// Pushes fresh snapshots of `collection` and of document `id` to every
    /// live watcher, forgetting watchers whose receiver is gone.
    fn publish(&mut self, collection: Collection, id: &str) {
        let watches = std::mem::take(&mut self.collection_watches);
        for watch in watches {
            if watch.collection == collection {
                let docs = self.documents(collection, watch.order.as_ref());
                if watch.tx.send(docs).is_err() {
                    trace!(event = "unsubscribed", collection = %collection);
                    continue;
                }
            }
            self.collection_watches.push(watch);
        }

        let watches = std::mem::take(&mut self.document_watches);
        for watch in watches {
            if watch.collection == collection && watch.id == id {
                let doc = self.document(collection, id);
                if watch.tx.send(doc).is_err() {
                    continue;
                }
            }
            self.document_watches.push(watch);
        }
    }
}

/// A [`DocumentStore`] held entirely in memory.
///
/// Writes apply synchronously and notify subscribers before returning, so
/// a session always reads its own writes. Ids are random UUIDs.
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail with [`StoreError::Unavailable`]
    /// until [`restore`](Self::restore) is called. Subscriptions keep
    /// working.
    pub fn fail_writes(&self, reason: impl Into<String>) {
        self.state.write().outage = Some(reason.into());
    }

    pub fn restore(&self) {
        self.state.write().outage = None;
    }

    /// Current documents of a collection, ordered by id.
    pub fn documents(&self, collection: Collection) -> Vec<Document> {
        self.state.read().documents(collection, None)
    }

    pub fn document(&self, collection: Collection, id: &str) -> Option<Document> {
        self.state.read().document(collection, id)
    }
}

impl DocumentStore for InMemoryStore {
    fn subscribe(&self, collection: Collection, order: Option<OrderBy>) -> Subscription<Vec<Document>> {
        let (tx, subscription) = Subscription::channel();
        let mut state = self.state.write();
        // Receiver is alive, the initial send cannot fail.
        let _ = tx.send(state.documents(collection, order.as_ref()));
        state.collection_watches.push(CollectionWatch {
            collection,
            order,
            tx,
        });
        subscription
    }

    fn subscribe_doc(&self, collection: Collection, id: &str) -> Subscription<Option<Document>> {
        let (tx, subscription) = Subscription::channel();
        let mut state = self.state.write();
        let _ = tx.send(state.document(collection, id));
        state.document_watches.push(DocumentWatch {
            collection,
            id: id.to_string(),
            tx,
        });
        subscription
    }

    fn create(&self, collection: Collection, fields: Fields) -> Result<String, StoreError> {
        let mut state = self.state.write();
        state.check_available()?;

        let id = Uuid::new_v4().simple().to_string();
        let stamp = state.next_stamp();
        let mut doc = Map::new();
        fields.without("id").apply_to(&mut doc, &stamp)?;

        state.collections.entry(collection).or_default().insert(id.clone(), doc);
        debug!(event = "create", collection = %collection, id = %id);
        state.publish(collection, &id);
        Ok(id)
    }

    fn update(&self, collection: Collection, id: &str, fields: Fields) -> Result<(), StoreError> {
        let mut state = self.state.write();
        state.check_available()?;

        let fields = fields.without("id");
        let stamp = if fields.needs_timestamp() {
            state.next_stamp()
        } else {
            Value::Null
        };
        let doc = state
            .collections
            .get_mut(&collection)
            .and_then(|c| c.get_mut(id))
            .ok_or_else(|| StoreError::NotFound {
                collection,
                id: id.to_string(),
            })?;

        // Apply to a copy so a bad path leaves the document untouched.
        let mut updated = doc.clone();
        fields.apply_to(&mut updated, &stamp)?;
        *doc = updated;

        debug!(event = "update", collection = %collection, id = %id, fields = fields.len());
        state.publish(collection, id);
        Ok(())
    }

    fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let mut state = self.state.write();
        state.check_available()?;

        let removed = state
            .collections
            .get_mut(&collection)
            .and_then(|c| c.remove(id));
        if removed.is_none() {
            return Err(StoreError::NotFound {
                collection,
                id: id.to_string(),
            });
        }

        debug!(event = "delete", collection = %collection, id = %id);
        state.publish(collection, id);
        Ok(())
    }

    fn upsert(&self, collection: Collection, id: &str, fields: Fields) -> Result<(), StoreError> {
        let mut state = self.state.write();
        state.check_available()?;

        let stamp = state.next_stamp();
        let mut doc = Map::new();
        fields.without("id").apply_to(&mut doc, &stamp)?;

        state
            .collections
            .entry(collection)
            .or_default()
            .insert(id.to_string(), doc);
        debug!(event = "upsert", collection = %collection, id = %id);
        state.publish(collection, id);
        Ok(())
    }
}
