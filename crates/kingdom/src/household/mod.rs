//! The household session.
//!
//! A [`Household`] is one partner's view of the kingdom. It keeps a
//! [`Snapshot`] in step with the store, runs the rule engines against it
//! and turns their decisions into writes. Writes are fire-and-forget: a
//! failed write is logged and dropped, and the view converges on the next
//! successful snapshot.

mod chores;
mod home;
mod money;
mod rewards;

use std::sync::Arc;

use kingdom_config::{KingdomConfig, RewardPolicy};
use kingdom_core::{Participant, Snapshot};
use kingdom_store::{Collection, DocumentStore, Fields, StoreError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::confirm::{Confirm, Decline};
use crate::feed::Feeds;

pub use chores::NewChore;

/// One partner's live session against the household store.
pub struct Household {
    store: Arc<dyn DocumentStore>,
    profile: Participant,
    config: KingdomConfig,
    policy: RewardPolicy,
    rng: StdRng,
    feeds: Feeds,
    snapshot: Snapshot,
    confirm: Box<dyn Confirm>,
}

impl Household {
    /// Opens a session for `profile` and applies the store's current state.
    ///
    /// Draws are seeded from `config.random_seed` when set, otherwise from
    /// OS entropy. Destructive operations are declined until
    /// [`with_confirm`](Self::with_confirm) installs a prompt.
    pub fn open(store: Arc<dyn DocumentStore>, profile: Participant, config: KingdomConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let feeds = Feeds::open(store.as_ref());
        let policy = config.rewards.resolve(None);

        info!(
            event = "session_open",
            app_id = %config.app_id,
            profile = %profile,
            seeded = config.random_seed.is_some(),
        );

        let mut household = Self {
            store,
            profile,
            config,
            policy,
            rng,
            feeds,
            snapshot: Snapshot::new(),
            confirm: Box::new(Decline),
        };
        household.sync();
        household
    }

    /// Installs the prompt consulted before deletes.
    pub fn with_confirm(mut self, confirm: impl Confirm + 'static) -> Self {
        self.confirm = Box::new(confirm);
        self
    }

    pub fn profile(&self) -> Participant {
        self.profile
    }

    pub fn partner(&self) -> Participant {
        self.profile.other()
    }

    pub fn config(&self) -> &KingdomConfig {
        &self.config
    }

    /// Reward rules in force: store settings merged over configured defaults.
    pub fn policy(&self) -> &RewardPolicy {
        &self.policy
    }

    /// The latest applied snapshot. Call [`sync`](Self::sync) to refresh.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Applies everything the store delivered since the last call.
    ///
    /// When anything changed, this profile's coupon check runs again until
    /// no full threshold of deeds is left banked, so deeds completed
    /// elsewhere still unlock coupons here. Returns true if the snapshot
    /// changed.
    pub fn sync(&mut self) -> bool {
        if !self.refresh() {
            return false;
        }
        self.settle_coupons();
        true
    }

    /// Unlocks coupons one at a time while each unlock actually spends
    /// deeds. A round whose redeem flags did not land stops the loop.
    fn settle_coupons(&mut self) {
        let mut banked = self.coupon_progress();
        while self.unlock_coupon().is_some() {
            self.refresh();
            let left = self.coupon_progress();
            if left >= banked {
                break;
            }
            banked = left;
        }
    }

    fn refresh(&mut self) -> bool {
        let changed = self.feeds.drain_into(&mut self.snapshot);
        if changed {
            self.policy = self
                .config
                .rewards
                .resolve(self.snapshot.settings.rewards.as_ref());
        }
        changed
    }

    fn confirmed(&self, prompt: &str) -> bool {
        let accepted = self.confirm.confirm(prompt);
        if !accepted {
            debug!(event = "declined", prompt = %prompt);
        }
        accepted
    }

    /// Creates a document, stamping `createdAt` with server time.
    fn create(&self, collection: Collection, fields: Fields) -> Option<String> {
        let fields = fields.without("createdAt").server_timestamp("createdAt");
        match self.store.create(collection, fields) {
            Ok(id) => Some(id),
            Err(err) => {
                write_failed("create", collection, None, &err);
                None
            }
        }
    }

    /// Creates a document from every serialized field of `record`.
    fn create_record<T: Serialize>(&self, collection: Collection, record: &T) -> Option<String> {
        let fields = self.encoded(collection, Fields::from_record(record))?;
        self.create(collection, fields)
    }

    fn update(&self, collection: Collection, id: &str, fields: Fields) -> bool {
        match self.store.update(collection, id, fields) {
            Ok(()) => true,
            Err(err) => {
                write_failed("update", collection, Some(id), &err);
                false
            }
        }
    }

    fn delete(&self, collection: Collection, id: &str) -> bool {
        match self.store.delete(collection, id) {
            Ok(()) => true,
            Err(err) => {
                write_failed("delete", collection, Some(id), &err);
                false
            }
        }
    }

    fn upsert(&self, collection: Collection, id: &str, fields: Fields) -> bool {
        match self.store.upsert(collection, id, fields) {
            Ok(()) => true,
            Err(err) => {
                write_failed("upsert", collection, Some(id), &err);
                false
            }
        }
    }

    /// Unwraps encoded fields, logging encoding failures like any other
    /// failed write.
    fn encoded(&self, collection: Collection, fields: Result<Fields, StoreError>) -> Option<Fields> {
        match fields {
            Ok(fields) => Some(fields),
            Err(err) => {
                write_failed("encode", collection, None, &err);
                None
            }
        }
    }
}

fn write_failed(op: &str, collection: Collection, id: Option<&str>, err: &StoreError) {
    error!(
        event = "write_failed",
        op = op,
        collection = %collection,
        id = id.unwrap_or(""),
        error = %err,
    );
}
