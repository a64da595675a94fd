//! Coupons and date nights.

use chrono::Utc;
use kingdom_core::{Coupon, DateNightLog, KingdomError, Result};
use kingdom_rules::{
    coupon_progress, date_night_progress, propose_date_night, redeem_date_night, try_unlock_coupon,
    views, CouponUnlock, DateNightProposal,
};
use kingdom_store::{Collection, Fields};
use tracing::{debug, info};

use super::Household;

impl Household {
    /// Runs the coupon check for this profile against the latest snapshot.
    ///
    /// Returns the unlock when one happened. Calling again without new
    /// deeds writes nothing.
    pub fn try_unlock_coupon(&mut self) -> Option<CouponUnlock> {
        self.refresh();
        let unlock = self.unlock_coupon()?;
        self.refresh();
        Some(unlock)
    }

    /// Spends one threshold of deeds on one coupon.
    ///
    /// The coupon is written first and the redeem flags only once it
    /// landed; there is no transaction spanning the two.
    pub(super) fn unlock_coupon(&mut self) -> Option<CouponUnlock> {
        let unlock = try_unlock_coupon(&self.snapshot, self.profile, &self.policy, &mut self.rng)?;

        let coupon = Coupon {
            id: String::new(),
            title: unlock.title.clone(),
            owner: unlock.owner,
            is_used: false,
        };
        self.create_record(Collection::Coupons, &coupon)?;

        for id in &unlock.redeemed {
            self.update(
                Collection::Chores,
                id,
                Fields::new().set("redeemedForCoupon", true),
            );
        }

        info!(
            event = "coupon_unlocked",
            owner = %unlock.owner,
            title = %unlock.title,
            deeds = unlock.redeemed.len(),
        );
        Some(unlock)
    }

    /// Deeds this profile has banked toward the next coupon.
    pub fn coupon_progress(&self) -> usize {
        coupon_progress(&self.snapshot, self.profile)
    }

    /// Unused coupons of this profile.
    pub fn available_coupons(&self) -> Vec<&Coupon> {
        views::available_coupons(&self.snapshot, self.profile)
    }

    /// Uses a coupon. A coupon already used stays used and nothing is
    /// written; returns whether this call used it.
    pub fn redeem_coupon(&mut self, id: &str) -> Result<bool> {
        self.refresh();
        let coupon = self
            .snapshot
            .coupon(id)
            .ok_or_else(|| KingdomError::UnknownCoupon(id.to_string()))?;
        if coupon.is_used {
            return Ok(false);
        }

        let sent = self.update(Collection::Coupons, id, Fields::new().set("isUsed", true));
        if sent {
            debug!(event = "coupon_redeemed", coupon = %id);
        }
        self.sync();
        Ok(sent)
    }

    /// Reward wishes from the partner awaiting an answer.
    pub fn pending_reward_requests(&self) -> usize {
        views::pending_reward_requests(&self.snapshot, self.profile)
    }

    /// Household deeds of both partners not yet spent on a date night.
    pub fn date_night_progress(&self) -> usize {
        date_night_progress(&self.snapshot)
    }

    /// True once enough deeds are banked to log a date night.
    pub fn date_night_unlocked(&self) -> bool {
        self.date_night_progress() >= self.policy.chores_per_date_night
    }

    pub fn propose_date_night(&mut self) -> DateNightProposal {
        propose_date_night(&mut self.rng, Utc::now())
    }

    /// Records a date night and spends the oldest threshold of deeds on it.
    ///
    /// Refuses with [`KingdomError::DateNightLocked`] below the threshold.
    /// The deeds are only flagged once the history record landed.
    pub fn log_date_night(
        &mut self,
        proposal: &DateNightProposal,
        review: Option<String>,
        photo: Option<String>,
    ) -> Result<()> {
        self.refresh();
        let redeemed = redeem_date_night(&self.snapshot, &self.policy)?;

        let log = DateNightLog {
            id: String::new(),
            vibe: proposal.vibe.clone(),
            activity: proposal.activity.clone(),
            food: proposal.food.clone(),
            place: proposal.place.clone(),
            date: proposal.date,
            review,
            photo,
            created_at: None,
        };
        if self.create_record(Collection::DateNights, &log).is_some() {
            for id in &redeemed {
                self.update(Collection::Chores, id, Fields::new().set("redeemedForDate", true));
            }
            info!(event = "date_night_logged", vibe = %log.vibe, deeds = redeemed.len());
        }
        self.sync();
        Ok(())
    }
}
