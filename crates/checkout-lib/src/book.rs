//! Pre-computed minimal tiers for every valid target.
//!
//! The tier for a target does not depend on caller preferences, so long-lived
//! collaborators (the HTTP service) build a [`CheckoutBook`] once and only
//! filter and sort per request.

use tracing::info;

use crate::checkout::{select_tier, CheckoutConfig, CheckoutResult, Tier};
use crate::target::{is_valid_target, MAX_TARGET, MIN_TARGET};

/// Cached tiers indexed by target.
#[derive(Debug, Clone)]
pub struct CheckoutBook {
    tiers: Vec<Option<Tier>>,
}

impl CheckoutBook {
    /// Run the route search for every target in the checkout range.
    pub fn build() -> Self {
        let tiers: Vec<Option<Tier>> = (MIN_TARGET..=MAX_TARGET).map(select_tier).collect();
        let book = Self { tiers };
        info!(
            targets = book.len(),
            checkouts = book.checkout_count(),
            impossible = book.impossible_targets().len(),
            "checkout book built"
        );
        book
    }

    /// Number of targets covered.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// The cached tier for `target`, if the target has a checkout.
    pub fn tier(&self, target: i64) -> Option<&Tier> {
        if !is_valid_target(target) {
            return None;
        }
        let index = usize::try_from(target - MIN_TARGET).ok()?;
        self.tiers.get(index).and_then(Option::as_ref)
    }

    /// Ranked checkouts for `target`, identical to
    /// [`compute_checkout`](crate::compute_checkout).
    pub fn lookup(&self, target: i64, config: &CheckoutConfig) -> CheckoutResult {
        self.tier(target)
            .map(|tier| tier.rank(config))
            .unwrap_or_else(CheckoutResult::none)
    }

    /// Minimal dart count for `target`.
    pub fn min_darts(&self, target: i64) -> Option<u8> {
        self.tier(target).map(Tier::darts)
    }

    /// In-range targets with no three-dart double finish.
    pub fn impossible_targets(&self) -> Vec<i64> {
        (MIN_TARGET..=MAX_TARGET)
            .zip(&self.tiers)
            .filter(|(_, tier)| tier.is_none())
            .map(|(target, _)| target)
            .collect()
    }

    /// Total number of distinct minimal routes across all targets.
    pub fn checkout_count(&self) -> usize {
        self.tiers
            .iter()
            .flatten()
            .map(|tier| tier.routes().len())
            .sum()
    }
}
