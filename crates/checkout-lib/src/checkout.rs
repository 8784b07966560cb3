//! Minimal checkout selection and ranking.
//!
//! This module provides:
//! - [`Route`] - An ordered sequence of darts ending on a double
//! - [`CheckoutConfig`] - Caller preferences for finishing doubles
//! - [`Tier`] - The deduplicated candidates for the minimal dart count
//! - [`CheckoutResult`] - Ranked routes plus the minimal dart count
//! - [`compute_checkout`] - Main entry point tying search, selection and ranking together
//!
//! # Ranking
//!
//! Routes finishing on a preferred double come first. Ties are broken by
//! higher total score, then by ascending byte order of the comma-joined codes,
//! so the output is fully deterministic.
//!
//! # Example
//!
//! ```
//! use checkout_lib::{compute_checkout, CheckoutConfig};
//!
//! let result = compute_checkout(40, &CheckoutConfig::default());
//! assert_eq!(result.min_darts, Some(1));
//! assert_eq!(result.routes[0].joined_codes(), "D20");
//! ```

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::search::{search_candidates, MAX_DARTS};
use crate::segment::{segments, Segment};
use crate::target::is_valid_target;

/// Doubles offered as quick preference toggles, most popular first.
pub const SUGGESTED_DOUBLES: [&str; 6] = ["D20", "D16", "D12", "D10", "D8", "D6"];

/// Preferred finishing doubles used when the caller does not choose any.
pub const DEFAULT_PREFERRED_DOUBLES: [&str; 2] = ["D20", "D16"];

/// An ordered sequence of one to three darts ending on a double.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    darts: Vec<Segment>,
}

impl Route {
    /// Build a route from its setup darts and the finishing dart.
    ///
    /// # Panics
    ///
    /// Panics when `finish` is not a double or the route exceeds
    /// [`MAX_DARTS`].
    pub(crate) fn new(setup: Vec<Segment>, finish: Segment) -> Self {
        assert!(finish.is_finishing(), "{finish} cannot finish a checkout");
        assert!(setup.len() < MAX_DARTS, "route longer than {MAX_DARTS} darts");
        let mut darts = setup;
        darts.push(finish);
        Self { darts }
    }

    /// Build a route from segment codes, validating shape and finish.
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Self> {
        if codes.len() > MAX_DARTS {
            return Err(Error::TooManyDarts {
                count: codes.len(),
                max: MAX_DARTS,
            });
        }

        let table = segments();
        let (last, setup) = codes.split_last().ok_or(Error::EmptyRoute)?;
        let setup = setup
            .iter()
            .map(|code| table.resolve(code.as_ref()).cloned())
            .collect::<Result<Vec<_>>>()?;
        let finish = table.resolve_finishing(last.as_ref())?.clone();

        Ok(Self::new(setup, finish))
    }

    pub fn darts(&self) -> &[Segment] {
        &self.darts
    }

    /// Number of darts thrown, between 1 and [`MAX_DARTS`].
    pub fn dart_count(&self) -> usize {
        self.darts.len()
    }

    /// The finishing dart.
    pub fn finish(&self) -> &Segment {
        // `new` always pushes the finish last.
        &self.darts[self.darts.len() - 1]
    }

    /// Setup darts thrown before the finish.
    pub fn setup(&self) -> &[Segment] {
        &self.darts[..self.darts.len().saturating_sub(1)]
    }

    /// Sum of all dart values.
    pub fn total(&self) -> u32 {
        self.darts.iter().map(Segment::value).sum()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.darts.iter().map(Segment::code)
    }

    /// Codes joined with commas, e.g. `T20,T20,DBULL`.
    pub fn joined_codes(&self) -> String {
        self.codes().collect::<Vec<_>>().join(",")
    }

    /// Composite identity key used for deduplication.
    fn key(&self) -> Vec<String> {
        self.codes().map(str::to_owned).collect()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined_codes())
    }
}

/// Caller preferences applied when ranking checkouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Finishing-segment codes the caller favors.
    #[serde(default)]
    pub preferred_doubles: BTreeSet<String>,

    /// Drop routes that do not finish on a preferred double.
    #[serde(default)]
    pub show_only_preferred: bool,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self::with_preferred(DEFAULT_PREFERRED_DOUBLES)
    }
}

impl CheckoutConfig {
    /// Configuration with an explicit preferred set.
    pub fn with_preferred<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            preferred_doubles: codes.into_iter().map(Into::into).collect(),
            show_only_preferred: false,
        }
    }

    /// Configuration with no preferred doubles.
    pub fn without_preferences() -> Self {
        Self::with_preferred(std::iter::empty::<String>())
    }

    /// Set whether non-preferred finishes are hidden.
    pub fn only_preferred(mut self, enabled: bool) -> Self {
        self.show_only_preferred = enabled;
        self
    }

    pub fn is_preferred(&self, code: &str) -> bool {
        self.preferred_doubles.contains(code)
    }

    /// Flip membership of `code` in the preferred set.
    ///
    /// Returns `true` when the code is preferred after the call.
    pub fn toggle(&mut self, code: &str) -> bool {
        if self.preferred_doubles.remove(code) {
            false
        } else {
            self.preferred_doubles.insert(code.to_string());
            true
        }
    }

    /// Preferred codes that do not name a finishing segment.
    ///
    /// Such entries never match and are otherwise ignored.
    pub fn unmatched_preferences(&self) -> Vec<String> {
        let table = segments();
        self.preferred_doubles
            .iter()
            .filter(|code| !table.get(code).is_some_and(Segment::is_finishing))
            .cloned()
            .collect()
    }
}

/// High-level classification of a [`CheckoutResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// At least one route is listed.
    Found,
    /// A checkout exists but none finishes on a preferred double.
    NoPreferredMatch,
    /// No checkout exists within three darts.
    Impossible,
}

impl fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CheckoutOutcome::Found => "found",
            CheckoutOutcome::NoPreferredMatch => "no_preferred_match",
            CheckoutOutcome::Impossible => "impossible",
        };
        f.write_str(value)
    }
}

/// Ranked minimal checkouts for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutResult {
    pub routes: Vec<Route>,
    /// Minimal dart count, absent when no checkout exists.
    pub min_darts: Option<u8>,
}

impl CheckoutResult {
    /// The "no checkout possible" result.
    pub fn none() -> Self {
        Self {
            routes: Vec::new(),
            min_darts: None,
        }
    }

    pub fn outcome(&self) -> CheckoutOutcome {
        match (self.min_darts, self.routes.is_empty()) {
            (None, _) => CheckoutOutcome::Impossible,
            (Some(_), true) => CheckoutOutcome::NoPreferredMatch,
            (Some(_), false) => CheckoutOutcome::Found,
        }
    }

    /// One-line summary, e.g. `18 possibilities in 2 darts`.
    pub fn headline(&self) -> String {
        match self.min_darts {
            Some(darts) => {
                let count = self.routes.len();
                format!(
                    "{} {} in {} {}",
                    count,
                    if count == 1 { "possibility" } else { "possibilities" },
                    darts,
                    if darts == 1 { "dart" } else { "darts" }
                )
            }
            None => "No checkout possible".to_string(),
        }
    }

    /// Guidance shown when there is nothing to list.
    pub fn hint(&self) -> Option<&'static str> {
        match self.outcome() {
            CheckoutOutcome::Found => None,
            CheckoutOutcome::NoPreferredMatch => {
                Some("Adjust your preferred doubles or turn off preferred-only filtering.")
            }
            CheckoutOutcome::Impossible => {
                Some("Adjust the score; double-out checkouts run from 2 to 170.")
            }
        }
    }
}

/// Deduplicated candidates for the minimal dart count of a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    darts: u8,
    routes: Vec<Route>,
}

impl Tier {
    /// Dart count shared by every route in the tier.
    pub fn darts(&self) -> u8 {
        self.darts
    }

    /// Routes in generation order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Filter and sort a copy of the tier according to `config`.
    pub fn rank(&self, config: &CheckoutConfig) -> CheckoutResult {
        self.clone().into_ranked(config)
    }

    pub fn into_ranked(self, config: &CheckoutConfig) -> CheckoutResult {
        let mut routes = self.routes;
        if config.show_only_preferred {
            routes.retain(|route| config.is_preferred(route.finish().code()));
        }
        sort_routes(&mut routes, config);

        CheckoutResult {
            routes,
            min_darts: Some(self.darts),
        }
    }
}

/// Remove repeated routes, keeping the first occurrence of each code sequence.
pub fn dedup_routes(routes: Vec<Route>) -> Vec<Route> {
    let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(routes.len());
    routes
        .into_iter()
        .filter(|route| seen.insert(route.key()))
        .collect()
}

fn sort_routes(routes: &mut [Route], config: &CheckoutConfig) {
    routes.sort_by_cached_key(|route| {
        (
            Reverse(config.is_preferred(route.finish().code())),
            Reverse(route.total()),
            route.joined_codes(),
        )
    });
}

/// Find the smallest dart count that can check out `target`.
///
/// Returns `None` for targets outside 2-170 and for in-range targets that no
/// three-dart double finish reaches.
pub fn select_tier(target: i64) -> Option<Tier> {
    if !is_valid_target(target) {
        debug!(target, "target outside checkout range");
        return None;
    }

    let candidates = search_candidates(target);
    debug!(
        target,
        one = candidates.one.len(),
        two = candidates.two.len(),
        three = candidates.three.len(),
        "route search complete"
    );

    candidates
        .into_tiers()
        .into_iter()
        .zip(1u8..)
        .map(|(routes, darts)| (dedup_routes(routes), darts))
        .find(|(routes, _)| !routes.is_empty())
        .map(|(routes, darts)| Tier { darts, routes })
}

/// Compute the ranked minimal checkouts for `target`.
pub fn compute_checkout(target: i64, config: &CheckoutConfig) -> CheckoutResult {
    let result = match select_tier(target) {
        Some(tier) => tier.into_ranked(config),
        None => CheckoutResult::none(),
    };

    debug!(
        target,
        min_darts = ?result.min_darts,
        routes = result.routes.len(),
        outcome = %result.outcome(),
        "checkout computed"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(codes: &[&str]) -> Route {
        Route::from_codes(codes).expect("valid route")
    }

    #[test]
    fn from_codes_validates_finish() {
        assert_eq!(
            Route::from_codes(&["T20", "S20"]).unwrap_err(),
            Error::NotFinishingSegment {
                code: "S20".to_string()
            }
        );
        assert_eq!(
            Route::from_codes::<&str>(&[]).unwrap_err(),
            Error::EmptyRoute
        );
        assert!(matches!(
            Route::from_codes(&["T20", "T20", "T20", "D20"]).unwrap_err(),
            Error::TooManyDarts { count: 4, max: 3 }
        ));
    }

    #[test]
    fn route_accessors() {
        let r = route(&["T20", "T20", "DBULL"]);
        assert_eq!(r.dart_count(), 3);
        assert_eq!(r.total(), 170);
        assert_eq!(r.finish().code(), "DBULL");
        assert_eq!(r.setup().len(), 2);
        assert_eq!(r.to_string(), "T20,T20,DBULL");
    }

    #[test]
    fn single_dart_route_is_its_own_finish() {
        let table = segments();
        let r = Route::new(Vec::new(), table.get("D16").unwrap().clone());
        assert_eq!(r.dart_count(), 1);
        assert!(r.setup().is_empty());
        assert_eq!(r.finish().code(), "D16");
    }

    #[test]
    #[should_panic(expected = "cannot finish a checkout")]
    fn new_rejects_non_double_finish() {
        let table = segments();
        Route::new(Vec::new(), table.get("T20").unwrap().clone());
    }

    #[test]
    #[should_panic(expected = "route longer than 3 darts")]
    fn new_rejects_four_darts() {
        let table = segments();
        let t20 = table.get("T20").unwrap().clone();
        Route::new(vec![t20.clone(), t20.clone(), t20], table.get("D20").unwrap().clone());
    }

    #[test]
    fn dedup_keeps_first_occurrence_and_order() {
        let routes = vec![
            route(&["S1", "D20"]),
            route(&["S9", "D16"]),
            route(&["S1", "D20"]),
        ];
        let deduped = dedup_routes(routes);
        let codes: Vec<String> = deduped.iter().map(Route::joined_codes).collect();
        assert_eq!(codes, vec!["S1,D20", "S9,D16"]);
    }

    #[test]
    fn dedup_treats_permutations_as_distinct() {
        let routes = vec![route(&["T19", "T20", "DBULL"]), route(&["T20", "T19", "DBULL"])];
        assert_eq!(dedup_routes(routes).len(), 2);
    }

    #[test]
    fn sort_puts_preferred_finish_first() {
        let mut routes = vec![route(&["BULL", "D8"]), route(&["S9", "D16"])];
        let config = CheckoutConfig::with_preferred(["D16"]);
        sort_routes(&mut routes, &config);
        assert_eq!(routes[0].joined_codes(), "S9,D16");
    }

    #[test]
    fn sort_prefers_higher_total_before_codes() {
        let mut routes = vec![route(&["S1", "D1"]), route(&["T20", "D20"])];
        sort_routes(&mut routes, &CheckoutConfig::without_preferences());
        assert_eq!(routes[0].joined_codes(), "T20,D20");
    }

    #[test]
    fn sort_breaks_ties_by_ascii_code_order() {
        let mut routes = vec![
            route(&["S3", "D19"]),
            route(&["S19", "D11"]),
            route(&["BULL", "D8"]),
        ];
        sort_routes(&mut routes, &CheckoutConfig::without_preferences());
        let codes: Vec<String> = routes.iter().map(Route::joined_codes).collect();
        assert_eq!(codes, vec!["BULL,D8", "S19,D11", "S3,D19"]);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut config = CheckoutConfig::default();
        assert!(!config.toggle("D20"));
        assert!(!config.is_preferred("D20"));
        assert!(config.toggle("D20"));
        assert!(config.is_preferred("D20"));
    }

    #[test]
    fn unmatched_preferences_lists_non_doubles() {
        let config = CheckoutConfig::with_preferred(["D20", "T20", "XYZ", "DBULL"]);
        assert_eq!(config.unmatched_preferences(), vec!["T20", "XYZ"]);
    }

    #[test]
    fn filter_never_falls_back_to_higher_tier() {
        let config = CheckoutConfig::with_preferred(["D16"]).only_preferred(true);
        let result = compute_checkout(40, &config);
        assert_eq!(result.min_darts, Some(1));
        assert!(result.routes.is_empty());
        assert_eq!(result.outcome(), CheckoutOutcome::NoPreferredMatch);
    }

    #[test]
    fn headline_pluralises() {
        let single = compute_checkout(40, &CheckoutConfig::default());
        assert_eq!(single.headline(), "1 possibility in 1 dart");

        let many = compute_checkout(41, &CheckoutConfig::default());
        assert_eq!(many.headline(), "18 possibilities in 2 darts");

        assert_eq!(CheckoutResult::none().headline(), "No checkout possible");
    }

    #[test]
    fn hint_only_when_nothing_listed() {
        assert!(compute_checkout(40, &CheckoutConfig::default()).hint().is_none());
        assert!(CheckoutResult::none().hint().is_some());
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: CheckoutConfig = serde_json::from_str("{}").unwrap();
        assert!(config.preferred_doubles.is_empty());
        assert!(!config.show_only_preferred);
    }
}
