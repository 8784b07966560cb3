//! Exhaustive enumeration of double-out dart sequences.
//!
//! The search walks every finishing segment, then every setup dart for the
//! first and second positions. The domain is small (62 x 62 x 21 in the worst
//! case) so no memoization is used; candidates whose remaining need drops to
//! zero or below are skipped early, which prunes without changing output.

use crate::checkout::Route;
use crate::segment::{segments, Segment};

/// Largest number of darts a checkout may use.
pub const MAX_DARTS: usize = 3;

/// Raw candidates for one target, grouped by dart count.
///
/// Tiers are in generation order and are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateTiers {
    pub one: Vec<Route>,
    pub two: Vec<Route>,
    pub three: Vec<Route>,
}

impl CandidateTiers {
    /// Tiers in ascending dart count.
    pub fn into_tiers(self) -> [Vec<Route>; MAX_DARTS] {
        [self.one, self.two, self.three]
    }

    /// Total number of candidates across all tiers.
    pub fn len(&self) -> usize {
        self.one.len() + self.two.len() + self.three.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Enumerate every 1-, 2- and 3-dart route that scores exactly `target`
/// and ends on a double.
pub fn search_candidates(target: i64) -> CandidateTiers {
    let table = segments();
    let finishing = table.finishing();
    let setups = table.all();

    CandidateTiers {
        one: one_dart(target, finishing),
        two: two_darts(target, finishing, setups),
        three: three_darts(target, finishing, setups),
    }
}

fn one_dart(target: i64, finishing: &[Segment]) -> Vec<Route> {
    finishing
        .iter()
        .filter(|double| i64::from(double.value()) == target)
        .map(|double| Route::new(Vec::new(), double.clone()))
        .collect()
}

fn two_darts(target: i64, finishing: &[Segment], setups: &[Segment]) -> Vec<Route> {
    let mut routes = Vec::new();
    for double in finishing {
        let need = target.saturating_sub(i64::from(double.value()));
        if need <= 0 {
            continue;
        }
        for first in setups {
            if i64::from(first.value()) == need {
                routes.push(Route::new(vec![first.clone()], double.clone()));
            }
        }
    }
    routes
}

fn three_darts(target: i64, finishing: &[Segment], setups: &[Segment]) -> Vec<Route> {
    let mut routes = Vec::new();
    for double in finishing {
        let need_two = target.saturating_sub(i64::from(double.value()));
        if need_two <= 0 {
            continue;
        }
        for first in setups {
            let need_one = need_two - i64::from(first.value());
            if need_one <= 0 {
                continue;
            }
            for second in setups {
                if i64::from(second.value()) == need_one {
                    routes.push(Route::new(
                        vec![first.clone(), second.clone()],
                        double.clone(),
                    ));
                }
            }
        }
    }
    routes
}
