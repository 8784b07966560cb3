//! Darts checkout library entry points.
//!
//! This crate exposes the fixed segment table, the exhaustive route search over
//! one to three darts, and the ranking step that turns raw candidates into an
//! ordered list of minimal checkouts. Higher-level consumers (CLI, HTTP service)
//! should only depend on the functions exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod book;
pub mod checkout;
pub mod error;
pub mod output;
pub mod search;
pub mod segment;
pub mod target;

pub use book::CheckoutBook;
pub use checkout::{
    compute_checkout, dedup_routes, select_tier, CheckoutConfig, CheckoutOutcome, CheckoutResult,
    Route, Tier, DEFAULT_PREFERRED_DOUBLES, SUGGESTED_DOUBLES,
};
pub use error::{Error, Result};
pub use output::{
    CheckoutRenderMode, CheckoutSummary, DartLine, RouteLine, SegmentSheet, DOUBLE_OUT_NOTE,
};
pub use search::{search_candidates, CandidateTiers, MAX_DARTS};
pub use segment::{segments, Segment, SegmentKind, SegmentTable};
pub use target::{
    clamp_target, is_valid_target, step_target, DEFAULT_TARGET, MAX_TARGET, MIN_TARGET,
};
