//! Target range and input clamping helpers.

/// Lowest score that can be checked out (a single D1).
pub const MIN_TARGET: i64 = 2;

/// Highest score that can be checked out in three darts (T20, T20, DBULL).
pub const MAX_TARGET: i64 = 170;

/// Score a fresh leg starts the calculator on.
pub const DEFAULT_TARGET: i64 = MAX_TARGET;

/// Whether `target` lies in the checkout range.
pub fn is_valid_target(target: i64) -> bool {
    (MIN_TARGET..=MAX_TARGET).contains(&target)
}

/// Clamp raw user input into the checkout range.
pub fn clamp_target(raw: i64) -> i64 {
    raw.clamp(MIN_TARGET, MAX_TARGET)
}

/// Move `current` by `delta`, staying inside the checkout range.
pub fn step_target(current: i64, delta: i64) -> i64 {
    clamp_target(clamp_target(current).saturating_add(delta))
}
