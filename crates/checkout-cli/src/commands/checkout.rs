//! Checkout command handler for suggesting double-out finishes.

use anyhow::{Context, Result};
use tracing::{info, warn};

use checkout_lib::{
    clamp_target, compute_checkout, is_valid_target, segments, CheckoutConfig, CheckoutSummary,
};

use crate::output::{render_summary, OutputFormat};

/// Arguments for the checkout command.
#[derive(Debug, Clone)]
pub struct CheckoutCommandArgs {
    /// Remaining score.
    pub score: i64,
    /// Preferred finishing doubles.
    pub prefer: Vec<String>,
    /// Ignore `prefer` entirely.
    pub no_preferred: bool,
    /// Hide routes that do not finish on a preferred double.
    pub only_preferred: bool,
    /// Pull out-of-range scores into 2-170 instead of reporting no checkout.
    pub clamp: bool,
}

impl CheckoutCommandArgs {
    /// The score to search for after optional clamping.
    pub fn target(&self) -> i64 {
        if self.clamp {
            clamp_target(self.score)
        } else {
            self.score
        }
    }

    /// Convert CLI args to a library [`CheckoutConfig`].
    ///
    /// Codes are matched case-insensitively against the segment table.
    pub fn to_config(&self) -> CheckoutConfig {
        let config = if self.no_preferred {
            CheckoutConfig::without_preferences()
        } else {
            CheckoutConfig::with_preferred(
                self.prefer
                    .iter()
                    .map(|code| code.trim().to_ascii_uppercase())
                    .filter(|code| !code.is_empty()),
            )
        };
        config.only_preferred(self.only_preferred)
    }
}

/// Handle the checkout subcommand.
///
/// Computes the minimal-dart checkouts for the requested score and renders
/// them in the chosen format.
pub fn handle_checkout_command(args: &CheckoutCommandArgs, format: OutputFormat) -> Result<()> {
    let target = args.target();
    if target != args.score {
        info!(requested = args.score, target, "score clamped into checkout range");
    } else if !is_valid_target(target) {
        warn!(target, "score outside the 2-170 checkout range");
    }

    let config = args.to_config();
    warn_on_unmatched_preferences(&config);

    let result = compute_checkout(target, &config);
    let summary = CheckoutSummary::from_result(target, &result, &config);

    render_summary(&summary, format).context("failed to write checkout output")?;
    Ok(())
}

/// Log a warning with suggestions for every preferred code that can never
/// match a finishing dart.
fn warn_on_unmatched_preferences(config: &CheckoutConfig) {
    let table = segments();
    for code in config.unmatched_preferences() {
        if let Err(err) = table.resolve_finishing(&code) {
            warn!(code = %code, "ignoring preferred code: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(score: i64) -> CheckoutCommandArgs {
        CheckoutCommandArgs {
            score,
            prefer: vec!["D20".to_string(), "D16".to_string()],
            no_preferred: false,
            only_preferred: false,
            clamp: false,
        }
    }

    #[test]
    fn clamp_only_when_requested() {
        assert_eq!(args(180).target(), 180);
        let clamped = CheckoutCommandArgs {
            clamp: true,
            ..args(180)
        };
        assert_eq!(clamped.target(), 170);
    }

    #[test]
    fn preferred_codes_are_normalised() {
        let cli = CheckoutCommandArgs {
            prefer: vec![" d8 ".to_string(), "dbull".to_string(), String::new()],
            ..args(40)
        };
        let config = cli.to_config();
        assert!(config.is_preferred("D8"));
        assert!(config.is_preferred("DBULL"));
        assert_eq!(config.preferred_doubles.len(), 2);
    }

    #[test]
    fn no_preferred_clears_preferences() {
        let cli = CheckoutCommandArgs {
            no_preferred: true,
            only_preferred: true,
            ..args(40)
        };
        let config = cli.to_config();
        assert!(config.preferred_doubles.is_empty());
        assert!(config.show_only_preferred);
    }
}
