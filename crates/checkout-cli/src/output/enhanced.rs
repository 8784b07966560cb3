//! Enhanced renderer with colored badges for setup and finishing darts.

use std::fmt::Write;

use checkout_lib::{CheckoutOutcome, CheckoutSummary, DartLine, RouteLine};

use crate::terminal::{route_separator, ColorPalette};

/// Renderer for the enhanced output format.
pub struct EnhancedRenderer {
    palette: ColorPalette,
    separator: &'static str,
}

impl Default for EnhancedRenderer {
    fn default() -> Self {
        Self::new(ColorPalette::detect(), route_separator())
    }
}

impl EnhancedRenderer {
    /// Create a new enhanced renderer with the given palette and dart separator.
    #[must_use]
    pub const fn new(palette: ColorPalette, separator: &'static str) -> Self {
        Self { palette, separator }
    }

    /// Render a checkout summary to a string.
    pub fn render(&self, summary: &CheckoutSummary) -> String {
        let p = &self.palette;
        let mut buffer = String::new();

        let headline_color = match summary.outcome {
            CheckoutOutcome::Found => p.green,
            CheckoutOutcome::NoPreferredMatch => p.yellow,
            CheckoutOutcome::Impossible => p.red,
        };
        let _ = writeln!(
            buffer,
            "Checkout {}{}{}: {}{}{}",
            p.white_bold, summary.target, p.reset, headline_color, summary.headline, p.reset
        );

        for line in &summary.routes {
            let _ = writeln!(buffer, "{}", self.build_route_line(line));
        }

        if let Some(hint) = &summary.hint {
            let _ = writeln!(buffer, "{}{}{}", p.gray, hint, p.reset);
        }

        if !summary.ignored_preferred.is_empty() {
            let _ = writeln!(
                buffer,
                "{}Ignored preferred codes (not a double): {}{}",
                p.yellow,
                summary.ignored_preferred.join(", "),
                p.reset
            );
        }

        buffer
    }

    pub(crate) fn build_route_line(&self, line: &RouteLine) -> String {
        let p = &self.palette;
        let last = line.darts.len().saturating_sub(1);
        let darts = line
            .darts
            .iter()
            .enumerate()
            .map(|(i, dart)| self.build_dart_badge(dart, i == last))
            .collect::<Vec<_>>()
            .join(self.separator);

        let mut rendered = format!("{}{:>3}.{} {}", p.gray, line.rank, p.reset, darts);
        if line.preferred_finish {
            let _ = write!(rendered, "  {}preferred{}", p.green, p.reset);
        }
        rendered
    }

    fn build_dart_badge(&self, dart: &DartLine, is_finish: bool) -> String {
        let p = &self.palette;
        let tag = if is_finish { p.tag_finish } else { p.tag_setup };
        format!(
            "{}{:^7}{} {}({}){}",
            tag, dart.code, p.reset, p.cyan, dart.value, p.reset
        )
    }
}
