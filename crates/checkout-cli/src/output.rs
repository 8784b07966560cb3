//! Output formatting for checkout rendering.
//!
//! This module provides formatters for rendering checkout summaries
//! in various output formats (text, rich, enhanced, etc.).

mod enhanced;

use std::io::{self, Write};

use checkout_lib::{CheckoutRenderMode, CheckoutSummary};
use clap::ValueEnum;
use serde::Serialize;

use crate::terminal::{colors, supports_color, supports_unicode};

pub use enhanced::EnhancedRenderer;

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with segment labels.
    #[default]
    Text,
    /// Markdown with the finishing dart in bold.
    Rich,
    /// Colored badges for setup and finishing darts.
    Enhanced,
    /// One route per line as comma-separated codes.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Whether this format is meant for humans and may carry a banner.
    pub fn is_decorated(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Enhanced)
    }
}

/// Print the CLI logo banner.
///
/// The logo adapts to terminal capabilities:
/// - Uses Unicode box-drawing characters when supported
/// - Falls back to ASCII when Unicode is not detected
/// - Respects `NO_COLOR` and `TERM=dumb` conventions
pub fn print_logo() {
    let (orange, cyan, reset) = if supports_color() {
        (colors::ORANGE, colors::CYAN, colors::RESET)
    } else {
        ("", "", "")
    };

    if supports_unicode() {
        println!(
            "{cyan}╭──────────────────────────────────╮{reset}
{cyan}│{orange}   ◎  D A R T S   C H E C K O U T {cyan}│{reset}
{cyan}├──────────────────────────────────┤{reset}
{cyan}│{orange}         [ double  out ]          {cyan}│{reset}
{cyan}╰──────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+----------------------------------+
|  DARTS CHECKOUT                  |
|  >> DOUBLE-OUT ROUTE CALCULATOR  |
+----------------------------------+{reset}"
        );
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: std::time::Duration) {
    let (gray, reset) = if supports_color() {
        (colors::GRAY, colors::RESET)
    } else {
        ("", "")
    };

    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };

    println!("\n{gray}Completed in {}{reset}", time_str);
}

/// Render a checkout summary in text format.
pub fn render_text(summary: &CheckoutSummary) {
    print!("{}", summary.render(CheckoutRenderMode::PlainText));
}

/// Render a checkout summary in rich text format using the library's renderer.
pub fn render_rich(summary: &CheckoutSummary) {
    print!("{}", summary.render(CheckoutRenderMode::RichText));
}

/// Render a checkout summary as bare codes, one route per line.
pub fn render_basic(summary: &CheckoutSummary) {
    print!("{}", summary.render(CheckoutRenderMode::Compact));
}

/// Render any serialisable value in JSON format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Render a checkout summary with colored dart badges.
pub fn render_enhanced(summary: &CheckoutSummary) {
    let renderer = EnhancedRenderer::default();
    print!("{}", renderer.render(summary));
}

/// Dispatch a checkout summary to the renderer for `format`.
///
/// # Errors
///
/// Returns an error if JSON output cannot be written.
pub fn render_summary(summary: &CheckoutSummary, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(summary),
        OutputFormat::Rich => render_rich(summary),
        OutputFormat::Enhanced => render_enhanced(summary),
        OutputFormat::Basic => render_basic(summary),
        OutputFormat::Json => render_json(summary)?,
    }
    Ok(())
}
