//! Segments command handler printing the score cheat sheet.

use anyhow::{Context, Result};

use checkout_lib::{CheckoutRenderMode, SegmentSheet};

use crate::output::{render_json, OutputFormat};

/// Handle the segments subcommand.
pub fn handle_segments_command(format: OutputFormat) -> Result<()> {
    let sheet = SegmentSheet::build();
    let mode = match format {
        OutputFormat::Json => {
            render_json(&sheet).context("failed to write segment sheet")?;
            return Ok(());
        }
        OutputFormat::Text | OutputFormat::Enhanced => CheckoutRenderMode::PlainText,
        OutputFormat::Rich => CheckoutRenderMode::RichText,
        OutputFormat::Basic => CheckoutRenderMode::Compact,
    };
    print!("{}", sheet.render(mode));
    Ok(())
}
