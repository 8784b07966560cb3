use std::time::Instant;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use checkout_lib::{DEFAULT_PREFERRED_DOUBLES, DEFAULT_TARGET};

use checkout_cli::commands::checkout::{handle_checkout_command, CheckoutCommandArgs};
use checkout_cli::commands::segments::handle_segments_command;
use checkout_cli::output::{self, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Double-out checkout suggestions for darts")]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone)]
struct GlobalOptions {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Suppress the banner and timing footer.
    #[arg(long, global = true)]
    no_logo: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest the shortest double-out finishes for a remaining score.
    Checkout(CheckoutArgs),
    /// Print the single, double and treble value of every board segment.
    Segments,
}

#[derive(Args, Debug, Clone)]
struct CheckoutArgs {
    /// Remaining score (checkouts exist between 2 and 170). Defaults to a
    /// fresh 170 finish.
    #[arg(allow_negative_numbers = true, default_value_t = DEFAULT_TARGET)]
    score: i64,

    /// Preferred finishing doubles, comma separated or repeated.
    #[arg(long, value_delimiter = ',', default_values = DEFAULT_PREFERRED_DOUBLES)]
    prefer: Vec<String>,

    /// Rank routes without any preferred doubles.
    #[arg(long)]
    no_preferred: bool,

    /// Only list routes finishing on a preferred double.
    #[arg(long)]
    only_preferred: bool,

    /// Pull out-of-range scores into 2-170 instead of reporting no checkout.
    #[arg(long)]
    clamp: bool,
}

impl From<CheckoutArgs> for CheckoutCommandArgs {
    fn from(args: CheckoutArgs) -> Self {
        Self {
            score: args.score,
            prefer: args.prefer,
            no_preferred: args.no_preferred,
            only_preferred: args.only_preferred,
            clamp: args.clamp,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let format = cli.global.format;
    let decorated = format.is_decorated() && !cli.global.no_logo;

    if decorated {
        output::print_logo();
    }
    let started = Instant::now();

    match cli.command {
        Command::Checkout(args) => handle_checkout_command(&args.into(), format)?,
        Command::Segments => handle_segments_command(format)?,
    }

    if decorated {
        output::print_footer(started.elapsed());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
