use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seqwrap::{Seed, Wrap};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seqwrap", about = "Print lazily generated sequences")]
struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Separator placed between printed values; `sum` prints a single value.
    #[arg(long, global = true, default_value = ",")]
    separator: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Numbers from START (included) to END (excluded).
    Range {
        #[arg(allow_negative_numbers = true)]
        start: f64,
        #[arg(allow_negative_numbers = true)]
        end: f64,
        /// Step between values; its sign picks the direction.
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        step: f64,
    },
    /// The first N numbers of an endless progression from START.
    Infinity {
        #[arg(allow_negative_numbers = true)]
        start: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        step: f64,
        /// How many values to print.
        #[arg(long)]
        take: usize,
    },
    /// VALUE repeated COUNT times.
    Repeat {
        value: String,
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },
    /// The first N values of VALUES repeated cyclically.
    Cycle {
        #[arg(required = true)]
        values: Vec<String>,
        /// How many values to print.
        #[arg(long)]
        take: usize,
    },
    /// Pair up LEFT and RIGHT values as `left:right`.
    Zip {
        #[arg(long, num_args = 1.., required = true)]
        left: Vec<String>,
        #[arg(long, num_args = 1.., required = true)]
        right: Vec<String>,
    },
    /// Sum of the numbers from START (included) to END (excluded).
    Sum {
        #[arg(allow_negative_numbers = true)]
        start: f64,
        #[arg(allow_negative_numbers = true)]
        end: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        step: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let separator = cli.separator.as_str();
    match cli.command {
        Commands::Range { start, end, step } => {
            println!("{}", Wrap::range(start, end, step).join(separator));
        }
        Commands::Infinity { start, step, take } => {
            println!("{}", Wrap::infinity(start, step).take(take).join(separator));
        }
        Commands::Repeat { value, count } => {
            println!("{}", Wrap::repeat(value, count).join(separator));
        }
        Commands::Cycle { values, take } => {
            println!("{}", Wrap::cycle(&values).take(take).join(separator));
        }
        Commands::Zip { left, right } => println!("{}", render_zip(&left, &right, separator)),
        Commands::Sum { start, end, step } => run_sum(start, end, step)?,
    }

    Ok(())
}

fn init_tracing(fallback_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback_level)
            .with_context(|| format!("invalid log level '{}'", fallback_level))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn render_zip(left: &[String], right: &[String], separator: &str) -> String {
    Wrap::zip((left, right))
        .map(|(l, r)| format!("{}:{}", l, r))
        .join(separator)
}

fn run_sum(start: f64, end: f64, step: f64) -> Result<()> {
    let total = Wrap::range(start, end, step)
        .reduce(|acc, value, _| acc + value, Seed::Unseeded)
        .with_context(|| format!("cannot sum range({}, {}, {})", start, end, step))?;
    info!(start, end, step, total, "summed range");
    println!("{}", total);
    Ok(())
}
