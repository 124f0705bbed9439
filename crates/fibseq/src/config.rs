//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::{Parser, Subcommand};

use fibseq_core::constants::{DEFAULT_BATCH_SIZE, DEFAULT_POLL_INTERVAL_MS};
use fibseq_core::options::EngineOptions;

/// fibseq: generate Fibonacci sequences and look up single Fibonacci numbers.
#[derive(Parser, Debug)]
#[command(name = "fibseq", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Consumer polling interval in milliseconds.
    #[arg(
        long,
        value_name = "MS",
        default_value_t = DEFAULT_POLL_INTERVAL_MS,
        env = "FIBSEQ_POLL_MS"
    )]
    pub poll_interval: u64,

    /// Sequence lines per output batch.
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_BATCH_SIZE,
        env = "FIBSEQ_BATCH_SIZE"
    )]
    pub batch_size: usize,

    /// Quiet mode (only the sequence lines or the number).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print every event as one JSON line.
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub json: bool,

    /// Verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completion: Option<clap_complete::Shell>,
}

/// What to compute.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate the first QUANTITY Fibonacci numbers.
    Sequence {
        /// How many numbers to generate (1 to 100000).
        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        /// Skip the confirmation asked for large quantities.
        #[arg(short, long)]
        yes: bool,
    },
    /// Look up the Fibonacci number at POSITION (F(1) = F(2) = 1).
    Find {
        /// 1-indexed position (1 to 1000000).
        #[arg(allow_negative_numbers = true)]
        position: i64,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Engine options built from the flags.
    #[must_use]
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            batch_size: self.batch_size,
            poll_interval: Duration::from_millis(self.poll_interval),
            ..EngineOptions::default()
        }
        .normalize()
    }
}
