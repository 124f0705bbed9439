//! Limits, batching, and polling constants for the computation engine.

/// Hard upper bound on the quantity of a sequence generation.
pub const MAX_SEQUENCE_QUANTITY: u64 = 100_000;

/// Quantities above this value need explicit confirmation before starting.
pub const CONFIRMATION_THRESHOLD: u64 = 20_000;

/// Hard upper bound on the position of a point query.
pub const MAX_POINT_POSITION: u64 = 1_000_000;

/// Number of rendered lines per `Batch` event.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Reference cadence (in milliseconds) at which consumers drain the channel.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Header carried by the `Started` event of a sequence generation.
pub const SEQUENCE_HEADER: &str = "Fibonacci Sequence:\n\n";

/// Message carried by the `Stopped` event.
pub const STOPPED_MESSAGE: &str = "Generation stopped by user.";

/// Largest 0-indexed term that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93 (fast path).
///
/// The table is 0-indexed (`FIB_TABLE[0] = 0`), which makes `FIB_TABLE[p]`
/// the 1-indexed F(p) used by point queries.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes used by the command-line consumer.
pub mod exit_codes {
    /// Successful execution (also used when a confirmation is declined).
    pub const SUCCESS: i32 = 0;
    /// A computation reported an `Error` event.
    pub const ERROR_GENERIC: i32 = 1;
    /// A computation was already running.
    pub const ERROR_BUSY: i32 = 2;
    /// Input rejected by the bounds policy.
    pub const ERROR_VALIDATION: i32 = 4;
    /// Generation stopped by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
