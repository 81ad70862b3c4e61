//! Configuration for block-mode encoding and decoding

/// What to do with a trailing block shorter than n that still carries data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingPolicy {
    /// Fail with `ShortBlock`
    #[default]
    Reject,
    /// Treat the missing high-order coefficients as zeros
    ZeroExtend,
}

/// Configuration for block-mode operations
#[derive(Debug, Clone)]
pub struct BlockConfig {
    /// Number of threads for computation (0 = auto-detect)
    pub threads: usize,
    /// Whether to process blocks in parallel (false = single-threaded everything)
    pub parallel: bool,
    /// Handling of a short trailing block when decoding
    pub padding: PaddingPolicy,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            parallel: true,
            padding: PaddingPolicy::Reject,
        }
    }
}

impl BlockConfig {
    pub fn new(threads: usize, parallel: bool, padding: PaddingPolicy) -> Self {
        Self {
            threads,
            parallel,
            padding,
        }
    }

    /// Sequential, rejecting short blocks
    pub fn sequential() -> Self {
        Self::new(1, false, PaddingPolicy::Reject)
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let threads = matches
            .get_one::<String>("threads")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);

        let parallel = !matches.get_flag("no-parallel");

        let padding = if matches.get_flag("pad-short") {
            PaddingPolicy::ZeroExtend
        } else {
            PaddingPolicy::Reject
        };

        Self::new(threads, parallel, padding)
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1,
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            (true, n) => n,
        }
    }
}
