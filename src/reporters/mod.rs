//! Progress reporting for block-mode operations
//!
//! The block driver reports through a [`BlockReporter`] instead of printing,
//! so the core stays free of output formatting and global state.

mod console;
mod silent;

pub use console::ConsoleBlockReporter;
pub use silent::SilentBlockReporter;

/// Which block operation is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOperation {
    Encode,
    Decode,
}

impl std::fmt::Display for BlockOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockOperation::Encode => write!(f, "Encoding"),
            BlockOperation::Decode => write!(f, "Decoding"),
        }
    }
}

/// Trait for reporting block-mode progress
///
/// Blocks may be processed in parallel, so calls can arrive out of order and
/// from several threads.
pub trait BlockReporter: Send + Sync {
    /// Report the start of an operation over `total` blocks
    fn report_start(&self, operation: BlockOperation, total: usize);

    /// Report that block `index` (1-based) out of `total` is being processed
    fn report_block(&self, index: usize, total: usize);

    /// Report bit positions corrected in block `index` (1-based)
    fn report_block_corrected(&self, index: usize, positions: &[usize]);

    /// Report an error for block `index` (1-based)
    fn report_block_failed(&self, index: usize, error: &str);

    /// Report completion with the total number of corrected bits
    fn report_complete(&self, operation: BlockOperation, blocks: usize, corrected_bits: usize);
}
