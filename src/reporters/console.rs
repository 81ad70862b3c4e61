//! Console reporter for block operations
//!
//! Writes to stderr: stdout carries the encoded or decoded data.

use super::{BlockOperation, BlockReporter};

/// Show per-block correction details only for streams up to this many blocks
const MAX_DETAILED_BLOCKS: usize = 64;

#[derive(Default)]
pub struct ConsoleBlockReporter {
    quiet: bool,
}

impl ConsoleBlockReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl BlockReporter for ConsoleBlockReporter {
    fn report_start(&self, operation: BlockOperation, total: usize) {
        if !self.quiet {
            eprintln!("{} {} block(s)...", operation, total);
        }
    }

    fn report_block(&self, index: usize, total: usize) {
        if !self.quiet && total <= MAX_DETAILED_BLOCKS {
            eprintln!("Processing block {} out of {}", index, total);
        }
    }

    fn report_block_corrected(&self, index: usize, positions: &[usize]) {
        if !self.quiet {
            eprintln!(
                "Block {}: repaired {} bit(s) at {:?}",
                index,
                positions.len(),
                positions
            );
        }
    }

    fn report_block_failed(&self, index: usize, error: &str) {
        eprintln!("Block {}: {}", index, error);
    }

    fn report_complete(&self, operation: BlockOperation, blocks: usize, corrected_bits: usize) {
        if self.quiet {
            return;
        }
        match operation {
            BlockOperation::Encode => eprintln!("Encoded {} block(s)", blocks),
            BlockOperation::Decode => eprintln!(
                "Decoded {} block(s), repaired {} bit(s)",
                blocks, corrected_bits
            ),
        }
    }
}
