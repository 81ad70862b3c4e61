//! Silent reporter for block operations
//!
//! Provides a no-output implementation for tests, libraries and quiet runs.

use super::{BlockOperation, BlockReporter};

#[derive(Default)]
pub struct SilentBlockReporter;

impl SilentBlockReporter {
    pub fn new() -> Self {
        Self
    }
}

impl BlockReporter for SilentBlockReporter {
    fn report_start(&self, _operation: BlockOperation, _total: usize) {}
    fn report_block(&self, _index: usize, _total: usize) {}
    fn report_block_corrected(&self, _index: usize, _positions: &[usize]) {}
    fn report_block_failed(&self, _index: usize, _error: &str) {}
    fn report_complete(&self, _operation: BlockOperation, _blocks: usize, _corrected_bits: usize) {}
}
