//! Block-mode encoding and decoding of arbitrary-length bit streams
//!
//! A payload is padded to a multiple of k (see [`crate::padding`]) and each
//! k-bit slice is encoded into an n-bit codeword. Decoding splits the received
//! stream back into n-bit words, decodes each one and strips the padding.
//!
//! Packing bits into bytes may leave up to seven zero bits after the last
//! codeword. A trailing partial block made only of zeros is treated as that
//! slack and dropped; one that carries data is handled per [`PaddingPolicy`].
//!
//! Blocks are independent, so they are processed on a rayon pool unless the
//! configuration asks for sequential processing. Both paths give identical
//! output.

use log::{debug, warn};
use rayon::prelude::*;

use crate::code::Code;
use crate::config::{BlockConfig, PaddingPolicy};
use crate::error::{BchError, Result};
use crate::padding;
use crate::poly::BinaryPoly;
use crate::reporters::{BlockOperation, BlockReporter};

/// Corrections applied to one block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCorrection {
    /// 1-based block index
    pub index: usize,
    /// Coefficient degrees flipped inside the block
    pub positions: Vec<usize>,
}

/// Result of decoding a block stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBlocks {
    /// Recovered payload with padding removed
    pub bits: Vec<u8>,
    /// Number of codewords decoded
    pub blocks: usize,
    /// Blocks that needed correction, in stream order
    pub corrections: Vec<BlockCorrection>,
}

impl DecodedBlocks {
    pub fn corrected_bits(&self) -> usize {
        self.corrections.iter().map(|c| c.positions.len()).sum()
    }
}

/// Run `f` over block indices `0..count`, in parallel when configured
fn map_blocks<T, F>(config: &BlockConfig, count: usize, f: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> Result<T> + Sync + Send,
{
    if !config.parallel || count < 2 {
        return (0..count).map(&f).collect();
    }

    let threads = config.effective_threads();
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => {
            debug!("Processing {} blocks on {} threads", count, threads);
            pool.install(|| (0..count).into_par_iter().map(&f).collect())
        }
        Err(e) => {
            warn!("Failed to build thread pool ({}), processing sequentially", e);
            (0..count).map(&f).collect()
        }
    }
}

fn block_error(index: usize, source: BchError) -> BchError {
    BchError::Block {
        index,
        source: Box::new(source),
    }
}

/// Pad `bits` and encode them as consecutive n-bit codewords
pub fn encode_blocks<R>(
    code: &Code,
    bits: &[u8],
    config: &BlockConfig,
    reporter: &R,
) -> Result<Vec<u8>>
where
    R: BlockReporter + ?Sized,
{
    let k = code.k();
    let padded = padding::pad(bits, k);
    let total = padded.len() / k;

    debug!(
        "Encoding {} payload bits as {} block(s) of {} -> {}",
        bits.len(),
        total,
        k,
        code.n()
    );
    reporter.report_start(BlockOperation::Encode, total);

    let codewords = map_blocks(config, total, |i| {
        reporter.report_block(i + 1, total);
        code.encode_bits(&padded[i * k..(i + 1) * k])
            .map_err(|e| block_error(i + 1, e))
    })?;

    reporter.report_complete(BlockOperation::Encode, total, 0);
    Ok(codewords.concat())
}

/// Split a received stream into n-bit words, applying the short-block policy
pub fn split_blocks(bits: &[u8], n: usize, policy: PaddingPolicy) -> Result<Vec<Vec<u8>>> {
    let mut words: Vec<Vec<u8>> = bits.chunks_exact(n).map(<[u8]>::to_vec).collect();
    let tail = &bits[words.len() * n..];

    if tail.iter().all(|&b| b == 0) {
        if !tail.is_empty() {
            debug!("Dropping {} bits of zero slack after the last block", tail.len());
        }
        return Ok(words);
    }

    match policy {
        PaddingPolicy::Reject => Err(BchError::ShortBlock {
            len: tail.len(),
            expected: n,
        }),
        PaddingPolicy::ZeroExtend => {
            warn!(
                "Trailing block has {} of {} bits, zero-extending",
                tail.len(),
                n
            );
            let mut word = tail.to_vec();
            word.resize(n, 0);
            words.push(word);
            Ok(words)
        }
    }
}

/// Decode a block stream produced by [`encode_blocks`]
pub fn decode_blocks<R>(
    code: &Code,
    bits: &[u8],
    config: &BlockConfig,
    reporter: &R,
) -> Result<DecodedBlocks>
where
    R: BlockReporter + ?Sized,
{
    let words = split_blocks(bits, code.n(), config.padding)?;
    let total = words.len();
    reporter.report_start(BlockOperation::Decode, total);

    let decoded = map_blocks(config, total, |i| {
        reporter.report_block(i + 1, total);
        match code.decode(&BinaryPoly::from_bits(&words[i])) {
            Ok(decoded) => {
                if decoded.had_errors() {
                    reporter.report_block_corrected(i + 1, &decoded.corrected);
                }
                Ok(decoded)
            }
            Err(e) => {
                reporter.report_block_failed(i + 1, &e.to_string());
                Err(block_error(i + 1, e))
            }
        }
    })?;

    let k = code.k();
    let mut message_bits = Vec::with_capacity(total * k);
    let mut corrections = Vec::new();
    for (i, block) in decoded.into_iter().enumerate() {
        message_bits.extend(block.message.to_bits(k));
        if !block.corrected.is_empty() {
            corrections.push(BlockCorrection {
                index: i + 1,
                positions: block.corrected,
            });
        }
    }

    let result = DecodedBlocks {
        bits: padding::unpad(&message_bits)?,
        blocks: total,
        corrections,
    };
    reporter.report_complete(BlockOperation::Decode, total, result.corrected_bits());
    Ok(result)
}
