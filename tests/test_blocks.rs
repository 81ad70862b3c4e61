//! Block-mode tests: arbitrary byte streams through pack, encode, corrupt,
//! decode and unpack, sequentially and on a thread pool

use bchrs::bits::{pack_bits, unpack_bits};
use bchrs::reporters::{BlockOperation, BlockReporter, SilentBlockReporter};
use bchrs::{decode_blocks, encode_blocks, generate, BchError, BlockConfig, PaddingPolicy};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Reporter that records corrections for inspection
#[derive(Default)]
struct RecordingReporter {
    corrected: Mutex<Vec<(usize, Vec<usize>)>>,
    completed: Mutex<Option<(BlockOperation, usize, usize)>>,
}

impl BlockReporter for RecordingReporter {
    fn report_start(&self, _operation: BlockOperation, _total: usize) {}
    fn report_block(&self, _index: usize, _total: usize) {}
    fn report_block_corrected(&self, index: usize, positions: &[usize]) {
        self.corrected.lock().unwrap().push((index, positions.to_vec()));
    }
    fn report_block_failed(&self, _index: usize, _error: &str) {}
    fn report_complete(&self, operation: BlockOperation, blocks: usize, corrected_bits: usize) {
        *self.completed.lock().unwrap() = Some((operation, blocks, corrected_bits));
    }
}

#[test]
fn test_byte_stream_round_trip() {
    let code = generate(31, 1, 7).unwrap();
    let reporter = SilentBlockReporter::new();
    let config = BlockConfig::default();
    let payload = b"Binary BCH block stream".to_vec();

    let encoded = encode_blocks(&code, &unpack_bits(&payload), &config, &reporter).unwrap();
    assert_eq!(encoded.len() % code.n(), 0);

    // Packing adds zero slack after the last codeword
    let stream = unpack_bits(&pack_bits(&encoded));
    let decoded = decode_blocks(&code, &stream, &config, &reporter).unwrap();
    assert_eq!(pack_bits(&decoded.bits), payload);
    assert!(decoded.corrections.is_empty());
}

#[test]
fn test_empty_payload_round_trip() {
    let code = generate(15, 1, 5).unwrap();
    let reporter = SilentBlockReporter::new();
    let config = BlockConfig::sequential();

    let encoded = encode_blocks(&code, &[], &config, &reporter).unwrap();
    assert_eq!(encoded.len(), code.n());
    let decoded = decode_blocks(&code, &encoded, &config, &reporter).unwrap();
    assert!(decoded.bits.is_empty());
}

#[test]
fn test_random_errors_within_radius_per_block() {
    let code = generate(63, 1, 11).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let payload: Vec<u8> = (0..600).map(|_| rng.random_range(0..2u8)).collect();
    let config = BlockConfig::new(3, true, PaddingPolicy::Reject);
    let reporter = RecordingReporter::default();

    let mut encoded = encode_blocks(&code, &payload, &config, &reporter).unwrap();
    let blocks = encoded.len() / code.n();
    let mut flipped = 0;
    for block in 0..blocks {
        let errors = rng.random_range(0..=code.t());
        for p in sample(&mut rng, code.n(), errors).into_iter() {
            encoded[block * code.n() + p] ^= 1;
        }
        flipped += errors;
    }

    let decoded = decode_blocks(&code, &encoded, &config, &reporter).unwrap();
    assert_eq!(decoded.bits, payload);
    assert_eq!(decoded.blocks, blocks);
    assert_eq!(decoded.corrected_bits(), flipped);

    let mut reported = reporter.corrected.lock().unwrap().clone();
    reported.sort();
    let expected: Vec<(usize, Vec<usize>)> = decoded
        .corrections
        .iter()
        .map(|c| (c.index, c.positions.clone()))
        .collect();
    assert_eq!(reported, expected);
    assert_eq!(
        *reporter.completed.lock().unwrap(),
        Some((BlockOperation::Decode, blocks, flipped))
    );
}

#[test]
fn test_sequential_and_parallel_agree() {
    let code = generate(15, 1, 5).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let payload: Vec<u8> = (0..1000).map(|_| rng.random_range(0..2u8)).collect();
    let reporter = SilentBlockReporter::new();
    let sequential = BlockConfig::sequential();
    let parallel = BlockConfig::new(0, true, PaddingPolicy::Reject);

    let encoded = encode_blocks(&code, &payload, &sequential, &reporter).unwrap();
    assert_eq!(
        encode_blocks(&code, &payload, &parallel, &reporter).unwrap(),
        encoded
    );

    let mut corrupted = encoded.clone();
    for block in (0..corrupted.len() / 15).step_by(3) {
        corrupted[block * 15 + block % 15] ^= 1;
    }
    let a = decode_blocks(&code, &corrupted, &sequential, &reporter).unwrap();
    let b = decode_blocks(&code, &corrupted, &parallel, &reporter).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.bits, payload);
}

#[test]
fn test_short_trailing_block() {
    let code = generate(7, 1, 3).unwrap();
    let reporter = SilentBlockReporter::new();
    let mut encoded =
        encode_blocks(&code, &[1, 0, 1], &BlockConfig::sequential(), &reporter).unwrap();
    // Cut the only block short inside its message part
    encoded.truncate(5);

    let reject = BlockConfig::sequential();
    assert!(matches!(
        decode_blocks(&code, &encoded, &reject, &reporter),
        Err(BchError::ShortBlock { len: 5, expected: 7 })
    ));

    let extend = BlockConfig::new(1, false, PaddingPolicy::ZeroExtend);
    assert!(decode_blocks(&code, &encoded, &extend, &reporter).is_ok());
}

#[test]
fn test_missing_padding_marker() {
    let code = generate(7, 1, 3).unwrap();
    let reporter = SilentBlockReporter::new();
    let zeros = vec![0u8; 14];
    assert!(matches!(
        decode_blocks(&code, &zeros, &BlockConfig::sequential(), &reporter),
        Err(BchError::InvalidPadding)
    ));
}
