//! Integration tests for code generation, encoding and decoding
//!
//! Covers the reference scenarios for the (7,1,3) and (15,1,5) codes, the
//! correction radius on larger codes with seeded random error patterns, and
//! behavior beyond the radius.

use bchrs::{decode, encode, generate, BchError, BinaryPoly, Code};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

fn random_message(code: &Code, rng: &mut StdRng) -> BinaryPoly {
    BinaryPoly::new((0..code.k()).map(|_| rng.random_range(0..2u8)).collect())
}

fn flip_random(word: &BinaryPoly, n: usize, errors: usize, rng: &mut StdRng) -> (BinaryPoly, Vec<usize>) {
    let mut corrupted = word.clone();
    let mut positions = sample(rng, n, errors).into_vec();
    for &p in &positions {
        corrupted.flip(p);
    }
    positions.sort_unstable();
    (corrupted, positions)
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn test_hamming_7_1_3() {
    let code = generate(7, 1, 3).unwrap();
    assert_eq!(code.m(), 3);
    assert_eq!(code.k(), 4);
    assert_eq!(code.t(), 1);
    assert_eq!(code.generator().degree(), Some(3));
    assert_eq!(code.field_poly(), &BinaryPoly::from_u32(0b1011));

    let message = BinaryPoly::new(vec![1, 0, 1, 1]);
    let mut received = encode(&code, &message).unwrap();
    received.flip(0);

    let decoded = decode(&code, &received).unwrap();
    assert_eq!(decoded.message, message);
    assert_eq!(decoded.corrected, vec![0]);
    assert_eq!(code.decode_bits(&received.to_bits(7)).unwrap(), vec![1, 0, 1, 1]);
}

#[test]
fn test_15_1_5_zero_message_any_two_flips() {
    let code = generate(15, 1, 5).unwrap();
    assert_eq!(code.t(), 2);
    let zero = encode(&code, &BinaryPoly::zero()).unwrap();
    assert!(zero.is_zero());

    for i in 0..15 {
        for j in (i + 1)..15 {
            let mut received = zero.clone();
            received.flip(i);
            received.flip(j);
            let decoded = decode(&code, &received).unwrap();
            assert!(decoded.message.is_zero(), "flips at {} and {}", i, j);
            assert_eq!(decoded.corrected, vec![i, j]);
        }
    }
}

#[test]
fn test_15_1_5_message_too_large() {
    let code = generate(15, 1, 5).unwrap();
    let message = BinaryPoly::monomial(code.k());
    assert!(matches!(
        encode(&code, &message),
        Err(BchError::MessageTooLarge { degree: 7, k: 7 })
    ));
}

#[test]
fn test_codeword_too_large() {
    let code = generate(15, 1, 5).unwrap();
    assert!(matches!(
        decode(&code, &BinaryPoly::monomial(15)),
        Err(BchError::CodewordTooLarge { degree: 15, n: 15 })
    ));
}

// =============================================================================
// Parameter validation
// =============================================================================

#[test]
fn test_invalid_parameters() {
    assert!(matches!(generate(2, 1, 3), Err(BchError::InvalidParameters(_))));
    assert!(matches!(generate(7, 0, 3), Err(BchError::InvalidParameters(_))));
    assert!(matches!(generate(7, 1, 0), Err(BchError::InvalidParameters(_))));
    assert!(matches!(generate(14, 1, 3), Err(BchError::NoValidExtension { n: 14 })));
}

#[test]
fn test_root_exponent_overflow_rejected() {
    assert!(matches!(
        generate(7, usize::MAX, 3),
        Err(BchError::InvalidParameters(_))
    ));
    assert!(matches!(
        generate(7, 3, usize::MAX),
        Err(BchError::InvalidParameters(_))
    ));
}

#[test]
fn test_distance_beyond_length_rejected_quickly() {
    let start = std::time::Instant::now();
    assert!(matches!(
        generate(7, 1, 20_000_000),
        Err(BchError::InvalidParameters(_))
    ));
    assert!(matches!(generate(7, 1, 8), Err(BchError::InvalidParameters(_))));
    assert!(start.elapsed() < std::time::Duration::from_secs(1));

    // d = n still leaves the repetition code
    let repetition = generate(7, 1, 7).unwrap();
    assert_eq!(repetition.k(), 1);
    assert_eq!(repetition.t(), 3);
}

#[test]
fn test_large_first_root_exponent() {
    // usize::MAX - 10 = 5 (mod 9), so the roots are β^5 and β^6 with β = α^7
    let code = generate(9, usize::MAX - 10, 3).unwrap();
    assert_eq!(code.k(), 1);
    let message = BinaryPoly::one();
    let codeword = encode(&code, &message).unwrap();
    for i in 0..9 {
        let mut received = codeword.clone();
        received.flip(i);
        assert_eq!(decode(&code, &received).unwrap().message, message);
    }
}

#[test]
fn test_singular_locator_system_is_uncorrectable() {
    // t = 0: a detected error has no locator system to solve
    let code = generate(15, 1, 2).unwrap();
    let mut received = encode(&code, &BinaryPoly::one()).unwrap();
    received.flip(4);
    assert!(matches!(
        decode(&code, &received),
        Err(BchError::Uncorrectable(_))
    ));
}

#[test]
fn test_field_too_large() {
    // ord_131071(2) = 17
    assert!(matches!(
        generate(131071, 1, 3),
        Err(BchError::FieldTooLarge { m: 17, .. })
    ));
}

#[test]
fn test_generate_is_deterministic() {
    for &(n, b, d) in &[(7, 1, 3), (15, 1, 7), (31, 1, 5), (63, 1, 11), (9, 1, 3)] {
        let first = generate(n, b, d).unwrap();
        let second = generate(n, b, d).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.generator(), second.generator());
        assert_eq!(first.field_poly(), second.field_poly());
    }
}

// =============================================================================
// Correction radius
// =============================================================================

#[test]
fn test_correction_radius_random_patterns() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for &(n, b, d) in &[(15, 1, 5), (31, 1, 7), (63, 1, 11), (15, 2, 5), (21, 1, 5)] {
        let code = generate(n, b, d).unwrap();
        for _ in 0..40 {
            let message = random_message(&code, &mut rng);
            let codeword = encode(&code, &message).unwrap();
            assert!((&codeword % code.generator()).is_zero());

            let errors = rng.random_range(0..=code.t());
            let (received, positions) = flip_random(&codeword, n, errors, &mut rng);
            let decoded = decode(&code, &received)
                .unwrap_or_else(|e| panic!("({},{},{}) with {} errors: {}", n, b, d, errors, e));
            assert_eq!(decoded.message, message);
            assert_eq!(decoded.codeword, codeword);
            assert_eq!(decoded.corrected, positions);
        }
    }
}

#[test]
fn test_255_code_corrects_eight_errors() {
    let code = generate(255, 1, 17).unwrap();
    assert_eq!(code.t(), 8);
    assert_eq!(code.m(), 8);
    let mut rng = StdRng::seed_from_u64(255);
    for _ in 0..5 {
        let message = random_message(&code, &mut rng);
        let codeword = encode(&code, &message).unwrap();
        let (received, _) = flip_random(&codeword, 255, 8, &mut rng);
        assert_eq!(decode(&code, &received).unwrap().message, message);
    }
}

#[test]
fn test_non_primitive_length() {
    // n = 9 lives in GF(64) with β = α^7
    let code = generate(9, 1, 3).unwrap();
    assert_eq!(code.m(), 6);
    assert_eq!(code.k(), 3);
    let message = BinaryPoly::new(vec![1, 1, 0]);
    let codeword = encode(&code, &message).unwrap();
    for i in 0..9 {
        let mut received = codeword.clone();
        received.flip(i);
        assert_eq!(decode(&code, &received).unwrap().message, message);
    }
}

// =============================================================================
// Beyond the radius
// =============================================================================

#[test]
fn test_beyond_radius_never_panics() {
    let mut rng = StdRng::seed_from_u64(7);
    let code = generate(31, 1, 7).unwrap();
    for _ in 0..200 {
        let message = random_message(&code, &mut rng);
        let codeword = encode(&code, &message).unwrap();
        let errors = rng.random_range(code.t() + 1..=code.n());
        let (received, _) = flip_random(&codeword, code.n(), errors, &mut rng);
        match decode(&code, &received) {
            Ok(decoded) => assert!(decoded.corrected.len() <= code.t()),
            Err(BchError::Uncorrectable(_)) => {}
            Err(other) => panic!("unexpected error: {}", other),
        }
    }
}
