//! Binary BCH codes: construction, systematic encoding and algebraic decoding
//!
//! A code is built from its block length n, the first root exponent b and the
//! designed distance d. The generator polynomial is the product of the
//! distinct minimal polynomials of β^b, ..., β^(b+d-2), where β is a primitive
//! n-th root of unity in GF(2^m). Decoding corrects up to t = (d-1)/2 bit
//! errors per word.
//!
//! ```
//! use bchrs::{generate, BinaryPoly};
//!
//! let code = generate(7, 1, 3).unwrap();
//! let mut word = code.encode(&BinaryPoly::new(vec![1, 0, 1, 1])).unwrap();
//! word.flip(5);
//! assert_eq!(code.decode(&word).unwrap().message, BinaryPoly::new(vec![1, 0, 1, 1]));
//! ```

pub mod args;
pub mod bits;
pub mod block;
pub mod code;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod galois;
pub mod generator;
pub mod matrix;
pub mod padding;
pub mod poly;
pub mod record;
pub mod reporters;

pub use args::parse_args;
pub use block::{decode_blocks, encode_blocks, DecodedBlocks};
pub use code::Code;
pub use config::{BlockConfig, PaddingPolicy};
pub use decoder::{decode, Decoded};
pub use encoder::encode;
pub use error::{BchError, Result};
pub use galois::{FieldElement, GaloisField};
pub use generator::generate;
pub use poly::BinaryPoly;
pub use record::{load_code, save_code};
