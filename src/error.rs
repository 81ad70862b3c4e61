//! Error types for BCH code construction, coding and persistence

use thiserror::Error;

/// Errors that can occur while building, loading or using a BCH code
#[derive(Debug, Error)]
pub enum BchError {
    /// The (n, b, d) combination cannot describe a non-trivial BCH code
    #[error("Invalid code parameters: {0}")]
    InvalidParameters(String),

    /// 2 has no multiplicative order modulo n (n is even)
    #[error("No extension field GF(2^m) contains the n-th roots of unity for n = {n}")]
    NoValidExtension { n: usize },

    /// The extension degree is beyond what the lookup tables support
    #[error("Extension degree m = {m} exceeds the supported maximum of {max}")]
    FieldTooLarge { m: usize, max: usize },

    /// A conjugacy-class product did not reduce to a binary polynomial
    #[error("Minimal polynomial of alpha^{exponent} has a coefficient outside GF(2)")]
    MinimalPolynomialError { exponent: usize },

    /// Message has more coefficients than the code carries
    #[error("Message is too large for this code: degree {degree}, but k = {k}")]
    MessageTooLarge { degree: usize, k: usize },

    /// Received word has more coefficients than the block length
    #[error("Codeword is too large for this code: degree {degree}, but n = {n}")]
    CodewordTooLarge { degree: usize, n: usize },

    /// A field division or elimination pivot was the zero element.
    /// `decode` only solves systems with a nonzero determinant and reports a
    /// fully singular locator system as `Uncorrectable` instead.
    #[error("Division by zero while solving the error-locator system")]
    DivisionByZero,

    /// The received word lies outside the correction radius
    #[error("Uncorrectable error pattern: {0}")]
    Uncorrectable(String),

    /// A block of a block-mode stream failed
    #[error("Block {index}: {source}")]
    Block {
        index: usize,
        #[source]
        source: Box<BchError>,
    },

    /// Polynomial text input could not be parsed
    #[error("Invalid polynomial text: {0}")]
    InvalidPolynomialText(String),

    /// Padded stream does not end in a padding marker
    #[error("Invalid block padding: no marker bit found")]
    InvalidPadding,

    /// Block stream length is not a multiple of the block size
    #[error("Trailing block has {len} coefficients, expected {expected}")]
    ShortBlock { len: usize, expected: usize },

    /// Code-definition record is well formed but inconsistent
    #[error("Invalid code record: {0}")]
    InvalidRecord(String),

    /// Code-definition record checksum does not match its contents
    #[error("Code record checksum mismatch: stored {stored:08x}, computed {computed:08x}")]
    ChecksumMismatch { stored: u32, computed: u32 },

    /// Code-definition record could not be parsed or written
    #[error("Code record format error: {0}")]
    Format(#[from] binrw::Error),

    /// I/O error occurred (catch-all for other I/O errors)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with BchError
pub type Result<T> = std::result::Result<T, BchError>;
