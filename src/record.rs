//! Code-definition file
//!
//! Layout (little endian):
//!
//! | field     | type        |
//! |-----------|-------------|
//! | magic     | `BCHCODE\0` |
//! | version   | u8          |
//! | n, b, d   | u32 each    |
//! | r_len     | u32         |
//! | r         | r_len bytes |
//! | g_len     | u32         |
//! | g         | g_len bytes |
//! | crc32     | u32         |
//!
//! `r` and `g` hold one 0/1 byte per coefficient, low degree first. The CRC
//! covers every byte from `version` through the last coefficient of `g`.
//! Loading rebuilds the field from `r` and validates the whole code, but never
//! searches for a polynomial.

use binrw::{BinRead, BinReaderExt, BinWrite};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use crate::code::Code;
use crate::error::{BchError, Result};
use crate::poly::BinaryPoly;

pub const MAGIC_BYTES: &[u8] = b"BCHCODE\0";
pub const RECORD_VERSION: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little, magic = b"BCHCODE\0")]
pub struct CodeRecord {
    pub version: u8,
    pub n: u32,
    pub b: u32,
    pub d: u32,
    pub r_len: u32,
    #[br(count = r_len)]
    pub r: Vec<u8>,
    pub g_len: u32,
    #[br(count = g_len)]
    pub g: Vec<u8>,
    pub crc32: u32,
}

impl CodeRecord {
    /// Capture the defining data of a code; k, t and m are derived on load
    pub fn from_code(code: &Code) -> Self {
        let r = code.field_poly().coeffs().to_vec();
        let g = code.generator().coeffs().to_vec();
        let mut record = CodeRecord {
            version: RECORD_VERSION,
            n: code.n() as u32,
            b: code.b() as u32,
            d: code.d() as u32,
            r_len: r.len() as u32,
            r,
            g_len: g.len() as u32,
            g,
            crc32: 0,
        };
        record.crc32 = record.checksum();
        record
    }

    /// CRC-32 of the record body
    pub fn checksum(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&[self.version]);
        hasher.update(&self.n.to_le_bytes());
        hasher.update(&self.b.to_le_bytes());
        hasher.update(&self.d.to_le_bytes());
        hasher.update(&self.r_len.to_le_bytes());
        hasher.update(&self.r);
        hasher.update(&self.g_len.to_le_bytes());
        hasher.update(&self.g);
        hasher.finalize()
    }

    /// Rebuild and validate the code
    pub fn to_code(&self) -> Result<Code> {
        if self.version != RECORD_VERSION {
            return Err(BchError::InvalidRecord(format!(
                "unsupported record version {}",
                self.version
            )));
        }
        let computed = self.checksum();
        if computed != self.crc32 {
            return Err(BchError::ChecksumMismatch {
                stored: self.crc32,
                computed,
            });
        }
        if let Some(bad) = self.r.iter().chain(self.g.iter()).find(|&&c| c > 1) {
            return Err(BchError::InvalidRecord(format!(
                "coefficient {} is not binary",
                bad
            )));
        }

        Code::from_parts(
            self.n as usize,
            self.b as usize,
            self.d as usize,
            BinaryPoly::from_bits(&self.r),
            BinaryPoly::from_bits(&self.g),
        )
        .map_err(|e| BchError::InvalidRecord(e.to_string()))
    }
}

impl From<&Code> for CodeRecord {
    fn from(code: &Code) -> Self {
        CodeRecord::from_code(code)
    }
}

/// Serialize a code to any seekable writer
pub fn write_code<W: Write + Seek>(writer: &mut W, code: &Code) -> Result<()> {
    CodeRecord::from_code(code).write_le(writer)?;
    Ok(())
}

/// Read and validate a code from any seekable reader
pub fn read_code<R: Read + Seek>(reader: &mut R) -> Result<Code> {
    let record: CodeRecord = reader.read_le()?;
    record.to_code()
}

/// Write the code-definition file at `path`
pub fn save_code<P: AsRef<Path>>(path: P, code: &Code) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_code(&mut writer, code)?;
    writer.flush()?;
    Ok(())
}

/// Load the code-definition file at `path`
pub fn load_code<P: AsRef<Path>>(path: P) -> Result<Code> {
    let mut reader = BufReader::new(File::open(path)?);
    read_code(&mut reader)
}
