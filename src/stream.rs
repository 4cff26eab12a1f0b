//! Persisted container format
//!
//! Self-describing layout, little-endian throughout:
//!
//! | field          | size    | meaning                                  |
//! |----------------|---------|-------------------------------------------|
//! | padding        | 1 byte  | pad bit count of the payload, 0..=7      |
//! | table length   | u32     | byte length of the serialized code table |
//! | table          | var     | [`HuffmanTree::serialize`] output        |
//! | payload length | u64     | byte length of the packed payload        |
//! | payload        | var     | packed encoded bitstream                 |
//!
//! The code table travels inside the file and the padding length sits in the
//! header byte, so a reader needs nothing out-of-band to decompress.

use crate::bits;
use crate::codec::{self, HuffmanEncoder};
use crate::error::{HuffError, Result};
use crate::tree::HuffmanTree;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Write};
use std::path::Path;

/// Upper bound on a serialized code table: a 2-byte entry count plus 256
/// entries of symbol byte, length byte, and at most 32 packed code bytes.
const MAX_TABLE_LEN: usize = 2 + 256 * 34;

/// Write a tree and its encoded bitstream as a container.
pub fn write_stream<W: Write>(writer: &mut W, tree: &HuffmanTree, bits: &[bool]) -> Result<()> {
    let (payload, padding) = bits::pack(bits);
    let table = tree.serialize();

    writer.write_all(&[padding])?;
    writer.write_all(&(table.len() as u32).to_le_bytes())?;
    writer.write_all(&table)?;
    writer.write_all(&(payload.len() as u64).to_le_bytes())?;
    writer.write_all(&payload)?;
    Ok(())
}

/// Read a container back into its tree and encoded bitstream.
///
/// Header length fields are untrusted: the table length is bounded by the
/// largest table [`HuffmanTree::serialize`] can emit, and the payload is
/// read incrementally, so a corrupt length field yields
/// [`HuffError::InvalidData`] instead of an oversized allocation.
pub fn read_stream<R: Read>(reader: &mut R) -> Result<(HuffmanTree, Vec<bool>)> {
    let mut padding = [0u8; 1];
    reader.read_exact(&mut padding)?;

    let mut table_len = [0u8; 4];
    reader.read_exact(&mut table_len)?;
    let table_len = u32::from_le_bytes(table_len) as usize;
    if table_len > MAX_TABLE_LEN {
        return Err(HuffError::invalid_data(format!(
            "code table length {table_len} exceeds maximum {MAX_TABLE_LEN}"
        )));
    }

    let mut table = vec![0u8; table_len];
    reader.read_exact(&mut table)?;
    let tree = HuffmanTree::deserialize(&table)?;

    let mut payload_len = [0u8; 8];
    reader.read_exact(&mut payload_len)?;
    let payload_len = u64::from_le_bytes(payload_len);

    let mut payload = Vec::new();
    reader.take(payload_len).read_to_end(&mut payload)?;
    if payload.len() as u64 != payload_len {
        return Err(HuffError::invalid_data(format!(
            "payload truncated: header claims {payload_len} bytes, got {}",
            payload.len()
        )));
    }

    let bits = bits::unpack(&payload, padding[0])?;
    Ok((tree, bits))
}

/// Compress `data` into an in-memory container.
///
/// Empty input has no frequency map to build a tree from and fails with
/// [`HuffError::EmptyInput`].
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let encoder = HuffmanEncoder::new(data)?;
    let bits = encoder.encode(data)?;

    let mut out = Vec::new();
    write_stream(&mut out, encoder.tree(), &bits)?;
    Ok(out)
}

/// Decompress an in-memory container produced by [`compress`].
pub fn decompress(container: &[u8]) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(container);
    let (tree, bits) = read_stream(&mut cursor)?;
    codec::decode(tree.root(), &bits)
}

/// Compress `data` and write the container to `path`.
///
/// The writer is buffered and explicitly flushed; the handle closes on every
/// exit path, including errors.
pub fn compress_file<P: AsRef<Path>>(data: &[u8], path: P) -> Result<()> {
    let encoder = HuffmanEncoder::new(data)?;
    let bits = encoder.encode(data)?;

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_stream(&mut writer, encoder.tree(), &bits)?;
    writer.flush()?;

    log::info!(
        "compressed {} bytes to {} ({} code table entries)",
        data.len(),
        path.as_ref().display(),
        encoder.tree().codes().len()
    );
    Ok(())
}

/// Read a container from `path` and decompress it.
pub fn decompress_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);
    let (tree, bits) = read_stream(&mut reader)?;
    let data = codec::decode(tree.root(), &bits)?;

    log::info!(
        "decompressed {} bytes from {}",
        data.len(),
        path.as_ref().display()
    );
    Ok(data)
}
