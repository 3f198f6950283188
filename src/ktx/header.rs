//! KTX2 header, level index and key/value data.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::cursor::Cursor;
use crate::diagnostic::DiagnosticLog;
use crate::error::TextureError;
use crate::layout::LevelRegion;

/// `«KTX 20»\r\n\x1A\n`
pub(crate) const IDENTIFIER: [u8; 12] = [
    0xab, b'K', b'T', b'X', b' ', b'2', b'0', 0xbb, b'\r', b'\n', 0x1a, b'\n',
];
/// Identifier, nine u32 fields and the section index.
pub(crate) const HEADER_LEN: usize = 80;
const LEVEL_INDEX_ENTRY_LEN: u64 = 24;

/// One level index entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelIndex {
    pub byte_offset: u64,
    pub byte_length: u64,
    pub uncompressed_byte_length: u64,
}

impl LevelIndex {
    pub(crate) fn region(&self) -> LevelRegion {
        LevelRegion {
            offset: self.byte_offset,
            length: self.byte_length,
        }
    }
}

/// Parsed KTX2 header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KtxHeader {
    pub vk_format: u32,
    pub type_size: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub pixel_depth: u32,
    pub layer_count: u32,
    pub face_count: u32,
    pub level_count: u32,
    pub supercompression_scheme: u32,
    pub dfd_byte_offset: u32,
    pub dfd_byte_length: u32,
    pub kvd_byte_offset: u32,
    pub kvd_byte_length: u32,
    pub sgd_byte_offset: u64,
    pub sgd_byte_length: u64,
    /// One entry per mip level, largest first.
    pub levels: Vec<LevelIndex>,
    /// Key/value pairs in file order, values without a trailing NUL.
    pub key_values: Vec<(String, Vec<u8>)>,
}

impl KtxHeader {
    /// Value of a metadata key.
    pub fn value(&self, key: &str) -> Option<&[u8]> {
        self.key_values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// Value of a metadata key, if it's valid UTF-8.
    pub fn value_str(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(|v| core::str::from_utf8(v).ok())
    }
}

/// Parse the KTX2 header, level index and key/value data.
///
/// Malformed key/value entries are skipped with a warning.
pub fn parse_header(data: &[u8], log: &mut DiagnosticLog) -> Result<KtxHeader, TextureError> {
    if data.len() < HEADER_LEN {
        return Err(TextureError::HeaderTooShort {
            prefix: "",
            expected: HEADER_LEN,
            actual: data.len(),
        });
    }
    if data[..IDENTIFIER.len()] != IDENTIFIER {
        return Err(TextureError::InvalidSignature(
            data[..IDENTIFIER.len()].escape_ascii().to_string(),
        ));
    }

    let mut cursor = Cursor::at(data, IDENTIFIER.len())?;
    let mut header = KtxHeader {
        vk_format: cursor.get_u32_le()?,
        type_size: cursor.get_u32_le()?,
        pixel_width: cursor.get_u32_le()?,
        pixel_height: cursor.get_u32_le()?,
        pixel_depth: cursor.get_u32_le()?,
        layer_count: cursor.get_u32_le()?,
        face_count: cursor.get_u32_le()?,
        level_count: cursor.get_u32_le()?,
        supercompression_scheme: cursor.get_u32_le()?,
        dfd_byte_offset: cursor.get_u32_le()?,
        dfd_byte_length: cursor.get_u32_le()?,
        kvd_byte_offset: cursor.get_u32_le()?,
        kvd_byte_length: cursor.get_u32_le()?,
        sgd_byte_offset: cursor.get_u64_le()?,
        sgd_byte_length: cursor.get_u64_le()?,
        levels: Vec::new(),
        key_values: Vec::new(),
    };

    let level_count = header.level_count.max(1);
    let index_end = HEADER_LEN as u64 + u64::from(level_count) * LEVEL_INDEX_ENTRY_LEN;
    if index_end > data.len() as u64 {
        return Err(TextureError::SectionOutOfBounds {
            what: "level index too short",
            expected: index_end,
            actual: data.len(),
        });
    }
    header.levels = (0..level_count)
        .map(|_| {
            Ok(LevelIndex {
                byte_offset: cursor.get_u64_le()?,
                byte_length: cursor.get_u64_le()?,
                uncompressed_byte_length: cursor.get_u64_le()?,
            })
        })
        .collect::<Result<_, TextureError>>()?;

    if header.kvd_byte_length > 0 {
        let start = u64::from(header.kvd_byte_offset);
        let end = start + u64::from(header.kvd_byte_length);
        if end > data.len() as u64 {
            return Err(TextureError::SectionOutOfBounds {
                what: "key/value data out of bounds",
                expected: end,
                actual: data.len(),
            });
        }
        header.key_values = parse_key_values(&data[start as usize..end as usize], log);
    }
    Ok(header)
}

/// Entries are `u32 length` then `key\0value`, each padded to four bytes.
fn parse_key_values(data: &[u8], log: &mut DiagnosticLog) -> Vec<(String, Vec<u8>)> {
    let mut entries = Vec::new();
    let mut cursor = Cursor::new(data);
    while !cursor.eof() {
        let entry = cursor
            .get_u32_le()
            .and_then(|len| cursor.read_slice(len as usize));
        let Ok(entry) = entry else {
            log.warn(format!(
                "key/value entry at offset {} out of bounds, ignoring the rest",
                cursor.position()
            ));
            break;
        };
        let padding = entry.len().next_multiple_of(4) - entry.len();
        if cursor.skip(padding).is_err() {
            // Unpadded last entry.
            let end = data.len();
            let _ = cursor.set_position(end);
        }

        let Some(split) = entry.iter().position(|&b| b == 0) else {
            log.warn(String::from("key/value entry without a key terminator, ignoring"));
            continue;
        };
        let Ok(key) = core::str::from_utf8(&entry[..split]) else {
            log.warn(String::from("key/value entry with a non-UTF-8 key, ignoring"));
            continue;
        };
        let mut value = &entry[split + 1..];
        if let [rest @ .., 0] = value {
            value = rest;
        }
        entries.push((key.to_string(), value.to_vec()));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &[u8]) -> Vec<u8> {
        let mut body = key.as_bytes().to_vec();
        body.push(0);
        body.extend_from_slice(value);
        let mut out = (body.len() as u32).to_le_bytes().to_vec();
        out.extend_from_slice(&body);
        while out.len() % 4 != 0 {
            out.push(0);
        }
        out
    }

    #[test]
    fn key_values() {
        let mut data = entry("KTXorientation", b"rd\0");
        data.extend(entry("KTXswizzle", b"bgra\0"));
        data.extend(entry("KTXcubemapIncomplete", &[0x15]));
        let mut log = DiagnosticLog::default();
        let parsed = parse_key_values(&data, &mut log);
        assert_eq!(
            parsed,
            [
                ("KTXorientation".to_string(), b"rd".to_vec()),
                ("KTXswizzle".to_string(), b"bgra".to_vec()),
                ("KTXcubemapIncomplete".to_string(), [0x15].to_vec()),
            ]
        );
        assert!(log.entries().is_empty());
    }

    #[test]
    fn truncated_entry_warns() {
        let mut data = entry("KTXorientation", b"rd\0");
        data.extend_from_slice(&100u32.to_le_bytes());
        data.extend_from_slice(b"KTX");
        let mut log = DiagnosticLog::default();
        let parsed = parse_key_values(&data, &mut log);
        assert_eq!(parsed.len(), 1);
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn missing_terminator_warns() {
        let mut data = 4u32.to_le_bytes().to_vec();
        data.extend_from_slice(b"abcd");
        data.extend(entry("KTXswizzle", b"rgba\0"));
        let mut log = DiagnosticLog::default();
        let parsed = parse_key_values(&data, &mut log);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].0, "KTXswizzle");
        assert_eq!(log.entries().len(), 1);
    }
}
