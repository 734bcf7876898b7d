use super::error::DatError;
use super::layout::StrField;

pub struct DatReader<'a> {
    buf: &'a [u8],
}

impl<'a> DatReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DatError> {
        if self.buf.len() < needed {
            return Err(DatError::Truncated {
                needed,
                actual: self.buf.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DatError> {
        self.buf.get(offset).copied().ok_or(DatError::Truncated {
            needed: offset + 1,
            actual: self.buf.len(),
        })
    }

    pub fn read_char(&self, offset: usize) -> Result<char, DatError> {
        Ok(self.read_u8(offset)? as char)
    }

    pub fn read_i16_le(&self, offset: usize) -> Result<i16, DatError> {
        let bytes = self.read_slice(offset..offset + 2)?;
        Ok(i16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_i32_le(&self, offset: usize) -> Result<i32, DatError> {
        let bytes = self.read_slice(offset..offset + 4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_f32_le(&self, offset: usize) -> Result<f32, DatError> {
        let bytes = self.read_slice(offset..offset + 4)?;
        Ok(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], DatError> {
        self.buf.get(range.clone()).ok_or(DatError::Truncated {
            needed: range.end,
            actual: self.buf.len(),
        })
    }

    /// Reads a length-prefixed string field and trims its padded tail.
    ///
    /// The declared length must stay below the field capacity; bytes beyond
    /// the declared length are never inspected.
    pub fn read_str(&self, field: StrField) -> Result<String, DatError> {
        let declared = self.read_u8(field.offset)? as usize;
        if declared >= field.cap {
            return Err(DatError::FieldTooLong {
                offset: field.offset,
                declared,
                cap: field.cap,
            });
        }
        let start = field.offset + 1;
        let raw = self.read_slice(start..start + declared)?;
        Ok(trim_field_tail(raw))
    }
}

// The instrument pads fields with spaces and embedded NULs inconsistently;
// both count as insignificant trailing noise, interior whitespace stays.
fn is_field_padding(byte: u8) -> bool {
    byte == 0 || byte == 0x0b || byte.is_ascii_whitespace()
}

pub(crate) fn trim_field_tail(raw: &[u8]) -> String {
    let mut end = raw.len();
    while end > 1 && is_field_padding(raw[end - 1]) {
        end -= 1;
    }
    if end == 1 && is_field_padding(raw[0]) {
        return String::new();
    }
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::{DatReader, trim_field_tail};
    use crate::format::error::DatError;
    use crate::format::layout::StrField;

    #[test]
    fn trim_removes_trailing_spaces_and_nuls() {
        assert_eq!(trim_field_tail(b"ABCD  \0 \0"), "ABCD");
        assert_eq!(trim_field_tail(b"NAI-3\0\0\0"), "NAI-3");
    }

    #[test]
    fn trim_preserves_interior_whitespace() {
        assert_eq!(trim_field_tail(b"SOIL SURVEY 9  "), "SOIL SURVEY 9");
        assert_eq!(trim_field_tail(b" A"), " A");
    }

    #[test]
    fn trim_of_padding_only_is_empty() {
        assert_eq!(trim_field_tail(b"    "), "");
        assert_eq!(trim_field_tail(b"\0\0"), "");
        assert_eq!(trim_field_tail(b""), "");
    }

    #[test]
    fn trim_is_idempotent() {
        let once = trim_field_tail(b"BGR 12 \0 ");
        let twice = trim_field_tail(once.as_bytes());
        assert_eq!(once, twice);
    }

    #[test]
    fn read_numerics_little_endian() {
        let mut buf = vec![0u8; 12];
        buf[0..4].copy_from_slice(&123i32.to_le_bytes());
        buf[4..8].copy_from_slice(&1.5f32.to_le_bytes());
        buf[8..10].copy_from_slice(&(-7i16).to_le_bytes());

        let reader = DatReader::new(&buf);
        assert_eq!(reader.read_i32_le(0).unwrap(), 123);
        assert_eq!(reader.read_f32_le(4).unwrap(), 1.5);
        assert_eq!(reader.read_i16_le(8).unwrap(), -7);
    }

    #[test]
    fn read_numeric_past_end_is_truncated() {
        let buf = vec![0u8; 5];
        let reader = DatReader::new(&buf);
        let err = reader.read_i32_le(2).unwrap_err();
        match err {
            DatError::Truncated { needed, actual } => {
                assert_eq!(needed, 6);
                assert_eq!(actual, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn read_str_rejects_declared_length_at_capacity() {
        let mut buf = vec![0u8; 16];
        buf[0] = 5;
        buf[1..6].copy_from_slice(b"ABCDE");

        let reader = DatReader::new(&buf);
        let err = reader
            .read_str(StrField { offset: 0, cap: 5 })
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("too long"));
    }

    #[test]
    fn read_str_rejects_declared_length_past_buffer() {
        let mut buf = vec![0u8; 4];
        buf[0] = 200;

        let reader = DatReader::new(&buf);
        let err = reader
            .read_str(StrField { offset: 0, cap: 255 })
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("record too short"));
    }

    #[test]
    fn read_str_round_trip() {
        let mut buf = vec![0u8; 16];
        buf[0] = 8;
        buf[1..9].copy_from_slice(b"ABCD  \0 ");

        let reader = DatReader::new(&buf);
        let value = reader.read_str(StrField { offset: 0, cap: 13 }).unwrap();
        assert_eq!(value, "ABCD");
    }
}
