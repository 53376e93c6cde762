//! Converters between raw option bytes and typed values.
//!
//! Each option number maps to one [`ValueKind`], and each kind to one
//! stateless [`ValueCodec`]. The converters are process-wide statics and
//! never change after start-up, so they can be shared freely.

use alloc::string::String;
use alloc::vec::Vec;
use byteorder::{ByteOrder, NetworkEndian};
use core::fmt;

use crate::error::{Error, Result};
use crate::field;

/// Semantic kind of an option value.
///
/// Selects the converter used for typed access to the raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// No decodable value (Reserved, Fencepost, unregistered numbers).
    None,
    /// Unsigned integer, minimal-length big-endian.
    Integer,
    /// UTF-8 text.
    Text,
}

impl ValueKind {
    /// Get the converter for this kind.
    ///
    /// # Returns
    /// A shared reference to the process-wide converter
    pub fn codec(&self) -> &'static dyn ValueCodec {
        match self {
            ValueKind::None => &OPAQUE,
            ValueKind::Integer => &INTEGER,
            ValueKind::Text => &TEXT,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::None => write!(f, "opaque"),
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}

/// Conversion between raw option bytes and one typed value.
///
/// Raw values are passed as `Option<&[u8]>`: `None` is an absent value,
/// which is distinct from a present zero-length value. Conversions a codec
/// does not support return [`Error::UnsupportedConversion`].
pub trait ValueCodec: Sync {
    /// Kind of value this codec converts.
    fn kind(&self) -> ValueKind;

    /// Decode raw bytes as an unsigned integer.
    fn decode_integer(&self, _raw: Option<&[u8]>) -> Result<u64> {
        Err(self.unsupported(ValueKind::Integer))
    }

    /// Encode an unsigned integer into raw bytes.
    fn encode_integer(&self, _value: u64) -> Result<Vec<u8>> {
        Err(self.unsupported(ValueKind::Integer))
    }

    /// Decode raw bytes as text. An absent value decodes to `None`.
    fn decode_text(&self, _raw: Option<&[u8]>) -> Result<Option<String>> {
        Err(self.unsupported(ValueKind::Text))
    }

    /// Encode text into raw bytes.
    fn encode_text(&self, _text: &str) -> Result<Vec<u8>> {
        Err(self.unsupported(ValueKind::Text))
    }

    /// Error for a conversion this codec does not support.
    fn unsupported(&self, requested: ValueKind) -> Error {
        Error::UnsupportedConversion {
            kind: self.kind(),
            requested,
        }
    }
}

/// Minimal-length big-endian unsigned integer converter.
///
/// Zero encodes as a single zero byte; any other value drops its leading
/// zero bytes.
///
/// # Example
/// ```
/// use coap_option_wire::codec::{IntegerCodec, ValueCodec};
///
/// assert_eq!(IntegerCodec.encode_integer(0).unwrap(), [0x00]);
/// assert_eq!(IntegerCodec.encode_integer(0x0100).unwrap(), [0x01, 0x00]);
/// assert_eq!(IntegerCodec.decode_integer(Some(&[0x01, 0x00])).unwrap(), 256);
/// assert_eq!(IntegerCodec.decode_integer(None).unwrap(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerCodec;

/// UTF-8 text converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

/// Converter for values with no typed semantics. Every conversion fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpaqueCodec;

static INTEGER: IntegerCodec = IntegerCodec;
static TEXT: TextCodec = TextCodec;
static OPAQUE: OpaqueCodec = OpaqueCodec;

impl ValueCodec for IntegerCodec {
    fn kind(&self) -> ValueKind {
        ValueKind::Integer
    }

    fn decode_integer(&self, raw: Option<&[u8]>) -> Result<u64> {
        match raw {
            None => Ok(0),
            Some([]) => Ok(0),
            Some(bytes) if bytes.len() > field::integer::MAX_LEN => {
                Err(Error::IntegerOverflow(bytes.len()))
            }
            Some(bytes) => Ok(NetworkEndian::read_uint(bytes, bytes.len())),
        }
    }

    fn encode_integer(&self, value: u64) -> Result<Vec<u8>> {
        let mut buffer = [0u8; field::integer::MAX_LEN];
        NetworkEndian::write_u64(&mut buffer, value);

        // Zero keeps its last byte
        let skip = (value.leading_zeros() / 8) as usize;
        let start = skip.min(field::integer::MAX_LEN - 1);
        Ok(buffer[start..].to_vec())
    }
}

impl ValueCodec for TextCodec {
    fn kind(&self) -> ValueKind {
        ValueKind::Text
    }

    fn decode_text(&self, raw: Option<&[u8]>) -> Result<Option<String>> {
        match raw {
            None => Ok(None),
            Some(bytes) => core::str::from_utf8(bytes)
                .map(|text| Some(String::from(text)))
                .map_err(|_| Error::InvalidUtf8),
        }
    }

    fn encode_text(&self, text: &str) -> Result<Vec<u8>> {
        Ok(text.as_bytes().to_vec())
    }
}

impl ValueCodec for OpaqueCodec {
    fn kind(&self) -> ValueKind {
        ValueKind::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_encode_minimal() {
        let codec = ValueKind::Integer.codec();
        assert_eq!(codec.encode_integer(0).unwrap(), vec![0x00]);
        assert_eq!(codec.encode_integer(1).unwrap(), vec![0x01]);
        assert_eq!(codec.encode_integer(0xFF).unwrap(), vec![0xFF]);
        assert_eq!(codec.encode_integer(0x100).unwrap(), vec![0x01, 0x00]);
        assert_eq!(codec.encode_integer(5683).unwrap(), vec![0x16, 0x33]);
        assert_eq!(codec.encode_integer(0x00FF_0000).unwrap(), vec![0xFF, 0x00, 0x00]);
        assert_eq!(codec.encode_integer(u64::MAX).unwrap(), vec![0xFF; 8]);
    }

    #[test]
    fn test_integer_encode_never_leading_zero() {
        for shift in 0..64 {
            let value = 1u64 << shift;
            let encoded = IntegerCodec.encode_integer(value).unwrap();
            assert_ne!(encoded[0], 0x00, "value {:#x}", value);
            assert_eq!(encoded.len(), shift / 8 + 1);
            assert_eq!(IntegerCodec.decode_integer(Some(encoded.as_slice())).unwrap(), value);
        }
    }

    #[test]
    fn test_integer_decode() {
        assert_eq!(IntegerCodec.decode_integer(None).unwrap(), 0);
        assert_eq!(IntegerCodec.decode_integer(Some(&[])).unwrap(), 0);
        assert_eq!(IntegerCodec.decode_integer(Some(&[0x00])).unwrap(), 0);
        assert_eq!(IntegerCodec.decode_integer(Some(&[0x3C])).unwrap(), 60);
        // Non-canonical leading zeros still decode
        assert_eq!(IntegerCodec.decode_integer(Some(&[0x00, 0x00, 0x3C])).unwrap(), 60);
        assert_eq!(
            IntegerCodec.decode_integer(Some(&[0x01; 9])),
            Err(Error::IntegerOverflow(9))
        );
    }

    #[test]
    fn test_integer_rejects_text() {
        assert_eq!(
            IntegerCodec.encode_text("abc"),
            Err(Error::UnsupportedConversion {
                kind: ValueKind::Integer,
                requested: ValueKind::Text
            })
        );
        assert!(IntegerCodec.decode_text(Some(b"abc")).is_err());
    }

    #[test]
    fn test_text_codec() {
        let codec = ValueKind::Text.codec();
        assert_eq!(codec.encode_text("sensors").unwrap(), b"sensors".to_vec());
        assert_eq!(
            codec.decode_text(Some("température".as_bytes())).unwrap(),
            Some(String::from("température"))
        );
        assert_eq!(codec.decode_text(Some(&[])).unwrap(), Some(String::new()));
        assert_eq!(codec.decode_text(None).unwrap(), None);
        assert_eq!(codec.decode_text(Some(&[0xFF, 0xFE])), Err(Error::InvalidUtf8));
        assert!(codec.encode_integer(1).is_err());
    }

    #[test]
    fn test_opaque_codec_rejects_everything() {
        let codec = ValueKind::None.codec();
        assert_eq!(codec.kind(), ValueKind::None);
        assert!(codec.decode_integer(None).is_err());
        assert!(codec.encode_integer(0).is_err());
        assert!(codec.decode_text(None).is_err());
        assert!(codec.encode_text("").is_err());
    }

    #[test]
    fn test_codec_selection() {
        assert_eq!(ValueKind::None.codec().kind(), ValueKind::None);
        assert_eq!(ValueKind::Integer.codec().kind(), ValueKind::Integer);
        assert_eq!(ValueKind::Text.codec().kind(), ValueKind::Text);
    }
}
