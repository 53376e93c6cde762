use crate::codec::ValueKind;

/// Error type for option value conversion and validation.
///
/// Absent values and unregistered option numbers are not errors: they decode
/// to defaults and to a synthesized name respectively. Everything here points
/// at either a caller logic error or malformed raw bytes.
///
/// # Examples
///
/// ```
/// use coap_option_wire::codec::ValueKind;
/// use coap_option_wire::error::Error;
/// use coap_option_wire::options::CoapOption;
/// use coap_option_wire::registry::OptionNumber;
///
/// // Uri-Port carries an integer, not text
/// let result = CoapOption::from_text(OptionNumber::UriPort, "5683");
/// assert_eq!(
///     result.unwrap_err(),
///     Error::UnsupportedConversion { kind: ValueKind::Integer, requested: ValueKind::Text }
/// );
/// ```
#[derive(PartialEq, Debug, Clone, Copy, Eq)]
pub enum Error {
    /// A typed accessor was used on an option whose value kind does not support it.
    ///
    /// This occurs when:
    /// - Text is read from or written to an integer option (e.g. Uri-Port)
    /// - An integer is read from or written to a text option (e.g. Uri-Path)
    /// - Any typed access is made on an option without a decodable value
    ///   (Reserved, Fencepost, unregistered numbers)
    UnsupportedConversion {
        /// The value kind registered for the option.
        kind: ValueKind,
        /// The value kind the caller asked for.
        requested: ValueKind,
    },

    /// Raw value is too long to decode as an unsigned integer.
    ///
    /// Carries the raw value length in bytes (more than 8).
    IntegerOverflow(usize),

    /// Raw value of a text option is not valid UTF-8.
    InvalidUtf8,

    /// Block size exponent is reserved.
    ///
    /// SZX must be in the range 0..=6; 7 is reserved.
    InvalidBlockSize(u8),

    /// Block number does not fit the 20-bit NUM field.
    BlockNumberOverflow(u64),
}

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnsupportedConversion { kind, requested } => {
                write!(f, "cannot convert {} option value as {}", kind, requested)
            }
            Error::IntegerOverflow(len) => write!(f, "integer value too long: {} bytes", len),
            Error::InvalidUtf8 => write!(f, "invalid UTF-8"),
            Error::InvalidBlockSize(szx) => write!(f, "invalid block size exponent: {}", szx),
            Error::BlockNumberOverflow(num) => write!(f, "block number out of range: {}", num),
        }
    }
}
