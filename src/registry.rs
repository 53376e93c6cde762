//! Catalog of known CoAP option numbers.
//!
//! A single read-only table maps each registered option number to its
//! display name, value kind, default-value rule, rendering style and the
//! option variant constructed for it. Option construction and option
//! rendering both read from here.

use alloc::borrow::Cow;
use alloc::format;

use crate::codec::ValueKind;

/// Default Max-Age in seconds.
pub const DEFAULT_MAX_AGE: u64 = 60;

/// Registered CoAP option numbers.
///
/// Option values carry the raw number (`u16`), so unregistered numbers are
/// still representable; this enum names the ones with protocol meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum OptionNumber {
    /// Reserved (0)
    Reserved = 0,
    /// Content-Type (1) - media type of the payload
    ContentType = 1,
    /// Max-Age (2) - freshness lifetime in seconds
    MaxAge = 2,
    /// Proxy-Uri (3) - absolute URI for forward proxies
    ProxyUri = 3,
    /// ETag (4) - entity tag
    ETag = 4,
    /// Uri-Host (5) - target host
    UriHost = 5,
    /// Location-Path (6) - one segment of a created resource path
    LocationPath = 6,
    /// Uri-Port (7) - target port
    UriPort = 7,
    /// Location-Query (8) - one argument of a created resource query
    LocationQuery = 8,
    /// Uri-Path (9) - one segment of the target path
    UriPath = 9,
    /// Observe (10) - observation sequence number
    Observe = 10,
    /// Token (11) - request/response matching token
    Token = 11,
    /// Accept (12) - acceptable media type
    Accept = 12,
    /// If-Match (13) - conditional request on an entity tag
    IfMatch = 13,
    /// Fencepost (14) - valueless filler, divisor of all fencepost numbers
    FencePost = 14,
    /// Uri-Query (15) - one argument of the target query
    UriQuery = 15,
    /// Block2 (17) - block-wise transfer of the response payload
    Block2 = 17,
    /// Block1 (19) - block-wise transfer of the request payload
    Block1 = 19,
    /// If-None-Match (21) - conditional request on resource absence
    IfNoneMatch = 21,
}

impl OptionNumber {
    /// Convert a u16 value to an OptionNumber.
    ///
    /// # Parameters
    /// * `value` - The raw option number
    ///
    /// # Returns
    /// * `Some(OptionNumber)` if the number is registered
    /// * `None` otherwise
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0 => Some(OptionNumber::Reserved),
            1 => Some(OptionNumber::ContentType),
            2 => Some(OptionNumber::MaxAge),
            3 => Some(OptionNumber::ProxyUri),
            4 => Some(OptionNumber::ETag),
            5 => Some(OptionNumber::UriHost),
            6 => Some(OptionNumber::LocationPath),
            7 => Some(OptionNumber::UriPort),
            8 => Some(OptionNumber::LocationQuery),
            9 => Some(OptionNumber::UriPath),
            10 => Some(OptionNumber::Observe),
            11 => Some(OptionNumber::Token),
            12 => Some(OptionNumber::Accept),
            13 => Some(OptionNumber::IfMatch),
            14 => Some(OptionNumber::FencePost),
            15 => Some(OptionNumber::UriQuery),
            17 => Some(OptionNumber::Block2),
            19 => Some(OptionNumber::Block1),
            21 => Some(OptionNumber::IfNoneMatch),
            _ => None,
        }
    }

    /// Convert the OptionNumber to its u16 representation.
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Get the registry entry for this number.
    pub fn info(&self) -> &'static OptionInfo {
        // Every variant has a table entry; see test_every_variant_registered
        match lookup(self.as_u16()) {
            Some(info) => info,
            None => &TABLE_RESERVED,
        }
    }
}

impl From<OptionNumber> for u16 {
    fn from(number: OptionNumber) -> Self {
        number.as_u16()
    }
}

/// When an option value counts as the protocol default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultRule {
    /// The option is never at its default.
    Never,
    /// Default when the decoded integer equals the given value.
    IntegerEquals(u64),
    /// Default when the raw value has zero length.
    Empty,
}

/// How an option value is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// Integer resolved to a media type name.
    MediaType,
    /// Integer followed by a seconds unit (`"60 s"`).
    Seconds,
    /// Decimal integer.
    Integer,
    /// Raw text.
    Text,
    /// Uppercase hex bytes separated by spaces.
    Hex,
}

/// Which option type is constructed for a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Plain value option.
    Value,
    /// Block-wise transfer option.
    Block,
}

/// One registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionInfo {
    /// Option number
    pub number: u16,
    /// Display name
    pub name: &'static str,
    /// Value kind used for typed access
    pub kind: ValueKind,
    /// Default-value rule
    pub default: DefaultRule,
    /// Rendering style
    pub render: RenderStyle,
    /// Constructed option variant
    pub variant: Variant,
}

const fn entry(number: u16, name: &'static str, kind: ValueKind, render: RenderStyle) -> OptionInfo {
    OptionInfo {
        number,
        name,
        kind,
        default: DefaultRule::Never,
        render,
        variant: Variant::Value,
    }
}

const fn with_default(info: OptionInfo, default: DefaultRule) -> OptionInfo {
    OptionInfo { default, ..info }
}

const fn block(info: OptionInfo) -> OptionInfo {
    OptionInfo {
        variant: Variant::Block,
        ..info
    }
}

const TABLE_RESERVED: OptionInfo = entry(0, "Reserved", ValueKind::None, RenderStyle::Hex);

// Indexed by option number
static TABLE: [Option<OptionInfo>; 22] = [
    Some(TABLE_RESERVED),
    Some(entry(1, "Content-Type", ValueKind::Integer, RenderStyle::MediaType)),
    Some(with_default(
        entry(2, "Max-Age", ValueKind::Integer, RenderStyle::Seconds),
        DefaultRule::IntegerEquals(DEFAULT_MAX_AGE),
    )),
    Some(entry(3, "Proxy-Uri", ValueKind::Text, RenderStyle::Text)),
    Some(entry(4, "ETag", ValueKind::Text, RenderStyle::Hex)),
    Some(entry(5, "Uri-Host", ValueKind::Text, RenderStyle::Text)),
    Some(entry(6, "Location-Path", ValueKind::Text, RenderStyle::Text)),
    Some(entry(7, "Uri-Port", ValueKind::Integer, RenderStyle::Integer)),
    Some(entry(8, "Location-Query", ValueKind::Text, RenderStyle::Text)),
    Some(entry(9, "Uri-Path", ValueKind::Text, RenderStyle::Text)),
    Some(entry(10, "Observe", ValueKind::Integer, RenderStyle::Integer)),
    Some(with_default(
        entry(11, "Token", ValueKind::Text, RenderStyle::Hex),
        DefaultRule::Empty,
    )),
    Some(entry(12, "Accept", ValueKind::Integer, RenderStyle::Hex)),
    Some(entry(13, "If-Match", ValueKind::Text, RenderStyle::Hex)),
    Some(entry(14, "Fencepost", ValueKind::None, RenderStyle::Hex)),
    Some(entry(15, "Uri-Query", ValueKind::Text, RenderStyle::Text)),
    None,
    Some(block(entry(17, "Block2", ValueKind::Integer, RenderStyle::Integer))),
    None,
    Some(block(entry(19, "Block1", ValueKind::Integer, RenderStyle::Integer))),
    None,
    Some(entry(21, "If-None-Match", ValueKind::Text, RenderStyle::Hex)),
];

/// Get the registry entry for an option number.
///
/// # Returns
/// * `Some(&OptionInfo)` for a registered number
/// * `None` for an unregistered number
pub fn lookup(number: u16) -> Option<&'static OptionInfo> {
    TABLE.get(number as usize).and_then(|info| info.as_ref())
}

/// Display name of an option number.
///
/// Unregistered numbers get a synthesized name.
///
/// # Example
/// ```
/// use coap_option_wire::registry;
///
/// assert_eq!(registry::name(2), "Max-Age");
/// assert_eq!(registry::name(42), "Unknown option [number 42]");
/// ```
pub fn name(number: u16) -> Cow<'static, str> {
    match lookup(number) {
        Some(info) => Cow::Borrowed(info.name),
        None => Cow::Owned(format!("Unknown option [number {}]", number)),
    }
}

/// Value kind of an option number; unregistered numbers have none.
pub fn kind(number: u16) -> ValueKind {
    lookup(number).map_or(ValueKind::None, |info| info.kind)
}

/// Default-value rule of an option number.
pub fn default_rule(number: u16) -> DefaultRule {
    lookup(number).map_or(DefaultRule::Never, |info| info.default)
}

/// Rendering style of an option number; unregistered numbers render as hex.
pub fn render_style(number: u16) -> RenderStyle {
    lookup(number).map_or(RenderStyle::Hex, |info| info.render)
}

/// Option variant constructed for a number.
pub fn variant(number: u16) -> Variant {
    lookup(number).map_or(Variant::Value, |info| info.variant)
}

/// Whether a receiver must understand the option to process the message.
///
/// Odd option numbers are critical.
pub fn is_critical(number: u16) -> bool {
    number & 1 == 1
}

/// Whether a receiver may silently ignore the option.
pub fn is_elective(number: u16) -> bool {
    !is_critical(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [OptionNumber; 19] = [
        OptionNumber::Reserved,
        OptionNumber::ContentType,
        OptionNumber::MaxAge,
        OptionNumber::ProxyUri,
        OptionNumber::ETag,
        OptionNumber::UriHost,
        OptionNumber::LocationPath,
        OptionNumber::UriPort,
        OptionNumber::LocationQuery,
        OptionNumber::UriPath,
        OptionNumber::Observe,
        OptionNumber::Token,
        OptionNumber::Accept,
        OptionNumber::IfMatch,
        OptionNumber::FencePost,
        OptionNumber::UriQuery,
        OptionNumber::Block2,
        OptionNumber::Block1,
        OptionNumber::IfNoneMatch,
    ];

    #[test]
    fn test_every_variant_registered() {
        for number in ALL {
            let info = lookup(number.as_u16()).unwrap();
            assert_eq!(info.number, number.as_u16());
            assert_eq!(number.info(), info);
            assert_eq!(OptionNumber::from_u16(number.as_u16()), Some(number));
        }
    }

    #[test]
    fn test_table_indexed_by_number() {
        for (index, info) in TABLE.iter().enumerate() {
            if let Some(info) = info {
                assert_eq!(info.number as usize, index);
            }
        }
    }

    #[test]
    fn test_option_number_conversion() {
        assert_eq!(OptionNumber::from_u16(16), None);
        assert_eq!(OptionNumber::from_u16(22), None);
        assert_eq!(u16::from(OptionNumber::Block1), 19);
        assert_eq!(OptionNumber::UriQuery.as_u16(), 15);
    }

    #[test]
    fn test_names() {
        assert_eq!(name(1), "Content-Type");
        assert_eq!(name(4), "ETag");
        assert_eq!(name(14), "Fencepost");
        assert_eq!(name(21), "If-None-Match");
        assert_eq!(name(16), "Unknown option [number 16]");
        assert_eq!(name(1000), "Unknown option [number 1000]");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(kind(0), ValueKind::None);
        assert_eq!(kind(1), ValueKind::Integer);
        assert_eq!(kind(3), ValueKind::Text);
        assert_eq!(kind(11), ValueKind::Text);
        assert_eq!(kind(14), ValueKind::None);
        assert_eq!(kind(17), ValueKind::Integer);
        assert_eq!(kind(18), ValueKind::None);
        assert_eq!(kind(u16::MAX), ValueKind::None);
    }

    #[test]
    fn test_default_rules() {
        assert_eq!(default_rule(2), DefaultRule::IntegerEquals(60));
        assert_eq!(default_rule(11), DefaultRule::Empty);
        for number in ALL {
            if number != OptionNumber::MaxAge && number != OptionNumber::Token {
                assert_eq!(default_rule(number.as_u16()), DefaultRule::Never);
            }
        }
        assert_eq!(default_rule(99), DefaultRule::Never);
    }

    #[test]
    fn test_render_styles() {
        assert_eq!(render_style(1), RenderStyle::MediaType);
        assert_eq!(render_style(2), RenderStyle::Seconds);
        assert_eq!(render_style(4), RenderStyle::Hex);
        assert_eq!(render_style(12), RenderStyle::Hex);
        assert_eq!(render_style(7), RenderStyle::Integer);
        assert_eq!(render_style(9), RenderStyle::Text);
        assert_eq!(render_style(19), RenderStyle::Integer);
        assert_eq!(render_style(300), RenderStyle::Hex);
    }

    #[test]
    fn test_block_variants() {
        for number in ALL {
            let expected = match number {
                OptionNumber::Block1 | OptionNumber::Block2 => Variant::Block,
                _ => Variant::Value,
            };
            assert_eq!(variant(number.as_u16()), expected);
        }
        assert_eq!(variant(23), Variant::Value);
    }

    #[test]
    fn test_critical_elective() {
        assert!(is_critical(OptionNumber::UriPath.as_u16()));
        assert!(is_critical(OptionNumber::Token.as_u16()));
        assert!(is_elective(OptionNumber::MaxAge.as_u16()));
        assert!(is_elective(OptionNumber::FencePost.as_u16()));
        assert!(!is_critical(0));
    }
}
