//! CoAP option values.
//!
//! An option is an option number plus a raw value in network byte order.
//! The raw value may be absent, which is distinct from a present value of
//! zero length. Typed access goes through the converter registered for the
//! option number (see [`crate::codec`] and [`crate::registry`]).
//!
//! Options are created through [`CoapOption`], which picks the variant for
//! the option number: Block1 and Block2 become [`BlockOption`], everything
//! else a plain [`ValueOption`].

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Write;
use core::hash::{Hash, Hasher};

use crate::codec::{ValueCodec, ValueKind};
use crate::error::{Error, Result};
use crate::field;
use crate::media_type;
use crate::registry::{self, DefaultRule, RenderStyle, Variant};

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// A plain option: option number and raw value.
///
/// Two options are equal when their numbers are equal and either both values
/// are absent or both are present with identical bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueOption {
    number: u16,
    raw: Option<Vec<u8>>,
}

impl ValueOption {
    pub(crate) fn new(number: u16) -> Self {
        ValueOption { number, raw: None }
    }

    /// Get the option number.
    pub fn number(&self) -> u16 {
        self.number
    }

    /// Get the display name of the option number.
    pub fn name(&self) -> Cow<'static, str> {
        registry::name(self.number)
    }

    /// Get the value kind registered for the option number.
    pub fn kind(&self) -> ValueKind {
        registry::kind(self.number)
    }

    fn codec(&self) -> &'static dyn ValueCodec {
        self.kind().codec()
    }

    /// Get the raw value.
    ///
    /// # Returns
    /// * `None` if no value was ever set
    /// * `Some(bytes)` in network byte order otherwise
    pub fn raw(&self) -> Option<&[u8]> {
        self.raw.as_deref()
    }

    /// Replace the raw value.
    ///
    /// # Parameters
    /// * `raw` - The new value in network byte order
    pub fn set_raw(&mut self, raw: impl Into<Vec<u8>>) {
        self.raw = Some(raw.into());
    }

    /// Length of the raw value in bytes; 0 when absent.
    pub fn len(&self) -> usize {
        self.raw.as_ref().map_or(0, Vec::len)
    }

    /// Whether the raw value is absent or zero-length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode the value as an unsigned integer. An absent value is 0.
    ///
    /// # Errors
    /// * `Error::UnsupportedConversion` if the option does not carry an integer
    /// * `Error::IntegerOverflow` if the raw value is longer than 8 bytes
    pub fn integer(&self) -> Result<u64> {
        self.codec().decode_integer(self.raw())
    }

    /// Store an unsigned integer using the minimal number of bytes.
    ///
    /// # Errors
    /// * `Error::UnsupportedConversion` if the option does not carry an integer
    pub fn set_integer(&mut self, value: u64) -> Result<()> {
        self.raw = Some(self.codec().encode_integer(value)?);
        Ok(())
    }

    /// Decode the value as UTF-8 text. An absent value is `None`.
    ///
    /// # Errors
    /// * `Error::UnsupportedConversion` if the option does not carry text
    /// * `Error::InvalidUtf8` if the raw value is not valid UTF-8
    pub fn text(&self) -> Result<Option<String>> {
        self.codec().decode_text(self.raw())
    }

    /// Store text as UTF-8.
    ///
    /// Empty text leaves the current value untouched.
    ///
    /// # Errors
    /// * `Error::UnsupportedConversion` if the option does not carry text
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        let raw = self.codec().encode_text(text)?;
        if raw.is_empty() {
            log::trace!("ignoring empty text for option {}", self.number);
            return Ok(());
        }
        self.raw = Some(raw);
        Ok(())
    }

    /// Whether the value equals the protocol default for the option number.
    ///
    /// Max-Age is at its default at 60 seconds and Token when empty; other
    /// options never are.
    pub fn is_default(&self) -> bool {
        match registry::default_rule(self.number) {
            DefaultRule::Never => false,
            DefaultRule::IntegerEquals(default) => self.integer().is_ok_and(|v| v == default),
            DefaultRule::Empty => self.len() == 0,
        }
    }

    /// Render the value for display, following the option number's render style.
    ///
    /// Values that cannot be decoded for their style fall back to hex.
    ///
    /// # Example
    /// ```
    /// use coap_option_wire::options::CoapOption;
    /// use coap_option_wire::registry::OptionNumber;
    ///
    /// let option = CoapOption::from_integer(OptionNumber::MaxAge, 60).unwrap();
    /// assert_eq!(option.render(), "60 s");
    ///
    /// let option = CoapOption::from_raw(OptionNumber::ETag, vec![0xB7, 0x0A]);
    /// assert_eq!(option.render(), "B7 0A");
    /// ```
    pub fn render(&self) -> String {
        let rendered = match registry::render_style(self.number) {
            RenderStyle::MediaType => self.integer().ok().map(|code| {
                media_type::name(code)
                    .map(String::from)
                    .unwrap_or_else(|| format!("unknown/{}", code))
            }),
            RenderStyle::Seconds => self.integer().ok().map(|seconds| format!("{} s", seconds)),
            RenderStyle::Integer => self.integer().ok().map(|value| format!("{}", value)),
            RenderStyle::Text => self.text().ok().map(Option::unwrap_or_default),
            RenderStyle::Hex => None,
        };
        rendered.unwrap_or_else(|| hex(self.raw().unwrap_or_default()))
    }

    /// 32-bit hash over the option number and raw bytes.
    ///
    /// FNV-1a followed by an avalanche step. Equal options hash equally; the
    /// converse does not hold.
    pub fn hash_code(&self) -> u32 {
        let mut hash = FNV_OFFSET_BASIS;
        let bytes = self.number.to_be_bytes();
        for &byte in bytes.iter().chain(self.raw().unwrap_or_default()) {
            hash ^= byte as u32;
            hash = hash.wrapping_mul(FNV_PRIME);
        }

        hash = hash.wrapping_add(hash << 13);
        hash ^= hash >> 7;
        hash = hash.wrapping_add(hash << 3);
        hash ^= hash >> 17;
        hash.wrapping_add(hash << 5)
    }
}

impl Hash for ValueOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl fmt::Display for ValueOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.render())
    }
}

fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{:02X}", byte);
    }
    out
}

/// High-level representation of a block option value.
///
/// Wire format of the integer value:
/// ```text
/// +-------------------------+---+-----+
/// |          NUM            | M | SZX |
/// +-------------------------+---+-----+
///  20 bits                   1   3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRepr {
    /// Block number
    pub num: u32,
    /// More blocks follow
    pub more: bool,
    /// Block size exponent; the block size is `16 << szx`
    pub szx: u8,
}

impl BlockRepr {
    /// Parse a block option integer value.
    ///
    /// # Errors
    /// * `Error::InvalidBlockSize` if SZX is 7
    /// * `Error::BlockNumberOverflow` if NUM exceeds 20 bits
    pub fn parse(value: u64) -> Result<Self> {
        let szx = (value & field::block::SZX_MASK) as u8;
        if szx > field::block::MAX_SZX {
            return Err(Error::InvalidBlockSize(szx));
        }

        let num = value >> field::block::NUM_SHIFT;
        if num > field::block::MAX_NUM as u64 {
            return Err(Error::BlockNumberOverflow(num));
        }

        Ok(BlockRepr {
            num: num as u32,
            more: value & field::block::MORE_FLAG != 0,
            szx,
        })
    }

    /// Emit this representation as a block option integer value.
    ///
    /// # Errors
    /// * `Error::InvalidBlockSize` if SZX is above 6
    /// * `Error::BlockNumberOverflow` if NUM exceeds 20 bits
    pub fn emit(&self) -> Result<u64> {
        if self.szx > field::block::MAX_SZX {
            return Err(Error::InvalidBlockSize(self.szx));
        }
        if self.num > field::block::MAX_NUM {
            return Err(Error::BlockNumberOverflow(self.num as u64));
        }

        let more = if self.more { field::block::MORE_FLAG } else { 0 };
        Ok((self.num as u64) << field::block::NUM_SHIFT | more | self.szx as u64)
    }

    /// Block size in bytes.
    pub fn size(&self) -> usize {
        field::block::MIN_SIZE << self.szx
    }

    /// Byte offset of this block within the full payload.
    pub fn offset(&self) -> usize {
        self.num as usize * self.size()
    }
}

/// A Block1 or Block2 option.
///
/// Shares the plain option contract and adds access to the block number,
/// more flag and block size packed in the integer value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockOption {
    value: ValueOption,
}

impl BlockOption {
    pub(crate) fn new(number: u16) -> Self {
        BlockOption {
            value: ValueOption::new(number),
        }
    }

    /// Get the underlying option value.
    pub fn value(&self) -> &ValueOption {
        &self.value
    }

    /// Get the underlying option value mutably.
    pub fn value_mut(&mut self) -> &mut ValueOption {
        &mut self.value
    }

    /// Decode the block fields.
    ///
    /// An absent value decodes as block 0, no more blocks, 16 bytes.
    pub fn repr(&self) -> Result<BlockRepr> {
        BlockRepr::parse(self.value.integer()?)
    }

    /// Encode the block fields as the option value.
    pub fn set_repr(&mut self, repr: BlockRepr) -> Result<()> {
        self.value.set_integer(repr.emit()?)
    }

    /// Block number.
    pub fn num(&self) -> Result<u32> {
        Ok(self.repr()?.num)
    }

    /// Whether more blocks follow.
    pub fn more(&self) -> Result<bool> {
        Ok(self.repr()?.more)
    }

    /// Block size exponent.
    pub fn szx(&self) -> Result<u8> {
        Ok(self.repr()?.szx)
    }

    /// Block size in bytes.
    pub fn size(&self) -> Result<usize> {
        Ok(self.repr()?.size())
    }
}

impl fmt::Display for BlockOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// An option of any variant.
///
/// The variant is a pure function of the option number, decided by the
/// registry at construction.
///
/// # Example
/// ```
/// use coap_option_wire::options::CoapOption;
/// use coap_option_wire::registry::OptionNumber;
///
/// let path = CoapOption::from_text(OptionNumber::UriPath, "sensors").unwrap();
/// assert_eq!(path.text().unwrap().as_deref(), Some("sensors"));
/// assert!(!path.is_block());
///
/// let block = CoapOption::from_integer(OptionNumber::Block2, 0x1A).unwrap();
/// let repr = block.as_block().unwrap().repr().unwrap();
/// assert_eq!((repr.num, repr.more, repr.size()), (1, true, 64));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CoapOption {
    /// Plain value option
    Value(ValueOption),
    /// Block1 or Block2 option
    Block(BlockOption),
}

impl CoapOption {
    /// Create an option with an absent value.
    ///
    /// Every number yields an option; unregistered numbers have no typed
    /// semantics and render as hex.
    pub fn new(number: impl Into<u16>) -> Self {
        let number = number.into();
        if registry::lookup(number).is_none() {
            log::trace!("creating option with unregistered number {}", number);
        }
        match registry::variant(number) {
            Variant::Value => CoapOption::Value(ValueOption::new(number)),
            Variant::Block => CoapOption::Block(BlockOption::new(number)),
        }
    }

    /// Create an option with the given raw value.
    pub fn from_raw(number: impl Into<u16>, raw: impl Into<Vec<u8>>) -> Self {
        let mut option = Self::new(number);
        option.set_raw(raw);
        option
    }

    /// Create an option with a text value.
    ///
    /// # Errors
    /// * `Error::UnsupportedConversion` if the option does not carry text
    pub fn from_text(number: impl Into<u16>, text: &str) -> Result<Self> {
        let mut option = Self::new(number);
        option.set_text(text)?;
        Ok(option)
    }

    /// Create an option with an integer value.
    ///
    /// # Errors
    /// * `Error::UnsupportedConversion` if the option does not carry an integer
    pub fn from_integer(number: impl Into<u16>, value: u64) -> Result<Self> {
        let mut option = Self::new(number);
        option.set_integer(value)?;
        Ok(option)
    }

    /// Get the underlying option value.
    pub fn value(&self) -> &ValueOption {
        match self {
            CoapOption::Value(value) => value,
            CoapOption::Block(block) => block.value(),
        }
    }

    fn value_mut(&mut self) -> &mut ValueOption {
        match self {
            CoapOption::Value(value) => value,
            CoapOption::Block(block) => block.value_mut(),
        }
    }

    /// Whether this is a block option.
    pub fn is_block(&self) -> bool {
        matches!(self, CoapOption::Block(_))
    }

    /// Get the block option, if this is one.
    pub fn as_block(&self) -> Option<&BlockOption> {
        match self {
            CoapOption::Block(block) => Some(block),
            CoapOption::Value(_) => None,
        }
    }

    /// Get the block option mutably, if this is one.
    pub fn as_block_mut(&mut self) -> Option<&mut BlockOption> {
        match self {
            CoapOption::Block(block) => Some(block),
            CoapOption::Value(_) => None,
        }
    }

    /// See [`ValueOption::number`].
    pub fn number(&self) -> u16 {
        self.value().number()
    }

    /// See [`ValueOption::name`].
    pub fn name(&self) -> Cow<'static, str> {
        self.value().name()
    }

    /// See [`ValueOption::kind`].
    pub fn kind(&self) -> ValueKind {
        self.value().kind()
    }

    /// See [`ValueOption::raw`].
    pub fn raw(&self) -> Option<&[u8]> {
        self.value().raw()
    }

    /// See [`ValueOption::set_raw`].
    pub fn set_raw(&mut self, raw: impl Into<Vec<u8>>) {
        self.value_mut().set_raw(raw)
    }

    /// See [`ValueOption::len`].
    pub fn len(&self) -> usize {
        self.value().len()
    }

    /// See [`ValueOption::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    /// See [`ValueOption::integer`].
    pub fn integer(&self) -> Result<u64> {
        self.value().integer()
    }

    /// See [`ValueOption::set_integer`].
    pub fn set_integer(&mut self, value: u64) -> Result<()> {
        self.value_mut().set_integer(value)
    }

    /// See [`ValueOption::text`].
    pub fn text(&self) -> Result<Option<String>> {
        self.value().text()
    }

    /// See [`ValueOption::set_text`].
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.value_mut().set_text(text)
    }

    /// See [`ValueOption::is_default`].
    pub fn is_default(&self) -> bool {
        self.value().is_default()
    }

    /// See [`ValueOption::render`].
    pub fn render(&self) -> String {
        self.value().render()
    }

    /// See [`ValueOption::hash_code`].
    pub fn hash_code(&self) -> u32 {
        self.value().hash_code()
    }
}

impl fmt::Display for CoapOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.value(), f)
    }
}
