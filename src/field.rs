//! Wire constants for CoAP option values.
//!
//! Option values are carried in network byte order with no length prefix at
//! this layer; framing belongs to the owning message. The constants here pin
//! down the parts of the encoding that option values and option sequences
//! must respect.
//!
//! # Block Option Value
//!
//! ```text
//! 0                   1                   2
//! 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                 NUM                   |M| SZX |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Shorter encodings drop leading NUM bits like any other integer value.

/// Option sequence constants.
pub mod sequence {
    /// Every multiple of this number is a fencepost option number.
    ///
    /// Fencepost options carry no value and are skipped by receivers; they
    /// exist only to keep option deltas encodable.
    pub const FENCEPOST_DIVISOR: u16 = 14;

    /// Width in bits of the option delta field in the option header.
    pub const DELTA_BITS: u32 = 4;

    /// Largest option delta the header can carry.
    pub const MAX_OPTION_DELTA: u16 = (1 << DELTA_BITS) - 1;
}

/// Integer value constants.
pub mod integer {
    /// Longest raw value that decodes as an unsigned integer.
    pub const MAX_LEN: usize = 8;
}

/// Block option value layout.
pub mod block {
    /// Block size exponent (3 bits at the least significant end).
    pub const SZX_MASK: u64 = 0x07;

    /// More flag (1 bit above SZX).
    pub const MORE_FLAG: u64 = 0x08;

    /// Shift of the block number field.
    pub const NUM_SHIFT: u32 = 4;

    /// Largest block number (20 bits).
    pub const MAX_NUM: u32 = 0x000F_FFFF;

    /// Largest valid size exponent; 7 is reserved.
    pub const MAX_SZX: u8 = 6;

    /// Block size for exponent 0; each step doubles it.
    pub const MIN_SIZE: usize = 16;
}
