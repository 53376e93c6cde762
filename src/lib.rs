#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

//! # coap-option-wire
//!
//! This crate models a single CoAP option: an option number plus a raw
//! value in network byte order, with typed integer and text access, the
//! protocol's default values, human-readable rendering, and the helpers a
//! message serializer needs over ordered option sequences. It is a `no_std`
//! crate that needs `alloc`.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - Canonical minimal-length big-endian integer encoding
//! - Absent values kept distinct from zero-length values
//! - Block1/Block2 options with NUM/M/SZX access
//! - Fencepost arithmetic for delta-encoded option sequences
//!
//! ## Architecture
//!
//! - `codec` - Per-kind converters between raw bytes and typed values
//! - `registry` - Static catalog of option numbers
//! - `options` - Option values and the variant-selecting constructors
//! - `sequence` - Split/join of multi-valued options, fencepost helpers
//! - `media_type` - Content-format names
//! - `field` - Wire constants
//!
//! ## Example
//!
//! ```
//! use coap_option_wire::prelude::*;
//!
//! let age = CoapOption::from_integer(OptionNumber::MaxAge, 60).unwrap();
//! assert_eq!(age.raw(), Some(&[0x3C][..]));
//! assert!(age.is_default());
//! assert_eq!(age.to_string(), "Max-Age: 60 s");
//! ```

extern crate alloc;

/// Converters between raw option bytes and integer or text values.
pub mod codec;

/// Error type for conversion and validation failures.
pub mod error;

/// Wire constants for option values and option sequences.
pub mod field;

/// Content-format codes and their media type names.
pub mod media_type;

/// Option values (plain and block) and their constructors.
pub mod options;

/// Static catalog of registered option numbers.
pub mod registry;

/// Split/join and fencepost helpers over option sequences.
pub mod sequence;

/// Prelude module for convenient imports.
pub mod prelude;
