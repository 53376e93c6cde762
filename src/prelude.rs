//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate,
//! allowing for convenient glob imports:
//!
//! ```
//! use coap_option_wire::prelude::*;
//! ```

pub use crate::codec::{IntegerCodec, OpaqueCodec, TextCodec, ValueCodec, ValueKind};
pub use crate::error::Error;
pub use crate::options::{BlockOption, BlockRepr, CoapOption, ValueOption};
pub use crate::registry::{DefaultRule, OptionInfo, OptionNumber, RenderStyle, Variant};
