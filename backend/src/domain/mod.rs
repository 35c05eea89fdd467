//! Domain primitives, the conversion engine and its port.
//!
//! Nothing in here knows about HTTP. Inbound adapters translate requests into
//! [`ConversionRequest`] values and map [`ConversionError`] and [`Error`]
//! back onto their transport.

mod conversion;
mod dimension;
pub mod error;
pub mod ports;
mod trace_id;
pub mod units;

pub use self::conversion::{ConversionError, ConversionRequest, convert};
pub use self::dimension::Dimension;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
