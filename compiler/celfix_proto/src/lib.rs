//! celfix proto - Protojson Decoding
//!
//! Reads the JSON encoding of a `ParsedExpr` or `CheckedExpr` message (the
//! form other parser implementations and corpus extractors write) into a
//! [`celfix_ir::ParsedExpr`].
//!
//! Decoding follows protojson conventions:
//! - 64-bit integers may be JSON strings or numbers
//! - doubles may be numbers or `"NaN"`, `"Infinity"`, `"-Infinity"`
//! - bytes are standard base64
//! - unknown fields are ignored, so type-checker output decodes too
//!
//! A `structExpr` without a message name is a map literal. Duration and
//! timestamp constants decode to [`celfix_ir::Literal::Unrecognized`].

mod decode;
mod error;
mod wire;

pub use decode::{decode_parsed_expr, decode_value};
pub use error::DecodeError;
