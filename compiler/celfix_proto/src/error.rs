//! Decode errors.

use celfix_ir::ExprId;
use thiserror::Error;

/// Why a protojson document could not be turned into a tree.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not JSON, or JSON of the wrong shape.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An integer field or map key that is not a valid integer.
    #[error("invalid integer {text:?}")]
    InvalidInt { text: String },

    /// A double given as a string that is neither numeric nor a special value.
    #[error("invalid double {text:?}")]
    InvalidDouble { text: String },

    /// A bytes constant that is not standard base64.
    #[error("invalid base64 in bytes constant {id}")]
    InvalidBytes {
        id: ExprId,
        #[source]
        source: base64::DecodeError,
    },

    /// A constant expression with no value set.
    #[error("constant {id} has no value")]
    EmptyConstant { id: ExprId },

    /// A macro-call record whose expression is not a call.
    #[error("macro call {id} is not a call expression")]
    MacroNotCall { id: ExprId },

    /// A struct entry with neither a field key nor a map key.
    #[error("entry {id} has no key")]
    EntryWithoutKey { id: ExprId },

    /// The document has no `expr`.
    #[error("parsed expression has no root")]
    MissingExpr,

    /// Two nodes or entries of the tree share an id.
    #[error("duplicate expression id {id}")]
    DuplicateId { id: ExprId },
}
