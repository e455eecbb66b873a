//! Serde mirror of the protojson message shapes.
//!
//! Every field is optional on the wire; defaults apply when absent. Exactly
//! which kind an `Expr` has is decided in `decode`, not here.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `ParsedExpr` or `CheckedExpr`; the extra fields of the latter are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ParsedExprJson {
    pub expr: Option<ExprJson>,
    pub source_info: Option<SourceInfoJson>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SourceInfoJson {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub line_offsets: Vec<JsonInt>,
    #[serde(default)]
    pub positions: BTreeMap<String, JsonInt>,
    #[serde(default)]
    pub macro_calls: BTreeMap<String, ExprJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExprJson {
    pub id: Option<JsonInt>,
    pub const_expr: Option<ConstantJson>,
    pub ident_expr: Option<IdentJson>,
    pub select_expr: Option<Box<SelectJson>>,
    pub call_expr: Option<CallJson>,
    pub list_expr: Option<ListJson>,
    pub struct_expr: Option<StructJson>,
    pub comprehension_expr: Option<Box<ComprehensionJson>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConstantJson {
    /// `Some(Value::Null)` when present as `null`.
    #[serde(default, deserialize_with = "present")]
    pub null_value: Option<Value>,
    pub bool_value: Option<bool>,
    pub int64_value: Option<JsonInt>,
    pub uint64_value: Option<JsonUint>,
    pub double_value: Option<JsonDouble>,
    pub string_value: Option<String>,
    pub bytes_value: Option<String>,
    pub duration_value: Option<Value>,
    pub timestamp_value: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IdentJson {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SelectJson {
    pub operand: Option<ExprJson>,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub test_only: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CallJson {
    pub target: Option<Box<ExprJson>>,
    #[serde(default)]
    pub function: String,
    #[serde(default)]
    pub args: Vec<ExprJson>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListJson {
    #[serde(default)]
    pub elements: Vec<ExprJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StructJson {
    #[serde(default)]
    pub message_name: String,
    #[serde(default)]
    pub entries: Vec<EntryJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EntryJson {
    pub id: Option<JsonInt>,
    pub field_key: Option<String>,
    pub map_key: Option<ExprJson>,
    pub value: Option<ExprJson>,
    #[serde(default)]
    pub optional_entry: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ComprehensionJson {
    #[serde(default)]
    pub iter_var: String,
    pub iter_var2: Option<String>,
    pub iter_range: Option<ExprJson>,
    #[serde(default)]
    pub accu_var: String,
    pub accu_init: Option<ExprJson>,
    pub loop_condition: Option<ExprJson>,
    pub loop_step: Option<ExprJson>,
    pub result: Option<ExprJson>,
}

/// Signed integer written as a number or a decimal string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum JsonInt {
    Number(i64),
    Text(String),
}

/// Unsigned integer written as a number or a decimal string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum JsonUint {
    Number(u64),
    Text(String),
}

/// Double written as a number, or as a string for special and exact values.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum JsonDouble {
    Number(f64),
    Text(String),
}

/// Distinguish a field present as `null` from an absent one.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
