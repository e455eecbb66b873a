//! Wire messages to `celfix_ir` trees.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use celfix_ir::{
    Comprehension, EntryExpr, EntryKey, Expr, ExprId, ExprKind, Literal, MacroCall, ParsedExpr,
    SourceInfo,
};
use serde_json::Value;

use crate::error::DecodeError;
use crate::wire::{
    CallJson, ComprehensionJson, ConstantJson, EntryJson, ExprJson, JsonDouble, JsonInt, JsonUint,
    ParsedExprJson, SourceInfoJson,
};

/// Decode a protojson `ParsedExpr` or `CheckedExpr` document.
pub fn decode_parsed_expr(json: &str) -> Result<ParsedExpr, DecodeError> {
    let wire: ParsedExprJson = serde_json::from_str(json)?;
    convert(wire)
}

/// Decode an already-parsed JSON value, e.g. one embedded in a corpus file.
pub fn decode_value(value: Value) -> Result<ParsedExpr, DecodeError> {
    let wire: ParsedExprJson = serde_json::from_value(value)?;
    convert(wire)
}

fn convert(wire: ParsedExprJson) -> Result<ParsedExpr, DecodeError> {
    let root = wire.expr.ok_or(DecodeError::MissingExpr)?;
    let expr = decode_expr(root)?;
    let source_info = decode_source_info(wire.source_info.unwrap_or_default())?;
    let parsed = ParsedExpr::new(expr, source_info);
    if let Some(id) = parsed.duplicate_id() {
        return Err(DecodeError::DuplicateId { id });
    }
    tracing::debug!(
        source = parsed.source_info.description.as_str(),
        root = %parsed.expr.id,
        positions = parsed.source_info.positions.len(),
        macro_calls = parsed.source_info.macro_calls.len(),
        "decoded parsed expression"
    );
    Ok(parsed)
}

fn decode_source_info(wire: SourceInfoJson) -> Result<SourceInfo, DecodeError> {
    let mut info = SourceInfo::new();
    info.description = wire.location;
    info.line_offsets = wire
        .line_offsets
        .into_iter()
        .map(int32)
        .collect::<Result<Vec<_>, _>>()?;
    for (key, offset) in wire.positions {
        info.set_position(parse_id(&key)?, int32(offset)?);
    }
    for (key, expr) in wire.macro_calls {
        let id = parse_id(&key)?;
        let call = decode_macro_call(id, expr)?;
        info.add_macro_call(id, call);
    }
    Ok(info)
}

fn decode_macro_call(id: ExprId, wire: ExprJson) -> Result<MacroCall, DecodeError> {
    let Some(CallJson {
        target,
        function,
        args,
    }) = wire.call_expr
    else {
        return Err(DecodeError::MacroNotCall { id });
    };
    let args = decode_exprs(args)?;
    Ok(match target {
        Some(target) => MacroCall::member(decode_expr(*target)?, function, args),
        None => MacroCall::global(function, args),
    })
}

fn decode_expr(wire: ExprJson) -> Result<Expr, DecodeError> {
    let id = decode_id(wire.id)?;
    let kind = if let Some(constant) = wire.const_expr {
        ExprKind::Literal(decode_constant(id, constant)?)
    } else if let Some(ident) = wire.ident_expr {
        ExprKind::Ident { name: ident.name }
    } else if let Some(select) = wire.select_expr {
        ExprKind::Select {
            operand: Box::new(decode_operand(select.operand)?),
            field: select.field,
            test_only: select.test_only,
        }
    } else if let Some(call) = wire.call_expr {
        ExprKind::Call {
            target: call
                .target
                .map(|target| decode_expr(*target).map(Box::new))
                .transpose()?,
            function: call.function,
            args: decode_exprs(call.args)?,
        }
    } else if let Some(list) = wire.list_expr {
        ExprKind::List {
            elements: decode_exprs(list.elements)?,
        }
    } else if let Some(message) = wire.struct_expr {
        let entries = message
            .entries
            .into_iter()
            .map(decode_entry)
            .collect::<Result<Vec<_>, _>>()?;
        if message.message_name.is_empty() {
            ExprKind::Map { entries }
        } else {
            ExprKind::Struct {
                type_name: message.message_name,
                fields: entries,
            }
        }
    } else if let Some(comprehension) = wire.comprehension_expr {
        ExprKind::Comprehension(Box::new(decode_comprehension(*comprehension)?))
    } else {
        ExprKind::Unspecified
    };
    Ok(Expr::new(id, kind))
}

fn decode_exprs(wire: Vec<ExprJson>) -> Result<Vec<Expr>, DecodeError> {
    wire.into_iter().map(decode_expr).collect()
}

/// A missing sub-expression becomes an unnumbered placeholder.
fn decode_operand(wire: Option<ExprJson>) -> Result<Expr, DecodeError> {
    match wire {
        Some(expr) => decode_expr(expr),
        None => Ok(Expr::unspecified(ExprId::NONE)),
    }
}

fn decode_entry(wire: EntryJson) -> Result<EntryExpr, DecodeError> {
    let id = decode_id(wire.id)?;
    let key = match (wire.field_key, wire.map_key) {
        (Some(name), _) => EntryKey::Field(name),
        (None, Some(key)) => EntryKey::MapKey(decode_expr(key)?),
        (None, None) => return Err(DecodeError::EntryWithoutKey { id }),
    };
    Ok(EntryExpr {
        id,
        key,
        value: decode_operand(wire.value)?,
        optional: wire.optional_entry,
    })
}

fn decode_comprehension(wire: ComprehensionJson) -> Result<Comprehension, DecodeError> {
    Ok(Comprehension {
        iter_var: wire.iter_var,
        iter_var2: wire.iter_var2.filter(|name| !name.is_empty()),
        iter_range: decode_operand(wire.iter_range)?,
        accu_var: wire.accu_var,
        accu_init: decode_operand(wire.accu_init)?,
        loop_condition: decode_operand(wire.loop_condition)?,
        loop_step: decode_operand(wire.loop_step)?,
        result: decode_operand(wire.result)?,
    })
}

fn decode_constant(id: ExprId, wire: ConstantJson) -> Result<Literal, DecodeError> {
    if wire.null_value.is_some() {
        return Ok(Literal::Null);
    }
    if let Some(value) = wire.bool_value {
        return Ok(Literal::Bool(value));
    }
    if let Some(value) = wire.int64_value {
        return int64(value).map(Literal::Int);
    }
    if let Some(value) = wire.uint64_value {
        return uint64(value).map(Literal::Uint);
    }
    if let Some(value) = wire.double_value {
        return double(value).map(Literal::Double);
    }
    if let Some(value) = wire.string_value {
        return Ok(Literal::String(value));
    }
    if let Some(text) = wire.bytes_value {
        return STANDARD
            .decode(text.as_bytes())
            .map(Literal::Bytes)
            .map_err(|source| DecodeError::InvalidBytes { id, source });
    }
    if let Some(value) = wire.duration_value {
        return Ok(unrecognized(id, "google.protobuf.Duration", &value));
    }
    if let Some(value) = wire.timestamp_value {
        return Ok(unrecognized(id, "google.protobuf.Timestamp", &value));
    }
    Err(DecodeError::EmptyConstant { id })
}

fn unrecognized(id: ExprId, type_name: &str, value: &Value) -> Literal {
    tracing::warn!(%id, type_name, "deprecated constant kind");
    let text = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    Literal::Unrecognized {
        type_name: type_name.to_string(),
        text,
    }
}

fn decode_id(wire: Option<JsonInt>) -> Result<ExprId, DecodeError> {
    wire.map_or(Ok(ExprId::NONE), |id| int64(id).map(ExprId::new))
}

fn parse_id(key: &str) -> Result<ExprId, DecodeError> {
    key.parse::<i64>()
        .map(ExprId::new)
        .map_err(|_| DecodeError::InvalidInt {
            text: key.to_string(),
        })
}

fn int64(wire: JsonInt) -> Result<i64, DecodeError> {
    match wire {
        JsonInt::Number(value) => Ok(value),
        JsonInt::Text(text) => text
            .parse()
            .map_err(|_| DecodeError::InvalidInt { text }),
    }
}

fn int32(wire: JsonInt) -> Result<i32, DecodeError> {
    let value = int64(wire)?;
    i32::try_from(value).map_err(|_| DecodeError::InvalidInt {
        text: value.to_string(),
    })
}

fn uint64(wire: JsonUint) -> Result<u64, DecodeError> {
    match wire {
        JsonUint::Number(value) => Ok(value),
        JsonUint::Text(text) => text
            .parse()
            .map_err(|_| DecodeError::InvalidInt { text }),
    }
}

fn double(wire: JsonDouble) -> Result<f64, DecodeError> {
    match wire {
        JsonDouble::Number(value) => Ok(value),
        JsonDouble::Text(text) => match text.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            _ => text
                .parse()
                .map_err(|_| DecodeError::InvalidDouble { text }),
        },
    }
}
