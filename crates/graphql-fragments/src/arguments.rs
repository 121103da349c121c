//! Coercion of caller-supplied argument values into GraphQL literals.

use indexmap::IndexMap;
use serde_json::Value;

use crate::{ArgumentType, Error, FieldDescriptor, ValueKind};

/// Argument values by argument name, in the order the caller gave them.
pub type Arguments = IndexMap<String, Value>;

/// Renders the argument clause of `field`, e.g. `(first: 10, after: "abc")`.
///
/// Only arguments declared on the field are kept, in declaration order. `null`
/// values are skipped. An empty string is returned when no argument remains.
pub fn format_arguments(field: &FieldDescriptor, arguments: Option<&Arguments>) -> Result<String, Error> {
    let Some(arguments) = arguments.filter(|arguments| !arguments.is_empty()) else {
        return Ok(String::new());
    };

    let mut clause = String::new();

    for argument in &field.args {
        let Some(value) = arguments.get(&argument.name).filter(|value| !value.is_null()) else {
            continue;
        };

        clause.push_str(if clause.is_empty() { "(" } else { ", " });
        clause.push_str(&argument.name);
        clause.push_str(": ");

        let coercion = Coercion {
            field: &field.name,
            argument: &argument.name,
        };
        coercion.coerce(&mut clause, &argument.ty, value)?;
    }

    if !clause.is_empty() {
        clause.push(')');
    }

    Ok(clause)
}

struct Coercion<'a> {
    field: &'a str,
    argument: &'a str,
}

impl Coercion<'_> {
    fn coerce(&self, out: &mut String, ty: &ArgumentType, value: &Value) -> Result<(), Error> {
        match ty {
            ArgumentType::String | ArgumentType::Id => {
                write_quoted(out, &plain_string(value));
            }
            ArgumentType::Int => match value {
                Value::Number(number) => out.push_str(&number.to_string()),
                Value::String(s) if is_numeric(s) => out.push_str(s.trim()),
                _ => return Err(self.mismatch(ty, value)),
            },
            ArgumentType::List(inner) => {
                let Value::Array(items) = value else {
                    return Err(self.mismatch(ty, value));
                };

                out.push('[');
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    self.coerce(out, inner, item)?;
                }
                out.push(']');
            }
            ArgumentType::Other(_) => write_literal(out, value),
        }

        Ok(())
    }

    fn mismatch(&self, ty: &ArgumentType, value: &Value) -> Error {
        Error::ArgumentType {
            field: self.field.to_owned(),
            argument: self.argument.to_owned(),
            expected: ty.to_string(),
            found: ValueKind::from(value),
        }
    }
}

/// `NaN` and infinities parse as floats but are not numbers a field accepts.
fn is_numeric(s: &str) -> bool {
    s.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

/// The string form of a value, as used inside a quoted literal.
fn plain_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(plain_string).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Writes a value of an untyped argument (floats, booleans, enums, custom scalars).
/// Strings are written as-is so enum values stay bare.
fn write_literal(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Object(object) => {
            out.push('{');
            for (index, (key, value)) in object.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                write_nested_literal(out, value);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                write_literal(out, item);
            }
            out.push(']');
        }
        other => out.push_str(&other.to_string()),
    }
}

/// Inside input objects the field types are unknown, strings are quoted.
fn write_nested_literal(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => write_quoted(out, s),
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                write_nested_literal(out, item);
            }
            out.push(']');
        }
        other => write_literal(out, other),
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}
