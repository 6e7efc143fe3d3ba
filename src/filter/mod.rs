// Typed filter conversion for backend list queries.
//
// Filters arrive at the facade boundary as a string-keyed, string-valued
// map. Before a list RPC is dispatched they are converted into a typed map
// keyed by the resource's `Field` enum. Each resource declares its
// filterable fields in a compile-time registry; a key outside the registry
// or a value that fails to parse aborts the whole conversion.

pub mod error;

pub use error::FilterError;

use std::collections::HashMap;
use std::hash::Hash;
use uuid::Uuid;

/// Semantic type of a declared filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Uuid,
    Text,
}

/// A coerced filter value, ready for the backend query layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Bool(bool),
    Uuid(Uuid),
    Text(String),
}

/// Field registry of a filterable resource: maps a logical field name to the
/// typed field id and its kind.
pub trait FilterSchema {
    type Field: Copy + Eq + Hash;

    fn lookup(name: &str) -> Option<(Self::Field, FieldKind)>;
}

/// Convert an untyped filter map into the typed form declared by `S`.
///
/// Deterministic and total over the declared fields: every key must resolve
/// through the registry and every value must parse for its kind.
pub fn convert_filters<S: FilterSchema>(
    raw: &HashMap<String, String>,
) -> Result<HashMap<S::Field, FilterValue>, FilterError> {
    let mut result = HashMap::with_capacity(raw.len());

    for (name, value) in raw {
        let (field, kind) =
            S::lookup(name).ok_or_else(|| FilterError::UnknownField(name.clone()))?;
        result.insert(field, coerce(kind, name, value)?);
    }

    Ok(result)
}

fn coerce(kind: FieldKind, field: &str, value: &str) -> Result<FilterValue, FilterError> {
    let coercion_error = || FilterError::TypeCoercion {
        field: field.to_string(),
        value: value.to_string(),
    };

    match kind {
        FieldKind::Bool => value
            .parse::<bool>()
            .map(FilterValue::Bool)
            .map_err(|_| coercion_error()),
        FieldKind::Uuid => Uuid::parse_str(value)
            .map(FilterValue::Uuid)
            .map_err(|_| coercion_error()),
        FieldKind::Text => Ok(FilterValue::Text(value.to_string())),
    }
}
