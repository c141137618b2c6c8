//! Record trait: the ingestion boundary for arbitrary input shapes

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use super::SemanticType;
use super::Value;

/// How a record exposes its fields to schema inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Fixed, declared fields (structs). Field lookup falls back to a
    /// case-insensitive name match.
    Struct,
    /// String-keyed map. Column types come from runtime values.
    Map,
    /// Anything else. Carries a short type description for error messages.
    Unsupported(&'static str),
}

/// Description of one field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, used as the column key.
    pub name: String,
    /// Semantic type of the field.
    pub semantic_type: SemanticType,
    /// Optional per-field configuration string (`"Header,opt,..."`).
    pub tag: Option<String>,
}

impl FieldDescriptor {
    /// Creates a descriptor without a configuration tag.
    pub fn new(name: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            semantic_type,
            tag: None,
        }
    }

    /// Attaches a configuration tag (builder pattern).
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// A single input item that can be ingested into a [`Table`](crate::Table).
///
/// Structs usually get this through `#[derive(Record)]`:
///
/// ```
/// use tably::Record;
///
/// #[derive(Record)]
/// struct Employee {
///     #[table("ID,sortable,width:5")]
///     id: u32,
///     #[table("Name,width:20")]
///     name: String,
///     #[table(skip)]
///     internal_note: String,
/// }
/// ```
///
/// String-keyed maps and JSON objects implement it out of the box.
pub trait Record {
    /// Shape of this record.
    fn shape(&self) -> Shape {
        Shape::Struct
    }

    /// Field descriptors in iteration order.
    fn fields(&self) -> Vec<FieldDescriptor>;

    /// Looks up a field by its exact name.
    fn field(&self, key: &str) -> Option<Value>;
}

// =============================================================================
// Maps
// =============================================================================

fn map_descriptors<'a, V, I>(entries: I) -> Vec<FieldDescriptor>
where
    V: Clone + Into<Value> + 'a,
    I: Iterator<Item = (&'a String, &'a V)>,
{
    let mut fields: Vec<FieldDescriptor> = entries
        .map(|(key, value)| {
            let value: Value = value.clone().into();
            FieldDescriptor::new(key.clone(), value.semantic_type())
        })
        .collect();
    fields.sort_by(|a, b| a.name.cmp(&b.name));
    fields
}

impl<V, S> Record for HashMap<String, V, S>
where
    V: Clone + Into<Value>,
    S: std::hash::BuildHasher,
{
    fn shape(&self) -> Shape {
        Shape::Map
    }

    fn fields(&self) -> Vec<FieldDescriptor> {
        map_descriptors(self.iter())
    }

    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned().map(Into::into)
    }
}

impl<V> Record for BTreeMap<String, V>
where
    V: Clone + Into<Value>,
{
    fn shape(&self) -> Shape {
        Shape::Map
    }

    fn fields(&self) -> Vec<FieldDescriptor> {
        map_descriptors(self.iter())
    }

    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned().map(Into::into)
    }
}

// =============================================================================
// JSON
// =============================================================================

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn shape(&self) -> Shape {
        Shape::Map
    }

    fn fields(&self) -> Vec<FieldDescriptor> {
        let mut fields: Vec<FieldDescriptor> = self
            .iter()
            .map(|(key, value)| FieldDescriptor::new(key.clone(), Value::from(value).semantic_type()))
            .collect();
        fields.sort_by(|a, b| a.name.cmp(&b.name));
        fields
    }

    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).map(Value::from)
    }
}

impl Record for serde_json::Value {
    fn shape(&self) -> Shape {
        match self {
            serde_json::Value::Object(_) => Shape::Map,
            other => Shape::Unsupported(json_kind(other)),
        }
    }

    fn fields(&self) -> Vec<FieldDescriptor> {
        match self {
            serde_json::Value::Object(map) => map.fields(),
            _ => Vec::new(),
        }
    }

    fn field(&self, key: &str) -> Option<Value> {
        match self {
            serde_json::Value::Object(map) => map.field(key),
            _ => None,
        }
    }
}

// =============================================================================
// Pointers
// =============================================================================

macro_rules! forward_record {
    ($($ptr:ty),*) => {$(
        impl<T: Record + ?Sized> Record for $ptr {
            fn shape(&self) -> Shape {
                (**self).shape()
            }

            fn fields(&self) -> Vec<FieldDescriptor> {
                (**self).fields()
            }

            fn field(&self, key: &str) -> Option<Value> {
                (**self).field(key)
            }
        }
    )*};
}

forward_record!(&T, Box<T>, Rc<T>, Arc<T>);

/// Resolves `key` on `record`: exact match first, then a case-insensitive
/// match against the declared fields of struct-like records.
pub(crate) fn resolve_field<R: Record + ?Sized>(record: &R, key: &str) -> Option<Value> {
    if let Some(value) = record.field(key) {
        return Some(value);
    }
    if record.shape() != Shape::Struct {
        return None;
    }
    let wanted = key.to_lowercase();
    record
        .fields()
        .into_iter()
        .find(|field| field.name.to_lowercase() == wanted)
        .and_then(|field| record.field(&field.name))
}
