//! Column inference from a sample record.

use super::FieldConfig;
use crate::config::WidthDefaults;
use crate::error::SchemaError;
use crate::model::Column;
use crate::model::Record;
use crate::model::Shape;

/// Derives the column list for records shaped like `sample`.
///
/// Struct records yield one column per described field, in declaration
/// order, with their configuration tags applied. Map records yield one
/// column per key with the type of its current value. Widths default to
/// `widths` unless a tag sets one.
///
/// # Errors
///
/// Returns [`SchemaError::UnsupportedShape`] for records that are neither
/// structs nor maps.
pub fn infer_columns<R: Record>(sample: &R, widths: &WidthDefaults) -> Result<Vec<Column<R>>, SchemaError> {
    let shape = sample.shape();
    if let Shape::Unsupported(found) = shape {
        return Err(SchemaError::unsupported(found));
    }

    let columns: Vec<Column<R>> = sample
        .fields()
        .into_iter()
        .map(|field| {
            let column = Column::new(field.name.clone(), field.name)
                .with_type(field.semantic_type)
                .with_width(widths.for_type(field.semantic_type));
            match field.tag.as_deref() {
                Some(tag) if shape == Shape::Struct => FieldConfig::parse(tag).apply(column),
                _ => column,
            }
        })
        .collect();

    log::debug!("Inferred {} columns from {:?} record", columns.len(), shape);
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::model::FieldDescriptor;
    use crate::model::SemanticType;
    use crate::model::Value;

    struct Employee;

    impl Record for Employee {
        fn fields(&self) -> Vec<FieldDescriptor> {
            vec![
                FieldDescriptor::new("ID", SemanticType::Integer).with_tag("ID,sortable,width:5"),
                FieldDescriptor::new("Name", SemanticType::Text).with_tag("Full Name,width:20"),
                FieldDescriptor::new("Salary", SemanticType::Float).with_tag("Salary,format:currency"),
                FieldDescriptor::new("Active", SemanticType::Boolean).with_tag(",!searchable"),
                FieldDescriptor::new("Hired", SemanticType::Date),
            ]
        }

        fn field(&self, _key: &str) -> Option<Value> {
            None
        }
    }

    struct Scalar;

    impl Record for Scalar {
        fn shape(&self) -> Shape {
            Shape::Unsupported("i32")
        }

        fn fields(&self) -> Vec<FieldDescriptor> {
            Vec::new()
        }

        fn field(&self, _key: &str) -> Option<Value> {
            None
        }
    }

    #[test]
    fn test_struct_columns() {
        let columns = infer_columns(&Employee, &WidthDefaults::default()).unwrap();
        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["ID", "Name", "Salary", "Active", "Hired"]);

        assert_eq!(columns[0].semantic_type, SemanticType::Integer);
        assert_eq!(columns[0].width, 5);

        assert_eq!(columns[1].header, "Full Name");
        assert_eq!(columns[1].width, 20);

        assert_eq!(columns[2].semantic_type, SemanticType::Float);
        assert_eq!(columns[2].width, 10);
        assert_eq!(columns[2].formatter.name(), "currency");

        assert_eq!(columns[3].header, "Active");
        assert!(!columns[3].searchable);
        assert!(columns[3].sortable);
        assert_eq!(columns[3].width, 8);

        assert_eq!(columns[4].header, "Hired");
        assert_eq!(columns[4].semantic_type, SemanticType::Date);
        assert_eq!(columns[4].width, 12);
    }

    #[test]
    fn test_map_columns() {
        let mut map: BTreeMap<String, Value> = BTreeMap::new();
        map.insert("name".into(), Value::from("Ann"));
        map.insert("age".into(), Value::from(41));

        let widths = WidthDefaults {
            text: 30,
            ..WidthDefaults::default()
        };
        let columns = infer_columns(&map, &widths).unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].key, "age");
        assert_eq!(columns[0].header, "age");
        assert_eq!(columns[0].semantic_type, SemanticType::Integer);
        assert_eq!(columns[1].width, 30);
        assert!(columns.iter().all(|c| c.sortable && c.searchable));
    }

    #[test]
    fn test_unsupported_shape() {
        let err = infer_columns(&Scalar, &WidthDefaults::default()).unwrap_err();
        assert_eq!(err, SchemaError::unsupported("i32"));
    }
}
