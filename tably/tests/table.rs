//! End-to-end tests for ingestion, sorting, filtering and pagination.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::HashMap;

use tably::{
    Column, ColumnHint, Formatter, IngestionError, Record, SemanticType, SortError, SortState,
    Table, TableConfig, Value,
};

#[derive(Debug, Clone, Record)]
struct Person {
    #[table("ID")]
    id: i64,
    #[table("Name")]
    name: String,
}

fn person(id: i64, name: &str) -> Person {
    Person {
        id,
        name: name.to_string(),
    }
}

fn names<R>(table: &Table<R>) -> Vec<String> {
    (0..table.len())
        .map(|row| table.cell_display_value(row, 1))
        .collect()
}

#[test]
fn test_bob_and_alice_scenario() {
    let mut table = Table::new().with_page_size(10);
    table.set_data(vec![person(2, "Bob"), person(1, "Alice")]).unwrap();

    let page = table.page(0);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].source().name, "Bob");
    assert_eq!(page[1].source().name, "Alice");

    table.sort_by_column(0, false).unwrap();
    assert_eq!(table.page(0)[0].source().name, "Alice");

    let bobs = table.filter("Bob");
    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs.row(0).unwrap().source().name, "Bob");
}

#[test]
fn test_three_state_cycle_restores_natural_order() {
    let mut table = Table::new();
    table
        .set_data(vec![person(1, "a"), person(3, "c"), person(2, "b")])
        .unwrap();
    let ids = |t: &Table<Person>| -> Vec<i64> { t.rows().map(|r| r.source().id).collect() };

    table.sort_by_column(0, false).unwrap();
    assert_eq!(ids(&table), vec![1, 2, 3]);
    table.sort_by_column(0, true).unwrap();
    assert_eq!(ids(&table), vec![3, 2, 1]);
    table.clear_sort();
    assert_eq!(ids(&table), vec![1, 3, 2]);
}

#[test]
fn test_cycle_sort_switches_columns() {
    let mut table = Table::new();
    table
        .set_data(vec![person(1, "c"), person(2, "a"), person(3, "b")])
        .unwrap();

    assert_eq!(table.cycle_sort(0), Ok(Some(SortState::ascending(0))));
    assert_eq!(table.cycle_sort(1), Ok(Some(SortState::ascending(1))));
    assert_eq!(names(&table), vec!["a", "b", "c"]);
    assert_eq!(table.cycle_sort(1), Ok(Some(SortState::descending(1))));
    assert_eq!(names(&table), vec!["c", "b", "a"]);
    assert_eq!(table.cycle_sort(1), Ok(None));
    assert_eq!(names(&table), vec!["c", "a", "b"]);
}

#[test]
fn test_sort_errors_leave_table_unchanged() {
    let mut table = Table::with_columns(vec![
        Column::new("id", "ID").with_type(SemanticType::Integer),
        Column::new("name", "Name").with_sortable(false),
    ]);
    table.set_data(vec![person(2, "b"), person(1, "a")]).unwrap();

    assert_eq!(
        table.sort_by_column(2, false),
        Err(SortError::InvalidIndex {
            index: 2,
            column_count: 2
        })
    );
    let err = table.sort_by_column(1, true).unwrap_err();
    assert_eq!(err.to_string(), "column 'Name' is not sortable");
    assert_eq!(names(&table), vec!["b", "a"]);
}

#[test]
fn test_unparsed_float_sorts_after_numbers() {
    let mut table: Table<HashMap<String, Value>> = Table::with_columns(vec![
        Column::new("score", "Score").with_type(SemanticType::Float),
        Column::new("name", "Name"),
    ]);
    let row = |score: &str, name: &str| {
        HashMap::from([
            ("score".to_string(), Value::from(score)),
            ("name".to_string(), Value::from(name)),
        ])
    };
    table
        .set_data(vec![row("N/A", "x"), row("3.5", "y"), row("10", "z")])
        .unwrap();

    table.sort_by_column(0, false).unwrap();
    assert_eq!(names(&table), vec!["y", "z", "x"]);
    assert_eq!(table.cell_display_value(2, 0), "N/A");
}

#[test]
fn test_date_column_sorts_chronologically() {
    let mut table: Table<BTreeMap<String, &str>> = Table::with_columns(vec![
        Column::new("when", "When").with_type(SemanticType::Date),
        Column::new("what", "What"),
    ]);
    let row = |when, what| BTreeMap::from([("when".to_string(), when), ("what".to_string(), what)]);
    table
        .set_data(vec![
            row("2023/05/01", "may"),
            row("01/15/2023", "jan"),
            row("2023-03-10 09:00:00", "mar"),
            row("unknown", "never"),
        ])
        .unwrap();

    table.sort_by_column(0, false).unwrap();
    assert_eq!(names(&table), vec!["jan", "mar", "may", "never"]);
}

#[test]
fn test_filter_identity_and_independence() {
    let mut table = Table::new().with_page_size(2);
    table
        .set_data(vec![person(1, "Ann"), person(2, "Anna"), person(3, "Ben")])
        .unwrap();

    match table.filter("") {
        Cow::Borrowed(same) => assert!(std::ptr::eq(same, &table)),
        Cow::Owned(_) => panic!("empty needle must borrow the receiver"),
    }

    let mut derived = table.filter("ann").into_owned();
    assert_eq!(derived.len(), 2);
    assert_eq!(derived.page_size(), 2);
    derived.sort_by_column(1, true).unwrap();
    derived.set_page_size(5);

    assert_eq!(names(&derived), vec!["Anna", "Ann"]);
    assert_eq!(names(&table), vec!["Ann", "Anna", "Ben"]);
    assert_eq!(table.page_size(), 2);
    assert_eq!(table.sort_state(), None);
}

#[test]
fn test_refilter_never_resurrects_rows() {
    let mut table = Table::new();
    table
        .set_data(vec![person(1, "Ann"), person(2, "Ben"), person(3, "Anna")])
        .unwrap();
    let mut derived = table.filter("an").into_owned();
    derived.clear_sort();
    assert_eq!(derived.filter("n").len(), 2);
    assert_eq!(derived.natural_rows().count(), 2);
}

#[test]
fn test_pagination() {
    let mut table = Table::new().with_page_size(3);
    table
        .set_data((0..7).map(|id| person(id, "p")))
        .unwrap();

    assert_eq!(table.total_pages(), 3);
    assert_eq!(table.page(0).len(), 3);
    assert_eq!(table.page(2).len(), 1);
    assert!(table.page(3).is_empty());

    let all: Vec<i64> = (0..table.total_pages())
        .flat_map(|p| table.page(p))
        .map(|r| r.source().id)
        .collect();
    assert_eq!(all, (0..7).collect::<Vec<_>>());
}

#[test]
fn test_empty_table_has_one_page() {
    let table: Table<Person> = Table::new();
    assert_eq!(table.total_pages(), 1);
    assert!(table.page(0).is_empty());
}

#[test]
fn test_json_ingestion() {
    let mut table = Table::new();
    table
        .set_json(serde_json::json!([
            {"name": "Ann", "score": 9.5, "active": true},
            {"name": "Ben", "score": 7},
        ]))
        .unwrap();

    assert_eq!(table.headers(), vec!["active", "name", "score"]);
    assert_eq!(table.columns()[2].semantic_type, SemanticType::Float);
    assert_eq!(table.cell_display_value(1, 0), "");
    assert_eq!(table.cell_display_value(1, 2), "7");

    let err = table.set_json(serde_json::json!(42)).unwrap_err();
    assert_eq!(err, IngestionError::not_a_collection("number"));
    assert!(table.is_empty());
}

#[test]
fn test_config_and_hints() {
    let config: TableConfig = serde_json::from_str(r#"{"page_size": 2}"#).unwrap();
    let hints: Vec<ColumnHint> = serde_json::from_str(
        r#"[
            {"key": "name", "header": "Who"},
            {"key": "id", "type": "integer", "format": "prefix:#"}
        ]"#,
    )
    .unwrap();

    let columns = hints.into_iter().map(ColumnHint::into_column).collect();
    let mut table = Table::with_columns(columns).with_page_size(config.page_size());
    table
        .set_data(vec![person(10, "x"), person(11, "y"), person(12, "z")])
        .unwrap();

    assert_eq!(table.headers(), vec!["Who", "id"]);
    assert_eq!(table.cell_display_value(0, 1), "#10");
    assert_eq!(table.total_pages(), 2);
}

#[test]
fn test_custom_formatter_drives_filter() {
    let mut table: Table<Person> = Table::with_columns(vec![
        Column::new("id", "ID")
            .with_type(SemanticType::Integer)
            .with_formatter(Formatter::custom("roman", |v| match v {
                Value::Integer(1) => "I".into(),
                Value::Integer(2) => "II".into(),
                other => other.to_string(),
            })),
        Column::new("name", "Name").with_searchable(false),
    ]);
    table.set_data(vec![person(1, "one"), person(2, "two")]).unwrap();

    assert_eq!(table.cell_display_value(1, 0), "II");
    assert_eq!(table.filter("ii").len(), 1);
    assert_eq!(table.filter("two").len(), 0);
}
