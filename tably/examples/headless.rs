//! Drives a table without any UI: sort cycling, filtering and paging,
//! printed as plain text.
//!
//! Run with `cargo run -p tably --example headless`. Debug logs go to
//! `headless.log`.

use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use tably::{Formatter, Record, Table, Value};

#[derive(Debug, Clone, Record)]
struct Task {
    #[table("ID,sortable,width:5")]
    id: u32,
    #[table("Title,sortable,width:30")]
    title: &'static str,
    #[table("Status,sortable,width:12")]
    status: &'static str,
    #[table("Priority,sortable,width:10")]
    priority: &'static str,
    #[table("Assignee,sortable,width:15")]
    assignee: &'static str,
    #[table("Done,sortable,width:6")]
    completed: bool,
}

fn task(
    id: u32,
    title: &'static str,
    status: &'static str,
    priority: &'static str,
    assignee: &'static str,
    completed: bool,
) -> Task {
    Task {
        id,
        title,
        status,
        priority,
        assignee,
        completed,
    }
}

fn tasks() -> Vec<Task> {
    vec![
        task(1, "Implement user authentication", "In Progress", "High", "Alice", false),
        task(2, "Design database schema", "Completed", "Medium", "Bob", true),
        task(3, "Write API documentation", "Todo", "Low", "Charlie", false),
        task(4, "Set up CI/CD pipeline", "In Progress", "High", "Diana", false),
        task(5, "Create unit tests", "Todo", "Medium", "Edward", false),
        task(6, "Optimize database queries", "Completed", "High", "Fiona", true),
        task(7, "Implement caching layer", "In Progress", "Medium", "George", false),
        task(8, "Fix security vulnerabilities", "Todo", "Critical", "Helen", false),
        task(9, "Update user interface", "In Progress", "Low", "Ivan", false),
        task(10, "Deploy to production", "Todo", "Critical", "Julia", false),
    ]
}

fn status_marker(value: &Value) -> String {
    let status = value.to_string();
    match status.as_str() {
        "Completed" => format!("[x] {status}"),
        "In Progress" => format!("[~] {status}"),
        "Todo" => format!("[ ] {status}"),
        _ => status,
    }
}

fn build_table() -> Result<Table<Task>, Box<dyn std::error::Error>> {
    let data = tasks();
    let mut columns = Table::new().infer_columns(&data[0])?;
    for column in &mut columns {
        match column.key.as_str() {
            "status" => column.formatter = Formatter::custom("status", status_marker),
            "completed" => column.formatter = Formatter::boolean("yes", "no"),
            _ => {}
        }
    }
    Ok(Table::with_columns(columns).with_page_size(5).with_data(data)?)
}

fn print_page(table: &Table<Task>, page: usize, label: &str) {
    println!("== {label} (page {} of {}) ==", page + 1, table.total_pages());

    let header: Vec<String> = table
        .columns()
        .iter()
        .map(|c| pad(&c.header, c.width))
        .collect();
    println!("{}", header.join(" | "));

    for row in table.page(page) {
        let cells: Vec<String> = table
            .columns()
            .iter()
            .zip(row.cells())
            .map(|(c, cell)| pad(&c.format(cell.value()), c.width))
            .collect();
        println!("{}", cells.join(" | "));
    }
    println!();
}

fn pad(text: &str, width: u16) -> String {
    let width = usize::from(width);
    let truncated: String = text.chars().take(width).collect();
    format!("{truncated:<width$}")
}

fn main() {
    if let Ok(log_file) = File::create("headless.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let mut table = match build_table() {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    print_page(&table, 0, "Natural order");

    // Priority column: ascending, descending, then back to natural order.
    for _ in 0..3 {
        match table.cycle_sort(3) {
            Ok(Some(state)) => {
                let label = if state.descending { "Priority desc" } else { "Priority asc" };
                print_page(&table, 0, label);
            }
            Ok(None) => print_page(&table, 0, "Sort cleared"),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    let in_progress = table.filter("in progress");
    print_page(&in_progress, 0, "Filter: in progress");

    print_page(&table, 1, "Second page");
    println!("Columns: {}", table.headers().join(", "));
}
