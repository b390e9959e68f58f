//! Subcommand implementations. Each returns the text to print.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use lectern_lib::config::LecternConfig;
use lectern_lib::model::{Category, Record, Value};
use lectern_lib::table::{
    Alignment, Column, ColumnSpec, DataTable, ListResponse, Pagination, PaginationBar,
    SortOrder, TableRow, pagination_line, render_text,
};
use lectern_lib::tree::{TreeBuilder, TreeNode};
use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::error::CliError;

/// Read a JSON list file, bare or enveloped.
pub fn read_list<T: DeserializeOwned>(
    path: &Path,
) -> Result<(Vec<T>, Option<Pagination>), CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let response: ListResponse<T> =
        serde_json::from_str(&contents).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let (rows, page) = response.into_parts();
    debug!(
        "read {} rows from {} (paginated: {})",
        rows.len(),
        path.display(),
        page.is_some()
    );
    Ok((rows, page))
}

/// Category tree as an indented table, or `depth id name` lines when `flat`.
pub fn categories(
    records: &[Category],
    config: &LecternConfig,
    flat: bool,
) -> Result<String, CliError> {
    let rows = TreeBuilder::new(config.tree.clone()).build(records)?;
    info!("built category tree with {} rows", rows.len());

    if flat {
        let lines: Vec<String> = rows
            .iter()
            .map(|node| {
                let name = node.record.name().unwrap_or(&config.labels.placeholder);
                format!("{} {} {}", node.depth, node.record.id(), name)
            })
            .collect();
        return Ok(lines.iter().map(|l| format!("{}\n", l)).collect());
    }

    let (yes, no) = (config.labels.yes.clone(), config.labels.no.clone());
    let placeholder = config.labels.placeholder.clone();
    let columns: Vec<Column<TreeNode<Category>>> = vec![
        Column::new("name", "Name").render(move |_, node: &TreeNode<Category>| {
            let name = node.record.name().unwrap_or(&placeholder);
            match node.record.icon() {
                Some(icon) => format!("{} {}", icon.glyph(), name),
                None => name.to_string(),
            }
        }),
        Column::new("id", "ID").align(Alignment::Right),
        Column::new("is_active", "Active").render(move |_, node: &TreeNode<Category>| {
            if node.record.is_active() { yes.clone() } else { no.clone() }
        }),
    ];

    let view = DataTable::new(&rows, &columns)
        .labels(&config.labels)
        .config(config.table)
        .render();
    Ok(render_text(&view, &config.table, &config.labels))
}

/// Options for the `table` subcommand.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// `key[:title[:align]]` column specs. Empty means every field of the first row.
    pub columns: Vec<String>,
    pub sort_by: Option<String>,
    pub order: SortOrder,
    /// Keys of the selected rows. Empty hides the checkbox column.
    pub select: Vec<String>,
}

/// Generic record table with selection and pagination bar.
pub fn table(
    mut rows: Vec<Record>,
    page: Option<Pagination>,
    options: &TableOptions,
    config: &LecternConfig,
) -> Result<String, CliError> {
    let specs: Vec<ColumnSpec> = if options.columns.is_empty() {
        rows.first()
            .map(|row| row.fields().keys().map(|k| ColumnSpec::parse(k)).collect())
            .unwrap_or_default()
    } else {
        options.columns.iter().map(|c| ColumnSpec::parse(c)).collect()
    };
    if specs.is_empty() {
        return Err(CliError::InvalidArgument(
            "no columns given and no rows to infer them from".to_string(),
        ));
    }
    let mut columns: Vec<Column<Record>> = specs.iter().map(ColumnSpec::to_column).collect();

    // The CLI owns the data, so it applies the sort the header advertises.
    if let Some(key) = options.sort_by.as_deref() {
        let Some(column) = columns.iter_mut().find(|c| c.key == key) else {
            return Err(CliError::InvalidArgument(format!(
                "cannot sort by '{}': not a column",
                key
            )));
        };
        column.sortable = true;
        rows.sort_by(|a, b| compare_values(a.value(key).as_ref(), b.value(key).as_ref()));
        if options.order == SortOrder::Desc {
            rows.reverse();
        }
    }

    let wanted: HashSet<&str> = options.select.iter().map(String::as_str).collect();
    let selected: Vec<Record> = rows
        .iter()
        .filter(|row| wanted.contains(row.key().as_str()))
        .cloned()
        .collect();
    if selected.len() < wanted.len() {
        debug!(
            "{} selected keys matched no row",
            wanted.len() - selected.len()
        );
    }

    let mut table = DataTable::new(&rows, &columns)
        .labels(&config.labels)
        .config(config.table);
    if !options.select.is_empty() {
        table = table.selectable(&selected);
    }
    if let Some(key) = options.sort_by.as_deref() {
        table = table.sort(key, options.order);
    }
    if let Some(page) = &page {
        table = table.pagination(page);
    }

    Ok(render_text(&table.render(), &config.table, &config.labels))
}

/// The page-number bar for `current` of `last`.
pub fn pages(current: u32, last: u32, delta: Option<u32>, config: &LecternConfig) -> String {
    let mut table_config = config.table;
    if let Some(delta) = delta {
        table_config = table_config.with_page_delta(delta);
    }
    let page = Pagination::new(current, last, 1, u64::from(last));
    pagination_line(&PaginationBar::new(&page, &table_config))
}

/// Missing and null sort first; mixed types compare by display text.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Int(x)), Some(Value::Int(y))) => x.cmp(y),
        (Some(Value::Float(x)), Some(Value::Float(y))) => x.total_cmp(y),
        (Some(Value::Int(x)), Some(Value::Float(y))) => (*x as f64).total_cmp(y),
        (Some(Value::Float(x)), Some(Value::Int(y))) => x.total_cmp(&(*y as f64)),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::DateTime(x)), Some(Value::DateTime(y))) => x.cmp(y),
        (Some(x), Some(y)) if !x.is_null() && !y.is_null() => x.to_string().cmp(&y.to_string()),
        _ => is_present(a).cmp(&is_present(b)),
    }
}

fn is_present(value: Option<&Value>) -> bool {
    value.is_some_and(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(json: &str) -> Vec<Record> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_flat_categories() {
        let records = vec![
            Category::new(1, None).with("name", "Books"),
            Category::new(2, Some(1)).with("name", "Poetry"),
            Category::new(3, Some(42)),
        ];
        let out = categories(&records, &LecternConfig::default(), true).unwrap();
        assert_eq!(out, "0 1 Books\n1 2 Poetry\n0 3 -\n");
    }

    #[test]
    fn test_strict_categories_fail_on_duplicates() {
        let records = vec![Category::new(1, None), Category::new(1, None)];
        let mut config = LecternConfig::default();
        config.tree.strict = true;
        assert!(matches!(
            categories(&records, &config, false),
            Err(CliError::Tree(_))
        ));
    }

    #[test]
    fn test_category_table_shows_icon_and_status() {
        let records = vec![
            Category::new(1, None).with("name", "Books").with("icon", "book"),
            Category::new(2, Some(1)).with("name", "Poetry").with("is_active", false),
        ];
        let out = categories(&records, &LecternConfig::default(), false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[2].contains("Books"));
        assert!(lines[2].ends_with("Yes"));
        assert!(lines[3].starts_with("  Poetry"));
        assert!(lines[3].ends_with("No"));
    }

    #[test]
    fn test_table_sorts_and_selects() {
        let rows = records(
            r#"[
                {"id": 1, "name": "Ada", "age": 36},
                {"id": 2, "name": "Grace", "age": 85},
                {"id": 3, "name": "Alan"}
            ]"#,
        );
        let options = TableOptions {
            columns: vec!["name".to_string(), "age:Age:right".to_string()],
            sort_by: Some("age".to_string()),
            order: SortOrder::Desc,
            select: vec!["2".to_string()],
        };
        let out = table(rows, None, &options, &LecternConfig::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "[-]  Name   Age ▼");
        assert_eq!(lines[2], "[x]  Grace     85");
        assert_eq!(lines[3], "[ ]  Ada       36");
        assert_eq!(lines[4], "[ ]  Alan       -");
    }

    #[test]
    fn test_table_infers_columns() {
        let rows = records(r#"[{"id": 7, "title": "Dune"}]"#);
        let out = table(rows, None, &TableOptions::default(), &LecternConfig::default()).unwrap();
        assert!(out.starts_with("Id  Title"));
    }

    #[test]
    fn test_table_rejects_unknown_sort_key() {
        let rows = records(r#"[{"id": 1}]"#);
        let options = TableOptions {
            sort_by: Some("missing".to_string()),
            ..TableOptions::default()
        };
        assert!(matches!(
            table(rows, None, &options, &LecternConfig::default()),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_pages() {
        let config = LecternConfig::default();
        assert_eq!(pages(10, 20, None, &config), "‹ 1 … 8 9 [10] 11 12 … 20 ›");
        assert_eq!(pages(10, 20, Some(1), &config), "‹ 1 … 9 [10] 11 … 20 ›");
        assert_eq!(pages(3, 3, None, &config), "‹ 1 2 [3]");
    }

    #[test]
    fn test_read_enveloped_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(
            &path,
            r#"{"data": [{"id": 1}, {"id": 2}], "current_page": 1, "last_page": 2,
                "per_page": 2, "total": 3}"#,
        )
        .unwrap();

        let (rows, page) = read_list::<Record>(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(page.map(|p| p.last_page), Some(2));
    }

    #[test]
    fn test_missing_file() {
        let err = read_list::<Record>(Path::new("/nonexistent/list.json")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
