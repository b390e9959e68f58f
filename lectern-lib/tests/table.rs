use std::cell::RefCell;

use lectern_lib::model::{Category, Record};
use lectern_lib::table::{
    Body, CheckState, Column, ColumnSpec, DataTable, Labels, PageItem, Pagination, SortOrder,
    TableConfig, TableEvent, next_sort, render_text,
};
use lectern_lib::tree::{build_forest, flatten};

fn people() -> Vec<Record> {
    serde_json::from_str(
        r#"[
            {"id": 1, "name": "Ada", "active": true, "profile": {"city": "London"}},
            {"id": 2, "name": "Grace", "active": false},
            {"id": 3, "name": "Edsger", "active": true, "profile": {"city": null}}
        ]"#,
    )
    .unwrap()
}

#[test]
fn test_nested_keys_fall_back_to_placeholder() {
    let rows = people();
    let columns = vec![
        Column::new("name", "Name"),
        Column::new("profile.city", "City"),
        Column::new("active", "Active"),
    ];
    let view = DataTable::new(&rows, &columns).render();
    let Body::Rows(body) = view.body else {
        panic!("expected rows");
    };
    let cells: Vec<Vec<String>> = body.into_iter().map(|r| r.cells).collect();
    assert_eq!(cells[0], vec!["Ada", "London", "Yes"]);
    assert_eq!(cells[1], vec!["Grace", "-", "No"]);
    assert_eq!(cells[2], vec!["Edsger", "-", "Yes"]);
}

#[test]
fn test_custom_renderer_sees_row() {
    let rows = people();
    let columns = vec![Column::new("name", "Name").render(|value, row: &Record| {
        let name = value.and_then(|v| v.as_str()).unwrap_or("?");
        format!("#{} {}", row.get_int("id").ok().flatten().unwrap_or(0), name)
    })];
    let table = DataTable::new(&rows, &columns);
    assert_eq!(table.cell_text(&rows[1], &columns[0]), "#2 Grace");
}

#[test]
fn test_loading_wins_over_rows() {
    let rows = people();
    let columns = vec![Column::new("name", "Name")];
    let view = DataTable::new(&rows, &columns).loading(true).render();
    assert_eq!(view.body.row_count(), 1);
    assert!(matches!(view.body, Body::Loading { .. }));
}

#[test]
fn test_select_all_cycle() {
    let rows = vec![Category::new(1, None), Category::new(2, None)];
    let columns = vec![Column::new("id", "ID")];

    let none: Vec<Category> = Vec::new();
    let table = DataTable::new(&rows, &columns).selectable(&none);
    assert_eq!(table.select_all_state(), Some(CheckState::Unchecked));
    let Some(TableEvent::SelectionChanged(all)) = table.click_select_all() else {
        panic!("expected selection");
    };
    assert_eq!(all.len(), 2);

    let table = DataTable::new(&rows, &columns).selectable(&all);
    assert_eq!(table.select_all_state(), Some(CheckState::Checked));
    let event = table.click_row(&2).unwrap();
    assert_eq!(event.selected_keys(), Some(vec![1]));

    let one = vec![rows[0].clone()];
    let table = DataTable::new(&rows, &columns).selectable(&one);
    assert_eq!(table.select_all_state(), Some(CheckState::Indeterminate));
    assert_eq!(table.click_select_all().unwrap().selected_keys(), Some(vec![1, 2]));
}

#[test]
fn test_unselectable_table_ignores_checkbox_clicks() {
    let rows = vec![Category::new(1, None)];
    let columns = vec![Column::new("id", "ID")];
    let table = DataTable::new(&rows, &columns);
    assert_eq!(table.render().select_all, None);
    assert_eq!(table.click_select_all(), None);
    assert_eq!(table.click_row(&1), None);
}

#[test]
fn test_sort_flow() {
    let rows = people();
    let columns = vec![Column::new("name", "Name").sortable(), Column::new("active", "Active")];
    let requests = RefCell::new(Vec::new());
    let record = |event: &TableEvent<Record>| {
        if let TableEvent::SortRequested(key) = event {
            requests.borrow_mut().push(key.clone());
        }
    };

    {
        let table = DataTable::new(&rows, &columns)
            .sort("name", SortOrder::Asc)
            .on_event(&record);
        assert!(table.click_header("active").is_none());
        table.click_header("name");
    }

    let requests = requests.into_inner();
    assert_eq!(requests, vec!["name".to_string()]);
    assert_eq!(
        next_sort(Some(("name", SortOrder::Asc)), &requests[0]),
        ("name".to_string(), SortOrder::Desc)
    );
}

#[test]
fn test_page_navigation() {
    let rows = vec![Category::new(1, None)];
    let columns = vec![Column::new("id", "ID")];

    let first = Pagination::new(1, 3, 10, 25);
    let table = DataTable::new(&rows, &columns).pagination(&first);
    assert_eq!(table.click_previous(), None);
    assert_eq!(table.click_next(), Some(TableEvent::PageRequested(2)));
    assert_eq!(table.click_page(40), Some(TableEvent::PageRequested(40)));

    let last = Pagination::new(3, 3, 10, 25);
    let table = DataTable::new(&rows, &columns).pagination(&last);
    assert_eq!(table.click_next(), None);
    assert_eq!(table.render().pagination.unwrap().from, 21);

    let single = Pagination::new(1, 1, 10, 4);
    let table = DataTable::new(&rows, &columns).pagination(&single);
    assert!(table.render().pagination.is_none());
    assert_eq!(table.click_page(1), None);
}

#[test]
fn test_window_at_edges() {
    use PageItem::{Ellipsis, Page};

    let near_start = Pagination::new(2, 20, 10, 200).window(2, 7);
    assert_eq!(near_start, vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(20)]);

    let near_end = Pagination::new(19, 20, 10, 200).window(2, 7);
    assert_eq!(near_end, vec![Page(1), Ellipsis, Page(17), Page(18), Page(19), Page(20)]);
}

#[test]
fn test_column_specs_build_a_category_tree_table() {
    let records = vec![
        Category::new(1, None).with("name", "Science").with("is_active", true),
        Category::new(2, Some(1)).with("name", "Biology").with("is_active", false),
    ];
    let rows = flatten(&build_forest(&records), 0);
    let columns: Vec<_> = ["name:Name", "is_active:Active", "id:ID:right"]
        .iter()
        .map(|s| ColumnSpec::parse(s).to_column())
        .collect();
    let labels = Labels::default().with_yes_no("on", "off");

    let view = DataTable::new(&rows, &columns).labels(&labels).render();
    let text = render_text(&view, &TableConfig::default(), &labels);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Name       Active  ID");
    assert_eq!(lines[2], "Science    on       1");
    assert_eq!(lines[3], "  Biology  off      2");
}
