//! Generic table engine behind every list page.
//!
//! Rows stay owned by the caller; the engine only holds per-table state
//! (sort, search text, column filters, page) and produces a `TableView`
//! of borrowed rows for the current page. Everything here is synchronous
//! and runs over the rows already fetched from the server.
//!
//! Pipeline order for `TableEngine::view`:
//! 1. column filters (allowed-value sets)
//! 2. free-text search on the designated search column
//! 3. stable sort on the active sort column
//! 4. page slice

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Cell content as seen by sorting, filtering and searching
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn optional_text(value: Option<&str>) -> Self {
        match value {
            Some(v) => CellValue::Text(v.to_string()),
            None => CellValue::Empty,
        }
    }

    /// String form used for search matching and default cell rendering
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Int(v) => v.to_string(),
            CellValue::Float(v) => {
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    format!("{}", *v as i64)
                } else {
                    v.to_string()
                }
            }
            CellValue::Text(v) => v.clone(),
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Total order: empty cells first, then numbers, then text
    pub fn compare(&self, other: &CellValue) -> Ordering {
        fn rank(value: &CellValue) -> u8 {
            match value {
                CellValue::Empty => 0,
                CellValue::Int(_) | CellValue::Float(_) => 1,
                CellValue::Text(_) => 2,
            }
        }

        match (self, other) {
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => rank(self).cmp(&rank(other)),
            },
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

/// Keep a row when its value is one of the allowed values
pub fn one_of(value: &CellValue, allowed: &[CellValue]) -> bool {
    allowed.iter().any(|candidate| candidate == value)
}

/// Describes one column of a table over rows of type `R`
pub struct ColumnSpec<R> {
    /// Field name, also used as the sort/filter/search key
    pub key: &'static str,
    pub header: &'static str,
    pub accessor: fn(&R) -> CellValue,
    pub formatter: Option<fn(&CellValue) -> String>,
    pub filter: Option<fn(&CellValue, &[CellValue]) -> bool>,
    pub sortable: bool,
}

impl<R> ColumnSpec<R> {
    pub fn new(key: &'static str, header: &'static str, accessor: fn(&R) -> CellValue) -> Self {
        Self {
            key,
            header,
            accessor,
            formatter: None,
            filter: None,
            sortable: true,
        }
    }

    pub fn with_formatter(mut self, formatter: fn(&CellValue) -> String) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Enable the allowed-value filter for this column
    pub fn filterable(self) -> Self {
        self.with_filter(one_of)
    }

    pub fn with_filter(mut self, filter: fn(&CellValue, &[CellValue]) -> bool) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    /// Rendered cell text, using the custom formatter when present
    pub fn render(&self, row: &R) -> String {
        self.render_value(&self.value(row))
    }

    /// Format an already extracted value, e.g. a filter option label
    pub fn render_value(&self, value: &CellValue) -> String {
        match self.formatter {
            Some(format) => format(value),
            None => value.display(),
        }
    }
}

impl<R> Clone for ColumnSpec<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header,
            accessor: self.accessor,
            formatter: self.formatter,
            filter: self.filter,
            sortable: self.sortable,
        }
    }
}

// Columns are identified by key and header; function pointers are not compared.
impl<R> PartialEq for ColumnSpec<R> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.header == other.header
            && self.sortable == other.sortable
            && self.formatter.is_some() == other.formatter.is_some()
            && self.filter.is_some() == other.filter.is_some()
    }
}

impl<R> fmt::Debug for ColumnSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("filterable", &self.filter.is_some())
            .field("sortable", &self.sortable)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: &'static str,
    pub direction: SortDirection,
}

/// Interactive state of one table instance
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub sort: Option<SortState>,
    pub search: String,
    pub column_filters: BTreeMap<&'static str, Vec<CellValue>>,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sort: None,
            search: String::new(),
            column_filters: BTreeMap::new(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The rows visible on the current page plus pagination metadata
#[derive(Debug, PartialEq)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    pub total_rows: usize,
    pub filtered_rows: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

/// Sort/filter/search/paginate engine for rows of type `R`
#[derive(Debug, Clone, PartialEq)]
pub struct TableEngine<R> {
    columns: Vec<ColumnSpec<R>>,
    search_key: Option<&'static str>,
    state: TableState,
}

impl<R> TableEngine<R> {
    pub fn new(columns: Vec<ColumnSpec<R>>, search_key: Option<&'static str>) -> Self {
        Self {
            columns,
            search_key,
            state: TableState::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.set_page_size(page_size);
        self
    }

    pub fn columns(&self) -> &[ColumnSpec<R>] {
        &self.columns
    }

    pub fn column(&self, key: &str) -> Option<&ColumnSpec<R>> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn search_key(&self) -> Option<&'static str> {
        self.search_key
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Advance the sort cycle for `key`: none, ascending, descending, none.
    ///
    /// Selecting a different column starts that column at ascending.
    pub fn toggle_sort(&mut self, key: &'static str) {
        if !self.column(key).map(|c| c.sortable).unwrap_or(false) {
            return;
        }
        self.state.sort = match self.state.sort.take() {
            Some(SortState { key: current, direction }) if current == key => match direction {
                SortDirection::Ascending => Some(SortState {
                    key,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortState {
                key,
                direction: SortDirection::Ascending,
            }),
        };
    }

    pub fn sort_direction(&self, key: &str) -> Option<SortDirection> {
        self.state
            .sort
            .as_ref()
            .filter(|s| s.key == key)
            .map(|s| s.direction)
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state.search = text.into();
        self.state.page_index = 0;
    }

    /// Restrict `key` to the allowed values; an empty set clears the filter
    pub fn set_column_filter(&mut self, key: &'static str, allowed: Vec<CellValue>) {
        if allowed.is_empty() {
            self.state.column_filters.remove(key);
        } else {
            self.state.column_filters.insert(key, allowed);
        }
        self.state.page_index = 0;
    }

    /// Add or remove a single allowed value for `key`
    pub fn toggle_filter_value(&mut self, key: &'static str, value: CellValue) {
        let mut allowed = self
            .state
            .column_filters
            .get(key)
            .cloned()
            .unwrap_or_default();
        if let Some(pos) = allowed.iter().position(|v| *v == value) {
            allowed.remove(pos);
        } else {
            allowed.push(value);
        }
        self.set_column_filter(key, allowed);
    }

    pub fn column_filter(&self, key: &str) -> Option<&[CellValue]> {
        self.state.column_filters.get(key).map(|v| v.as_slice())
    }

    pub fn clear_filters(&mut self) {
        self.state.column_filters.clear();
        self.state.search.clear();
        self.state.page_index = 0;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.state.page_size = page_size.max(1);
        self.state.page_index = 0;
    }

    /// Move forward one page; callers check `TableView::can_next` first
    pub fn next_page(&mut self, rows: &[R]) {
        let page_count = self.page_count(self.filtered(rows).len());
        if self.state.page_index + 1 < page_count {
            self.state.page_index += 1;
        }
    }

    /// Move back one page from the page `view` would show for `rows`
    pub fn previous_page(&mut self, rows: &[R]) {
        let last = self.page_count(self.filtered(rows).len()).saturating_sub(1);
        self.state.page_index = self.state.page_index.min(last).saturating_sub(1);
    }

    fn page_count(&self, filtered_rows: usize) -> usize {
        filtered_rows.div_ceil(self.state.page_size)
    }

    fn matches_filters(&self, row: &R) -> bool {
        self.state.column_filters.iter().all(|(key, allowed)| {
            match self.column(key) {
                Some(column) => {
                    let predicate = column.filter.unwrap_or(one_of);
                    predicate(&column.value(row), allowed)
                }
                None => true,
            }
        })
    }

    fn matches_search(&self, row: &R) -> bool {
        let needle = self.state.search.trim();
        if needle.is_empty() {
            return true;
        }
        match self.search_key.and_then(|key| self.column(key)) {
            Some(column) => column
                .value(row)
                .display()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        }
    }

    /// Rows passing filters and search, sorted, in full (not paginated)
    pub fn filtered<'a>(&self, rows: &'a [R]) -> Vec<&'a R> {
        let mut kept: Vec<&'a R> = rows
            .iter()
            .filter(|row| self.matches_filters(row) && self.matches_search(row))
            .collect();

        if let Some(sort) = &self.state.sort {
            if let Some(column) = self.column(sort.key) {
                // sort_by is stable, so ties keep their loaded order
                kept.sort_by(|a, b| {
                    let ordering = column.value(a).compare(&column.value(b));
                    match sort.direction {
                        SortDirection::Ascending => ordering,
                        SortDirection::Descending => ordering.reverse(),
                    }
                });
            }
        }

        kept
    }

    /// Compute the visible page for the current state
    pub fn view<'a>(&self, rows: &'a [R]) -> TableView<'a, R> {
        let kept = self.filtered(rows);
        let filtered_rows = kept.len();
        let page_count = self.page_count(filtered_rows);
        let page_index = self.state.page_index.min(page_count.saturating_sub(1));

        let start = page_index * self.state.page_size;
        let page_rows = kept
            .into_iter()
            .skip(start)
            .take(self.state.page_size)
            .collect();

        TableView {
            rows: page_rows,
            total_rows: rows.len(),
            filtered_rows,
            page_index,
            page_count,
            can_previous: page_index > 0,
            can_next: page_index + 1 < page_count,
        }
    }

    /// Distinct values of a column in first-seen order, for filter options
    pub fn distinct_values(&self, rows: &[R], key: &str) -> Vec<CellValue> {
        let Some(column) = self.column(key) else {
            return Vec::new();
        };
        let mut values: Vec<CellValue> = Vec::new();
        for row in rows {
            let value = column.value(row);
            if !values.contains(&value) {
                values.push(value);
            }
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        year: i64,
        section: &'static str,
    }

    fn row(name: &'static str, year: i64, section: &'static str) -> Row {
        Row { name, year, section }
    }

    fn columns() -> Vec<ColumnSpec<Row>> {
        vec![
            ColumnSpec::new("name", "Name", |r: &Row| CellValue::from(r.name)),
            ColumnSpec::new("year", "Year", |r: &Row| CellValue::Int(r.year)).filterable(),
            ColumnSpec::new("section", "Section", |r: &Row| CellValue::from(r.section))
                .filterable(),
        ]
    }

    fn sample() -> Vec<Row> {
        vec![
            row("Anand", 3, "A"),
            row("Arun", 1, "B"),
            row("Svana", 3, "B"),
            row("Bhavya", 2, "A"),
            row("Chetan", 3, "A"),
            row("Divya", 4, "C"),
        ]
    }

    fn names(view: &TableView<'_, Row>) -> Vec<&'static str> {
        view.rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_year_filter_keeps_only_allowed_rows_in_order() {
        let rows = sample();
        let mut engine = TableEngine::new(columns(), Some("name"));
        engine.set_column_filter("year", vec![CellValue::Int(3)]);

        let view = engine.view(&rows);
        assert_eq!(names(&view), vec!["Anand", "Svana", "Chetan"]);
        assert_eq!(view.filtered_rows, 3);
        assert_eq!(view.total_rows, 6);
    }

    #[test]
    fn test_multiple_column_filters_combine() {
        let rows = sample();
        let mut engine = TableEngine::new(columns(), Some("name"));
        engine.set_column_filter("year", vec![CellValue::Int(3), CellValue::Int(2)]);
        engine.set_column_filter("section", vec![CellValue::from("A")]);

        assert_eq!(names(&engine.view(&rows)), vec!["Anand", "Bhavya", "Chetan"]);
    }

    #[test]
    fn test_empty_filter_set_clears_filter() {
        let rows = sample();
        let mut engine = TableEngine::new(columns(), Some("name"));
        engine.set_column_filter("year", vec![CellValue::Int(1)]);
        assert_eq!(engine.view(&rows).filtered_rows, 1);

        engine.set_column_filter("year", Vec::new());
        assert_eq!(engine.view(&rows).filtered_rows, 6);
        assert!(engine.column_filter("year").is_none());
    }

    #[test]
    fn test_toggle_filter_value() {
        let rows = sample();
        let mut engine = TableEngine::new(columns(), None);
        engine.toggle_filter_value("section", CellValue::from("C"));
        assert_eq!(names(&engine.view(&rows)), vec!["Divya"]);

        engine.toggle_filter_value("section", CellValue::from("C"));
        assert_eq!(engine.view(&rows).filtered_rows, 6);
    }

    #[test]
    fn test_search_matches_substring_ignoring_case() {
        let rows = sample();
        let mut engine = TableEngine::new(columns(), Some("name"));
        engine.set_search("ana");

        assert_eq!(names(&engine.view(&rows)), vec!["Anand", "Svana"]);
    }

    #[test]
    fn test_search_without_search_key_keeps_everything() {
        let rows = sample();
        let mut engine = TableEngine::new(columns(), None);
        engine.set_search("zzz");
        assert_eq!(engine.view(&rows).filtered_rows, 6);
    }

    #[test]
    fn test_clear_filters_drops_search_and_column_filters() {
        let rows = sample();
        let mut engine = TableEngine::new(columns(), Some("name"));
        engine.set_column_filter("year", vec![CellValue::Int(1)]);
        engine.set_search("zzz");
        assert_eq!(engine.view(&rows).filtered_rows, 0);

        engine.clear_filters();
        assert!(engine.state().search.is_empty());
        assert!(engine.column_filter("year").is_none());
        assert_eq!(engine.view(&rows).filtered_rows, 6);
    }

    #[test]
    fn test_sort_cycle_is_ascending_descending_none() {
        let rows = sample();
        let mut engine = TableEngine::new(columns(), Some("name"));

        engine.toggle_sort("year");
        assert_eq!(engine.sort_direction("year"), Some(SortDirection::Ascending));
        assert_eq!(
            names(&engine.view(&rows)),
            vec!["Arun", "Bhavya", "Anand", "Svana", "Chetan", "Divya"]
        );

        engine.toggle_sort("year");
        assert_eq!(engine.sort_direction("year"), Some(SortDirection::Descending));
        assert_eq!(
            names(&engine.view(&rows)),
            vec!["Divya", "Anand", "Svana", "Chetan", "Bhavya", "Arun"]
        );

        engine.toggle_sort("year");
        assert_eq!(engine.sort_direction("year"), None);
        assert_eq!(
            names(&engine.view(&rows)),
            vec!["Anand", "Arun", "Svana", "Bhavya", "Chetan", "Divya"]
        );
    }

    #[test]
    fn test_sorting_another_column_starts_ascending() {
        let rows = sample();
        let mut engine = TableEngine::new(columns(), Some("name"));
        engine.toggle_sort("year");
        engine.toggle_sort("year");
        engine.toggle_sort("name");

        assert_eq!(engine.sort_direction("name"), Some(SortDirection::Ascending));
        assert_eq!(engine.sort_direction("year"), None);
        assert_eq!(names(&engine.view(&rows))[0], "Anand");
    }

    #[test]
    fn test_unsortable_column_ignores_toggle() {
        let mut cols = columns();
        cols.push(ColumnSpec::new("actions", "Actions", |_: &Row| CellValue::Empty).unsortable());
        let mut engine = TableEngine::new(cols, None);
        engine.toggle_sort("actions");
        assert!(engine.state().sort.is_none());
    }

    #[test]
    fn test_pagination_page_count_and_buttons() {
        let rows: Vec<Row> = (0..23).map(|i| row("Student", i % 4 + 1, "A")).collect();
        let mut engine = TableEngine::new(columns(), Some("name"));

        let first = engine.view(&rows);
        assert_eq!(first.page_count, 3);
        assert_eq!(first.rows.len(), 10);
        assert!(!first.can_previous);
        assert!(first.can_next);

        engine.next_page(&rows);
        let middle = engine.view(&rows);
        assert_eq!(middle.page_index, 1);
        assert!(middle.can_previous);
        assert!(middle.can_next);

        engine.next_page(&rows);
        let last = engine.view(&rows);
        assert_eq!(last.page_index, 2);
        assert_eq!(last.rows.len(), 3);
        assert!(last.can_previous);
        assert!(!last.can_next);

        // Next on the last page is a no-op
        engine.next_page(&rows);
        assert_eq!(engine.view(&rows).page_index, 2);

        engine.previous_page(&rows);
        engine.previous_page(&rows);
        engine.previous_page(&rows);
        assert_eq!(engine.view(&rows).page_index, 0);
    }

    #[test]
    fn test_page_count_with_custom_page_size() {
        let rows: Vec<Row> = (0..10).map(|_| row("X", 1, "A")).collect();
        let engine = TableEngine::new(columns(), None).with_page_size(5);
        let view = engine.view(&rows);
        assert_eq!(view.page_count, 2);
        assert!(view.can_next);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let rows: Vec<Row> = (0..25).map(|i| row("Row", i % 2 + 1, "A")).collect();
        let mut engine = TableEngine::new(columns(), Some("name"));
        engine.next_page(&rows);
        engine.next_page(&rows);
        assert_eq!(engine.state().page_index, 2);

        engine.set_column_filter("year", vec![CellValue::Int(1)]);
        assert_eq!(engine.state().page_index, 0);

        engine.next_page(&rows);
        engine.set_search("row");
        assert_eq!(engine.state().page_index, 0);
    }

    #[test]
    fn test_view_clamps_page_when_rows_shrink() {
        let rows: Vec<Row> = (0..25).map(|_| row("Row", 1, "A")).collect();
        let mut engine = TableEngine::new(columns(), None);
        engine.next_page(&rows);
        engine.next_page(&rows);

        let fewer = &rows[..12];
        let view = engine.view(fewer);
        assert_eq!(view.page_index, 1);
        assert_eq!(view.rows.len(), 2);
        assert!(!view.can_next);
    }

    #[test]
    fn test_previous_page_steps_back_from_clamped_page() {
        let rows: Vec<Row> = (0..25).map(|_| row("Row", 1, "A")).collect();
        let mut engine = TableEngine::new(columns(), None);
        engine.next_page(&rows);
        engine.next_page(&rows);
        assert_eq!(engine.state().page_index, 2);

        let fewer = &rows[..20];
        let view = engine.view(fewer);
        assert_eq!(view.page_index, 1);
        assert!(view.can_previous);

        engine.previous_page(fewer);
        assert_eq!(engine.state().page_index, 0);
        assert_eq!(engine.view(fewer).page_index, 0);

        engine.previous_page(fewer);
        assert_eq!(engine.state().page_index, 0);
    }

    #[test]
    fn test_empty_rows_have_no_pages() {
        let rows: Vec<Row> = Vec::new();
        let engine = TableEngine::new(columns(), Some("name"));
        let view = engine.view(&rows);
        assert!(view.rows.is_empty());
        assert_eq!(view.page_count, 0);
        assert!(!view.can_previous);
        assert!(!view.can_next);
    }

    #[test]
    fn test_distinct_values_in_first_seen_order() {
        let rows = sample();
        let engine = TableEngine::new(columns(), None);
        assert_eq!(
            engine.distinct_values(&rows, "year"),
            vec![CellValue::Int(3), CellValue::Int(1), CellValue::Int(2), CellValue::Int(4)]
        );
        assert!(engine.distinct_values(&rows, "missing").is_empty());
    }

    #[test]
    fn test_cell_value_display_and_compare() {
        assert_eq!(CellValue::Float(90.0).display(), "90");
        assert_eq!(CellValue::Float(52.5).display(), "52.5");
        assert_eq!(CellValue::Float(1e20).display(), "100000000000000000000");
        assert_eq!(CellValue::Float(-3.0).display(), "-3");
        assert_eq!(CellValue::Empty.display(), "");
        assert_eq!(CellValue::Int(2).compare(&CellValue::Float(2.5)), Ordering::Less);
        assert_eq!(CellValue::Empty.compare(&CellValue::Int(0)), Ordering::Less);
        assert_eq!(CellValue::Int(9).compare(&CellValue::from("a")), Ordering::Less);
    }

    #[test]
    fn test_custom_formatter_is_used_for_rendering() {
        let column = ColumnSpec::new("year", "Year", |r: &Row| CellValue::Int(r.year))
            .with_formatter(|v| format!("Year {}", v));
        assert_eq!(column.render(&row("A", 2, "A")), "Year 2");
        assert_eq!(column.render_value(&CellValue::Int(4)), "Year 4");
    }
}
