use std::fmt::Display;

use crate::SortKey;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A record the table can display.
pub trait TableRow: Clone + Send + Sync + 'static {
    /// Column titles, in display order.
    fn columns() -> &'static [&'static str];
    fn sort_key(&self, column: usize) -> SortKey;
    /// Text the filter box matches against.
    fn search_text(&self) -> String;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    /// Zero based
    pub page: usize,
    pub page_count: usize,
    /// One based position of the first row shown, 0 when nothing is shown
    pub first: usize,
    pub last: usize,
    pub filtered: usize,
    pub total: usize,
}

impl Display for PageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.first, self.last, self.filtered
        )?;
        if self.filtered != self.total {
            write!(f, " (filtered from {} total entries)", self.total)?;
        }
        Ok(())
    }
}

/// Sort, filter and paging state over a set of rows.
///
/// Changing the rows does not re-index anything by itself, callers finish a batch of changes
/// with [`DataTable::draw`].
#[derive(Clone, Debug)]
pub struct DataTable<R> {
    rows: Vec<R>,
    sort: Option<(usize, SortDirection)>,
    filter: String,
    page_size: usize,
    page: usize,
    initialized: bool,
    draws: u64,
}

impl<R> Default for DataTable<R>
where
    R: TableRow,
{
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<R> DataTable<R>
where
    R: TableRow,
{
    pub fn new(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            sort: None,
            filter: String::new(),
            page_size: page_size.max(1),
            page: 0,
            initialized: false,
            draws: 0,
        }
    }

    /// Takes over the table, the first call performs the initial draw.
    pub fn initialize(&mut self) {
        if !self.initialized {
            self.initialized = true;
            self.draw();
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn replace_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    pub fn push_row(&mut self, row: R) {
        self.rows.push(row);
    }

    /// Re-indexes the current rows and keeps the page inside the filtered range.
    pub fn draw(&mut self) {
        let last_page = self.page_count() - 1;
        self.page = self.page.min(last_page);
        self.draws += 1;
    }

    pub fn draw_count(&self) -> u64 {
        self.draws
    }

    /// All rows in the order they were added.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn sort_state(&self) -> Option<(usize, SortDirection)> {
        self.sort
    }

    /// Ascending on first click, then flips direction. A new column always starts ascending.
    pub fn toggle_sort(&mut self, column: usize) {
        if column >= R::columns().len() {
            log::warn!("ignoring sort on unknown column {column}");
            return;
        }
        self.sort = match self.sort {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
        self.page = 0;
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page = 0;
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    pub fn has_next_page(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    fn matches_filter(&self, row: &R) -> bool {
        let needle = self.filter.trim().to_lowercase();
        needle.is_empty() || row.search_text().to_lowercase().contains(&needle)
    }

    /// Indices into [`DataTable::rows`] after filtering and sorting.
    fn ordered_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.matches_filter(row))
            .map(|(index, _)| index)
            .collect();
        if let Some((column, direction)) = self.sort {
            let keys: Vec<SortKey> = self.rows.iter().map(|r| r.sort_key(column)).collect();
            // stable, so equal keys keep the order the rows arrived in
            indices.sort_by(|a, b| {
                let ordering = keys[*a].compare(&keys[*b]);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        indices
    }

    fn filtered_len(&self) -> usize {
        self.rows.iter().filter(|row| self.matches_filter(row)).count()
    }

    pub fn page_count(&self) -> usize {
        self.filtered_len().div_ceil(self.page_size).max(1)
    }

    pub fn page_info(&self) -> PageInfo {
        let filtered = self.filtered_len();
        let start = self.page * self.page_size;
        let last = (start + self.page_size).min(filtered);
        PageInfo {
            page: self.page,
            page_count: self.page_count(),
            first: if last > start { start + 1 } else { 0 },
            last,
            filtered,
            total: self.rows.len(),
        }
    }

    /// The rows on the current page.
    pub fn visible_rows(&self) -> Vec<R> {
        self.ordered_indices()
            .into_iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .map(|index| self.rows[index].clone())
            .collect()
    }
}
