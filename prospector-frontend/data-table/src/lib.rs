//! Interactive table widget: sorting, filtering and paging over any [`TableRow`].

mod sort_key;
mod table;
mod view;

pub use sort_key::SortKey;
pub use table::{DataTable, PageInfo, SortDirection, TableRow, DEFAULT_PAGE_SIZE};
pub use view::DataTableView;
