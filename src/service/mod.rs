pub mod column_translator;
pub mod directory_comparer;
pub mod explorer_types;
pub mod settings;
pub mod sort_order_resolver;

pub use explorer_types::{OrderingKey, ResolvedSortOrder, SortConfig, SortDirection};
pub use sort_order_resolver::{resolve, resolve_async, SortOrderResolver};
