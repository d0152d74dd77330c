pub mod entities;
pub mod ordering;

pub use entities::{CatalogItem, Document};
pub use ordering::newest_first;
