mod cache;
mod error;
mod loader;
#[cfg(test)]
mod memory;
mod source;

pub use cache::CachedDocumentSource;
pub use error::{DataSourceError, DocumentReadError};
pub use loader::DocumentLoader;
#[cfg(test)]
pub use memory::InMemoryDocumentSource;
pub use source::{DocumentSource, FsDocumentSource};
