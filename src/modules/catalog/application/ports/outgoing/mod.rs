pub mod resource_query;

pub use resource_query::{RecordQuery, ResourceQuery};
