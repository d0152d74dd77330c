pub mod json_query;

pub use json_query::{JsonRecordQuery, JsonResourceQuery};
