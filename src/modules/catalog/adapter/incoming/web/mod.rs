pub mod error_mapping;

pub use error_mapping::{map_get_error, map_list_error, map_record_error, not_found_code};
