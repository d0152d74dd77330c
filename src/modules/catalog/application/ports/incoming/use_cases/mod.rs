mod get_record;
mod get_resource;
mod list_resources;

pub use get_record::{GetRecordError, GetRecordUseCase};
pub use get_resource::{GetResourceError, GetResourceUseCase};
pub use list_resources::{ListResourcesError, ListResourcesUseCase};
