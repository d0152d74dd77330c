mod get_record_service;
mod get_resource_service;
mod guard;
mod list_resources_service;

pub use get_record_service::GetRecordService;
pub use get_resource_service::GetResourceService;
pub use guard::{run_guarded, UseCaseExecutionError};
pub use list_resources_service::ListResourcesService;
