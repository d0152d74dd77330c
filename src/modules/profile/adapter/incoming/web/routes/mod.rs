mod dto;
mod get_contact_info;
mod get_personal_info;

pub use dto::{ContactInfoResponse, PersonalInfoResponse};
pub use get_contact_info::{__path_get_contact_info_handler, get_contact_info_handler};
pub use get_personal_info::{__path_get_personal_info_handler, get_personal_info_handler};
