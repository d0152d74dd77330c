mod dto;
mod get_certification;
mod get_certifications;

pub use dto::CertificationResponse;
pub use get_certification::{__path_get_certification_handler, get_certification_handler};
pub use get_certifications::{__path_get_certifications_handler, get_certifications_handler};
