mod dto;
mod get_education;
mod get_educations;

pub use dto::EducationResponse;
pub use get_education::{__path_get_education_handler, get_education_handler};
pub use get_educations::{__path_get_educations_handler, get_educations_handler};
