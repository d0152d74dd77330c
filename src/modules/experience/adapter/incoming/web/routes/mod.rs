mod dto;
mod get_experience;
mod get_experiences;

pub use dto::ExperienceResponse;
pub use get_experience::{__path_get_experience_handler, get_experience_handler};
pub use get_experiences::{__path_get_experiences_handler, get_experiences_handler};
