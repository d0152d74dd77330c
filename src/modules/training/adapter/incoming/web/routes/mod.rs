mod dto;
mod get_training;
mod get_trainings;

pub use dto::TrainingResponse;
pub use get_training::{__path_get_training_handler, get_training_handler};
pub use get_trainings::{__path_get_trainings_handler, get_trainings_handler};
