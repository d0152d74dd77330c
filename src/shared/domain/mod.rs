mod errors;
mod language;

pub use errors::ResourceNotFound;
pub use language::{InvalidLanguage, Language};
