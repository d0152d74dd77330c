pub mod entities;

pub use entities::EducationItem;
