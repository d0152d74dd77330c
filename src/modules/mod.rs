pub mod catalog;
pub mod certification;
pub mod education;
pub mod experience;
pub mod profile;
pub mod skills;
pub mod training;
