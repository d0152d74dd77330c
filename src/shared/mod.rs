pub mod api;
pub mod correlation;
pub mod documents;
pub mod domain;
