pub mod entities;
pub mod year_month;

pub use entities::TrainingItem;
pub use year_month::{InvalidYearMonth, YearMonth};
