pub mod entities;

pub use entities::CertificationItem;
