pub mod aggregate;

pub use aggregate::{CompanyProfile, DEFAULT_COMPANY_NAME};
