pub mod aggregate;

pub use aggregate::{Advantage, AdvantageId, AdvantageUpdateRequest};
