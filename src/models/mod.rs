pub mod lead;

pub use lead::{EstimateRequest, Lead, ValidationError};
