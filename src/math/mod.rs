pub mod mean;
pub mod trimmed;
