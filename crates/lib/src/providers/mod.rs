pub mod factory;
pub mod summarize;
