pub mod emit;
pub mod types;
