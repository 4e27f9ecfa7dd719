pub mod audience;
pub mod core;
pub mod errors;
