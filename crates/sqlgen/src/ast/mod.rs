pub mod common;
pub mod cond;
pub mod query;
