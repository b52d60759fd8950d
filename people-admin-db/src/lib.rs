pub mod models;
pub mod repository;
pub mod rules;
pub mod utils;

pub use models::*;
pub use rules::*;
