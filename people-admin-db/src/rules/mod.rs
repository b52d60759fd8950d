pub mod bulk_shift;
pub mod expiry;

pub use bulk_shift::*;
pub use expiry::*;
