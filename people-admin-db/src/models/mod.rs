pub mod car;
pub mod house;
pub mod identifiable;
pub mod passport;
pub mod person;

// Re-exports
pub use car::*;
pub use house::*;
pub use identifiable::*;
pub use passport::*;
pub use person::*;
