pub mod car;
pub mod gender;
pub mod house;
pub mod page;
pub mod passport;
pub mod person;

pub use car::*;
pub use gender::*;
pub use house::*;
pub use page::*;
pub use passport::*;
pub use person::*;
