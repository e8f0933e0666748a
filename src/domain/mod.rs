pub mod user;
pub mod product;
pub mod order;
mod wire;

pub use user::*;
pub use product::*;
pub use order::*;
