pub mod recipe;
pub mod recommendation;
pub mod user;

pub use recipe::*;
pub use recommendation::*;
pub use user::*;
