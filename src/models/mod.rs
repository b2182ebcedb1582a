//! Data models matching the frontend type definitions.

mod recipe;
mod review;
mod user;

pub use recipe::*;
pub use review::*;
pub use user::*;
