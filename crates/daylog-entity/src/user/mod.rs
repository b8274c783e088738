//! User domain entities.

pub mod model;
pub mod transform;

pub use model::{NewUser, User};
pub use transform::title_case;
