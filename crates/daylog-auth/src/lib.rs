//! # daylog-auth
//!
//! Authentication and authorization for Daylog.
//!
//! ## Modules
//!
//! - `jwt`: verification of bearer tokens minted by the identity service
//! - `password`: Argon2id hashing and the minimum-length rule
//! - `principal`: the acting user as seen by guards and policies
//! - `guard`: ordered create guards (blanket blocks by display name)
//! - `policy`: owner-only mutation of logs

pub mod guard;
pub mod jwt;
pub mod password;
pub mod policy;
pub mod principal;

pub use guard::{BlockedNameGuard, CreateGuard, GuardChain};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use policy::LogPolicy;
pub use principal::Principal;
