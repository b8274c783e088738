//! Core type definitions used across the Daylog workspace.

pub mod id;

pub use id::*;
