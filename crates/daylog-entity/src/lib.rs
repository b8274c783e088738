//! # daylog-entity
//!
//! Domain entity models for Daylog. Every struct in this crate represents
//! a database table row or a value object passed to the record store.
//! Row types derive `sqlx::FromRow`; read transforms (display-name
//! normalization, date materialization) are plain functions so they can
//! be applied independently of any storage backend.

pub mod audit;
pub mod log;
pub mod user;
