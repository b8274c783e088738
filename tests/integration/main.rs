//! HTTP-level integration tests against the in-memory record store, plus
//! record store tests that need a live PostgreSQL database.

mod helpers;
mod logs;
mod postgres;
mod users;
