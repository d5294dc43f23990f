//! Functional core for the contacts service.
//!
//! Everything in this crate is pure: data types, validation, request routing
//! and the storage contract. I/O lives in the `contacts` binary.

pub mod contact;
pub mod dispatch;
pub mod storage;
