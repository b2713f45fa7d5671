//! dotdash CLI library.
//!
//! Command implementations and shared argument handling for the `dotdash`
//! binary. Each command renders either colored human output or JSON.

pub mod commands;
pub mod logging;
