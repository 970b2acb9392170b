//! Ferret compiler driver.
//!
//! The `ferret` binary is a thin argument parser over [`commands`]; the
//! command handlers live in this library so they can be tested without
//! spawning a process.

pub mod commands;
pub mod tracing_setup;
