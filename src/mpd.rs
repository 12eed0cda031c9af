//! Daemon connection and wire protocol.
//!
//! The daemon speaks a line-based request/response protocol over TCP:
//! one command per line, `Key: value` response lines, `OK` or `ACK …`
//! terminators. This module exposes a blocking client plus the small
//! `Catalog` trait the query layer consumes, so the daemon can be swapped
//! for an in-memory fake in tests.

mod client;
mod error;
mod response;

pub use client::{Catalog, MpdClient};
pub use error::MpdError;
pub use response::Record;

#[cfg(test)]
mod tests;
