//! Freehand digit drawing pad with a remote classifier client.

pub mod client;
pub mod common;
