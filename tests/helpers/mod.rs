//! Test helpers module
//!
//! Recording mocks for the messaging gateway and the user store, a handler
//! context wired to a wiremock provider server, and event builders.

#![allow(dead_code)]

pub mod mocks;
pub mod test_context;
pub mod test_data;

pub use mocks::*;
pub use test_context::*;
pub use test_data::*;
