//! Test utilities for Gemini client tests.
//!
//! A one-shot HTTP stub that records the request it receives.

pub mod stub_server;

#[allow(unused_imports)]
pub use stub_server::{CapturedRequest, StubServer};
