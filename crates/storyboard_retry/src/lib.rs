//! Retry policy and layered configuration.
//!
//! Remote model calls fail transiently when the provider is overloaded.
//! [`with_retry`] re-runs such calls with doubling delays, and
//! [`StoryboardConfig`] supplies the policy along with model names and
//! generation defaults.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backoff;
mod config;
mod retry;

pub use backoff::Backoff;
pub use config::{GeminiConfig, GenerationConfig, StoryboardConfig};
pub use retry::{RetryPolicy, with_retry};
