//! Payload models
//!
//! Typed views over the text payloads the fetcher returns.

pub mod character;

pub use character::{describe, Character};
