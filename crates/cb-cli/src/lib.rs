//! Library half of the `covbot-nlu` binary: configuration and batch
//! classification, kept out of `main.rs` so they can be tested.

pub mod batch;
pub mod config;
