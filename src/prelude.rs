//! Derive macros used across the crate.

pub use derive_more::{Display, From, Into};
