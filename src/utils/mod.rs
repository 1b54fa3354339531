//! Utility helpers shared by the generators.
//!
//! - [`sample`] - Random subsets and random pairs drawn from collections

pub mod sample;
