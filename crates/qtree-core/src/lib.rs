#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Presentation helpers shared by the qtree crates.

mod colors;
pub mod utils;


pub use colors::Colors;
