//! Implementation of the `#[derive(Record)]` macro.
//!
//! Generates the schema descriptor a wartaboard table derives its columns
//! from: field name constants, the declaration-ordered field list, and the
//! field accessor.

mod attrs;
mod derive;

pub use derive::record_derive_impl;
