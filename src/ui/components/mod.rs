//! Reusable UI components

pub mod footer;
pub mod header;
