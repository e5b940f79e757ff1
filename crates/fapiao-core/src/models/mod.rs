//! Data models for invoice renaming.

pub mod config;
pub mod invoice;
