//! Data models for NIT processing.

pub mod config;
pub mod item;
