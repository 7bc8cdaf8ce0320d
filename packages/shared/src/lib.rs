//! Shared utilities for Roomie: logger setup and timestamp helpers.

pub mod logger;
pub mod time;
