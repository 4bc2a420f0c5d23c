//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the collision core:
//! - Math types and planar projection helpers
//! - Time measurement
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
