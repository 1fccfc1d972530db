//! Utility Module

pub mod logger;
